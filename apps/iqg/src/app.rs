//! Effect driver: feeds events to the `Session` and executes the effects it returns.
//!
//! Events run to completion one at a time: a dispatched request is awaited and its
//! settling event handled before `dispatch` returns.

use tracing::{info, warn};

use crate::export::export_pdf;
use crate::session::{settle, Effect, Session, SessionEvent};
use crate::state::AppState;

/// A user-facing notification produced by copy or export.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct App {
    state: AppState,
    session: Session,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn dispatch(&mut self, event: SessionEvent) -> Option<Notice> {
        let mut next = Some(event);
        let mut notice = None;

        while let Some(event) = next.take() {
            match self.session.handle(event) {
                Effect::None => {}

                Effect::Dispatch { ticket, request } => {
                    let outcome = self.state.api.generate(&request).await;
                    match &outcome {
                        Ok(result) => info!(
                            "Request {ticket} succeeded: {} questions",
                            result.question_count()
                        ),
                        Err(e) => warn!("Request {ticket} failed: {e}"),
                    }
                    next = Some(settle(ticket, outcome));
                }

                Effect::WriteClipboard { text, notice: ok } => {
                    notice = Some(match self.state.clipboard.write_text(&text) {
                        Ok(()) => Notice::Info(ok.to_string()),
                        Err(e) => Notice::Error(e.user_message()),
                    });
                }

                Effect::ExportDocument(set) => {
                    let page_config = self.state.page_config.clone();
                    notice = match export_pdf(set, page_config, &self.state.config.output_dir).await
                    {
                        Ok(Some(path)) => Some(Notice::Info(format!("Saved {}", path.display()))),
                        Ok(None) => None,
                        Err(e) => Some(Notice::Error(e.user_message())),
                    };
                }
            }
        }

        notice
    }
}
