//! Session state: the one mutable record behind the view.
//!
//! Every change goes through `Session::handle` with a named event. The session never
//! performs I/O itself; it returns an `Effect` that the driver (`app::App`) executes and
//! then reports back with another event.
//!
//! Requests carry a ticket. Only the latest ticket may settle the session; a result
//! arriving for an older ticket is dropped.

use tracing::debug;

use crate::api_client::GenerateRequest;
use crate::errors::AppError;
use crate::export::clipboard::{copy_text, CopyTarget};
use crate::models::{GenerationResult, QuestionSet};
use crate::upload::{validate_resume, FileCandidate, ResumeUpload, MISSING_FILE_MESSAGE};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    FileSelected(FileCandidate),
    FileCleared,
    JobDescriptionChanged(String),
    Submit,
    SubmitSucceeded { ticket: u64, result: GenerationResult },
    SubmitFailed { ticket: u64, message: String },
    CopyRequested(CopyTarget),
    ExportRequested,
}

/// Work the driver must carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Dispatch { ticket: u64, request: GenerateRequest },
    WriteClipboard { text: String, notice: &'static str },
    ExportDocument(QuestionSet),
}

#[derive(Debug, Default)]
pub struct Session {
    resume: Option<ResumeUpload>,
    job_description: String,
    result: Option<GenerationResult>,
    loading: bool,
    error: Option<String>,
    latest_ticket: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume(&self) -> Option<&ResumeUpload> {
        self.resume.as_ref()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inline error text, if the last action failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit is possible only with a file selected and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.resume.is_some()
    }

    pub fn handle(&mut self, event: SessionEvent) -> Effect {
        match event {
            SessionEvent::FileSelected(candidate) => {
                match validate_resume(candidate) {
                    Ok(upload) => {
                        debug!("Selected resume {}", upload.file_name);
                        self.resume = Some(upload);
                        self.error = None;
                    }
                    // A rejected pick keeps the previous selection.
                    Err(e) => self.error = Some(e.user_message()),
                }
                Effect::None
            }

            SessionEvent::FileCleared => {
                self.resume = None;
                Effect::None
            }

            SessionEvent::JobDescriptionChanged(text) => {
                self.job_description = text;
                Effect::None
            }

            SessionEvent::Submit => self.submit(),

            SessionEvent::SubmitSucceeded { ticket, result } => {
                if self.accepts(ticket) {
                    self.loading = false;
                    self.result = Some(result);
                }
                Effect::None
            }

            SessionEvent::SubmitFailed { ticket, message } => {
                if self.accepts(ticket) {
                    self.loading = false;
                    self.error = Some(message);
                }
                Effect::None
            }

            SessionEvent::CopyRequested(target) => self
                .questions()
                .and_then(|set| copy_text(set, target))
                .map(|text| Effect::WriteClipboard {
                    text,
                    notice: target.notice(),
                })
                .unwrap_or(Effect::None),

            SessionEvent::ExportRequested => match self.questions() {
                Some(set) if !set.is_empty() => Effect::ExportDocument(set.clone()),
                _ => Effect::None,
            },
        }
    }

    fn submit(&mut self) -> Effect {
        if self.loading {
            debug!("Submit ignored: request already in flight");
            return Effect::None;
        }
        let Some(resume) = self.resume.clone() else {
            self.error = Some(MISSING_FILE_MESSAGE.to_string());
            return Effect::None;
        };

        self.loading = true;
        self.error = None;
        self.result = None;
        self.latest_ticket += 1;

        let job_description = Some(self.job_description.trim())
            .filter(|jd| !jd.is_empty())
            .map(String::from);

        Effect::Dispatch {
            ticket: self.latest_ticket,
            request: GenerateRequest {
                resume,
                job_description,
            },
        }
    }

    fn accepts(&self, ticket: u64) -> bool {
        if ticket != self.latest_ticket {
            debug!(
                "Dropping stale result for ticket {ticket} (latest {})",
                self.latest_ticket
            );
            return false;
        }
        true
    }

    fn questions(&self) -> Option<&QuestionSet> {
        self.result.as_ref().and_then(|r| r.questions.as_ref())
    }
}

/// Converts a request outcome into the settling event.
pub fn settle(ticket: u64, outcome: Result<GenerationResult, AppError>) -> SessionEvent {
    match outcome {
        Ok(result) => SessionEvent::SubmitSucceeded { ticket, result },
        Err(e) => SessionEvent::SubmitFailed {
            ticket,
            message: e.user_message(),
        },
    }
}
