use std::sync::Arc;

use crate::api_client::AnalysisApi;
use crate::config::Config;
use crate::export::ClipboardSink;
use crate::layout::PageConfig;

/// Shared collaborators the driver needs to carry out session effects.
#[derive(Clone)]
pub struct AppState {
    /// Analysis service. Default: `AnalysisClient` over HTTP.
    pub api: Arc<dyn AnalysisApi>,
    /// Clipboard target. Default: `SystemClipboard`.
    pub clipboard: Arc<dyn ClipboardSink>,
    pub config: Config,
    /// Page geometry for the PDF export (A4, 10 mm margins, 8 mm lines).
    pub page_config: PageConfig,
}
