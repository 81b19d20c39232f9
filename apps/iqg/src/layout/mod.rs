// Document layout for the PDF export.
// Implements: static Helvetica metrics, greedy word-wrap, top-down page flow.
// Pure and CPU-bound; the exporter runs it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod paginator;

// Re-export the public API consumed by the exporter.
pub use font_metrics::{default_page_config, PageConfig, Typeface};
pub use paginator::{layout_questions, DocumentLayout};
