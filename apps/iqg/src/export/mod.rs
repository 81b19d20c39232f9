// Projections of a QuestionSet for export: flat list, clipboard text, PDF document.
// All three iterate categories in Category::ALL order.

pub mod clipboard;
pub mod flatten;
pub mod pdf;

pub use clipboard::{ClipboardSink, CopyTarget, SystemClipboard};
pub use pdf::export_pdf;
