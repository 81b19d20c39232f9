//! PDF export: draws a `DocumentLayout` with the standard Helvetica faces and
//! writes it to `interview-questions.pdf`.
//!
//! Layout and rendering are CPU-bound and run together inside `spawn_blocking`.
//! `printpdf` documents are `!Send`, so the document never leaves that closure;
//! only the finished bytes do.

use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;

use crate::errors::AppError;
use crate::export::flatten::{flatten_questions, is_blank_question};
use crate::layout::paginator::DOCUMENT_TITLE;
use crate::layout::{layout_questions, DocumentLayout, PageConfig, Typeface};
use crate::models::QuestionSet;

pub const EXPORT_FILE_NAME: &str = "interview-questions.pdf";

fn pdf_error(e: printpdf::Error) -> AppError {
    AppError::Export(format!("PDF backend error: {e}"))
}

/// Renders the laid-out pages to PDF bytes.
///
/// Layout coordinates are top-down; PDF user space is bottom-up, so `y` is flipped.
pub fn render_pdf(layout: &DocumentLayout, config: &PageConfig) -> Result<Vec<u8>, AppError> {
    let width = Mm(config.page_width_mm);
    let height = Mm(config.page_height_mm);

    let (doc, first_page, first_layer) = PdfDocument::new(DOCUMENT_TITLE, width, height, "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..layout.pages.len() {
        targets.push(doc.add_page(width, height, "Layer 1"));
    }

    for (page, (page_index, layer_index)) in layout.pages.iter().zip(targets) {
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            let font = match line.face {
                Typeface::Helvetica => &regular,
                Typeface::HelveticaBold => &bold,
            };
            layer.use_text(
                line.text.clone(),
                line.size_pt,
                Mm(line.x_mm),
                Mm(config.page_height_mm - line.y_mm),
                font,
            );
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

/// Lays out, renders and saves the questions under `output_dir`.
///
/// Returns `Ok(None)` without touching the filesystem when there are no questions
/// with visible text.
pub async fn export_pdf(
    set: QuestionSet,
    config: PageConfig,
    output_dir: &Path,
) -> Result<Option<PathBuf>, AppError> {
    if flatten_questions(&set).all(is_blank_question) {
        return Ok(None);
    }

    let bytes = tokio::task::spawn_blocking(move || {
        let layout = layout_questions(&set, &config);
        info!(
            pages = layout.pages.len(),
            questions = layout.question_count,
            "Rendering question export"
        );
        render_pdf(&layout, &config)
    })
    .await
    .map_err(|e| AppError::Export(format!("spawn_blocking failed in PDF export: {e}")))??;

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| AppError::Export(format!("Cannot create {}: {e}", output_dir.display())))?;

    let path = output_dir.join(EXPORT_FILE_NAME);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::Export(format!("Cannot write {}: {e}", path.display())))?;

    info!("Saved {}", path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_config;
    use crate::models::{QuestionEntry, QuestionItem};

    fn sample_set() -> QuestionSet {
        let mut item = QuestionItem::new("Walk me through a production incident you owned.");
        item.expected_topics = Some(vec!["detection".to_string(), "postmortem".to_string()]);
        QuestionSet {
            technical: vec![QuestionEntry::Text("Explain CAP theorem".to_string())],
            behavioral: vec![item.into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let config = default_page_config();
        let layout = layout_questions(&sample_set(), &config);
        let bytes = render_pdf(&layout, &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_multi_page_layout() {
        let config = default_page_config();
        let set = QuestionSet {
            situational: (0..80)
                .map(|i| QuestionEntry::Text(format!("Situation number {i}")))
                .collect(),
            ..Default::default()
        };
        let layout = layout_questions(&set, &config);
        assert!(layout.pages.len() > 1);
        assert!(render_pdf(&layout, &config).unwrap().starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_export_writes_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_pdf(sample_set(), default_page_config(), dir.path())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_export_with_no_questions_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let result = export_pdf(QuestionSet::default(), default_page_config(), dir.path())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn test_export_with_only_blank_questions_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let set = QuestionSet {
            technical: vec![QuestionEntry::Text("  ".to_string())],
            ..Default::default()
        };
        let result = export_pdf(set, default_page_config(), dir.path()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_export_to_unwritable_dir_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();
        let err = export_pdf(sample_set(), default_page_config(), &blocker)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }
}
