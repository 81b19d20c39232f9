//! Pagination: flows the categorized questions onto fixed-size pages.
//!
//! # Cursor model
//! A single top-down cursor `y` marks the baseline of the next line. Before any line is
//! placed, `y + line_height > page_height - margin` starts a new page and resets `y` to
//! the top margin. The check runs for every line, wrapped continuations included.
//! Category headers additionally require room for themselves plus one line.
//!
//! The output is a plain list of placed lines per page; `export::pdf` only draws it.

use serde::{Deserialize, Serialize};

use crate::export::flatten::is_blank_question;
use crate::layout::font_metrics::{get_metrics, FontMetricTable, PageConfig, Typeface};
use crate::models::{QuestionEntry, QuestionSet};

pub const DOCUMENT_TITLE: &str = "Interview Questions";
pub const FALLBACK_FOLLOW_UP: &str = "Can you provide a specific example from your experience?";

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One line of text at an absolute position (millimetres from the top-left corner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub face: Typeface,
    pub size_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayout {
    pub pages: Vec<Page>,
    pub question_count: usize,
}

impl DocumentLayout {
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Word wrap
// ────────────────────────────────────────────────────────────────────────────

/// Greedy word-wrap to `max_width_mm`. Whitespace runs collapse to single spaces.
///
/// A word wider than a whole line is broken by character. Empty text yields no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    let max_em = max_width_mm / (size_pt * crate::layout::font_metrics::MM_PER_PT);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_str(word);
        let space_w = if current.is_empty() {
            0.0
        } else {
            metrics.space_width
        };

        if current_width + space_w + word_w <= max_em {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width += space_w + word_w;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_w <= max_em {
            current.push_str(word);
            current_width = word_w;
            continue;
        }

        // Oversized word: hard-break by character.
        for c in word.chars() {
            let c_w = metrics.char_width(c);
            if !current.is_empty() && current_width + c_w > max_em {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += c_w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Page flow
// ────────────────────────────────────────────────────────────────────────────

struct PageFlow<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    y: f32,
}

impl<'a> PageFlow<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Page::default()],
            y: config.title_top_mm,
        }
    }

    /// Starts a new page unless `lines` more lines fit below the cursor.
    fn ensure_room(&mut self, lines: usize) {
        if self.y + self.config.line_height_mm * lines as f32 > self.config.bottom_limit_mm() {
            self.pages.push(Page::default());
            self.y = self.config.margin_mm;
        }
    }

    fn emit(&mut self, text: String, indent_mm: f32, face: Typeface, size_pt: f32) {
        self.ensure_room(1);
        let x_mm = self.config.margin_mm + indent_mm;
        let y_mm = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text,
                x_mm,
                y_mm,
                face,
                size_pt,
            });
        }
        self.y += self.config.line_height_mm;
    }

    fn emit_wrapped(&mut self, text: &str, indent_mm: f32) {
        let size = self.config.body_size_pt;
        let width = self.config.printable_width_mm() - indent_mm;
        for line in wrap_text(text, get_metrics(Typeface::Helvetica), size, width) {
            self.emit(line, indent_mm, Typeface::Helvetica, size);
        }
    }

    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }
}

/// Lays out the full document: title, then each non-empty category in fixed order.
///
/// Question numbers run across categories and restart at 1 for every call.
pub fn layout_questions(set: &QuestionSet, config: &PageConfig) -> DocumentLayout {
    let mut flow = PageFlow::new(config);
    let lh = config.line_height_mm;

    flow.emit(
        DOCUMENT_TITLE.to_string(),
        0.0,
        Typeface::HelveticaBold,
        config.title_size_pt,
    );
    flow.advance(lh * 0.5);

    let mut number = 1usize;
    for (category, entries) in set.non_empty() {
        flow.ensure_room(2);
        flow.emit(
            category.title().to_string(),
            0.0,
            Typeface::HelveticaBold,
            config.body_size_pt,
        );

        for entry in entries.iter().filter(|e| !is_blank_question(e.text())) {
            layout_entry(&mut flow, entry, number);
            number += 1;
            flow.advance(lh * 0.5);
        }

        flow.advance(lh);
    }

    DocumentLayout {
        pages: flow.pages,
        question_count: number - 1,
    }
}

fn layout_entry(flow: &mut PageFlow<'_>, entry: &QuestionEntry, number: usize) {
    let indent = flow.config.indent_mm;

    flow.emit_wrapped(&format!("{number}. {}", entry.text()), 0.0);

    if let Some(context) = entry.context() {
        flow.emit_wrapped(&format!("Context: {context}"), indent);
    }

    let topics = entry.expected_topics();
    if !topics.is_empty() {
        flow.emit_wrapped(&format!("Evaluation criteria: {}", topics.join(", ")), indent);
    }

    let follow_up = entry.follow_up().unwrap_or(FALLBACK_FOLLOW_UP);
    flow.emit_wrapped(&format!("Follow-up: {follow_up}"), indent);
}
