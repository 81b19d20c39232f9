//! Clipboard text composition and the clipboard write seam.

use crate::errors::AppError;
use crate::export::flatten::is_blank_question;
use crate::models::{Category, QuestionSet};

pub const COPY_ALL_NOTICE: &str = "All questions copied to clipboard!";
pub const COPY_ONE_NOTICE: &str = "Question copied to clipboard!";

/// Where clipboard text goes. The binary uses `SystemClipboard`; tests record writes.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), AppError>;
}

/// The OS clipboard, opened per write.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// What the user asked to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    All,
    /// A single question, 1-based position within its category.
    Question { category: Category, position: usize },
}

impl CopyTarget {
    /// Parses `category:n`, e.g. `technical:2`.
    pub fn parse_question(raw: &str) -> Result<Self, AppError> {
        let (key, position) = raw.split_once(':').ok_or_else(|| {
            AppError::Validation(format!("Expected <category>:<number>, got '{raw}'"))
        })?;
        let category = Category::from_key(key.trim())
            .ok_or_else(|| AppError::Validation(format!("Unknown question category '{key}'")))?;
        let position = position
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                AppError::Validation(format!("Question number must be 1 or greater: '{raw}'"))
            })?;
        Ok(CopyTarget::Question { category, position })
    }

    pub fn notice(self) -> &'static str {
        match self {
            CopyTarget::All => COPY_ALL_NOTICE,
            CopyTarget::Question { .. } => COPY_ONE_NOTICE,
        }
    }
}

/// Builds the plain-text block for "copy all".
///
/// Per non-empty category: `"<Title>:"`, a blank line, `"<n>. <question>"` lines with
/// `n` running across the whole document, then a blank line. Empty or whitespace-only
/// question texts are skipped without consuming a number.
pub fn compose_clipboard_text(set: &QuestionSet) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut number = 1usize;

    for (category, entries) in set.non_empty() {
        lines.push(format!("{}:", category.title()));
        lines.push(String::new());

        for entry in entries {
            let text = entry.text();
            if is_blank_question(text) {
                continue;
            }
            lines.push(format!("{number}. {text}"));
            number += 1;
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Resolves the text for a copy request. `None` when there is nothing to copy.
pub fn copy_text(set: &QuestionSet, target: CopyTarget) -> Option<String> {
    match target {
        CopyTarget::All => {
            if set.is_empty() {
                None
            } else {
                Some(compose_clipboard_text(set))
            }
        }
        CopyTarget::Question { category, position } => set
            .get(category)
            .get(position.checked_sub(1)?)
            .map(|entry| entry.text().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionEntry, QuestionItem};

    fn text(s: &str) -> QuestionEntry {
        QuestionEntry::Text(s.to_string())
    }

    /// Extracts the leading running numbers from composed text.
    fn numbers(composed: &str) -> Vec<usize> {
        composed
            .lines()
            .filter_map(|l| l.split_once(". ").and_then(|(n, _)| n.parse().ok()))
            .collect()
    }

    #[test]
    fn test_role_specific_only_scenario() {
        let set = QuestionSet {
            role_specific: vec![text("How would you scale our API?"), text("Why this role?")],
            ..Default::default()
        };
        let out = compose_clipboard_text(&set);
        assert!(out.starts_with("Role-Specific Questions:"));
        assert!(out.contains("1. How would you scale our API?"));
        assert!(out.contains("2. Why this role?"));
        for c in Category::ALL {
            if c != Category::RoleSpecific {
                assert!(!out.contains(c.title()), "unexpected header {}", c.title());
            }
        }
    }

    #[test]
    fn test_exact_layout() {
        let set = QuestionSet {
            technical: vec![text("T1")],
            situational: vec![QuestionItem::new("S1").into(), text("S2")],
            ..Default::default()
        };
        let expected = "Technical Questions:\n\n1. T1\n\nSituational Questions:\n\n2. S1\n3. S2\n";
        assert_eq!(compose_clipboard_text(&set), expected);
    }

    #[test]
    fn test_numbering_is_continuous_across_empty_categories() {
        let set = QuestionSet {
            technical: vec![text("a"), text("b")],
            gap_probing: vec![text("c")],
            role_specific: vec![text("d"), text("e")],
            ..Default::default()
        };
        assert_eq!(numbers(&compose_clipboard_text(&set)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_blank_text_does_not_consume_a_number() {
        let set = QuestionSet {
            behavioral: vec![text("a"), text(""), text("   "), text("b")],
            ..Default::default()
        };
        let out = compose_clipboard_text(&set);
        assert_eq!(numbers(&out), vec![1, 2]);
        assert!(out.contains("2. b"));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let set = QuestionSet {
            technical: vec![text("a")],
            behavioral: vec![text("b")],
            ..Default::default()
        };
        assert_eq!(compose_clipboard_text(&set), compose_clipboard_text(&set));
    }

    #[test]
    fn test_empty_set_composes_empty_string() {
        assert_eq!(compose_clipboard_text(&QuestionSet::default()), "");
        assert_eq!(copy_text(&QuestionSet::default(), CopyTarget::All), None);
    }

    #[test]
    fn test_copy_single_question() {
        let set = QuestionSet {
            technical: vec![text("a"), QuestionItem::new("b").into()],
            ..Default::default()
        };
        let target = CopyTarget::parse_question("technical:2").unwrap();
        assert_eq!(copy_text(&set, target).as_deref(), Some("b"));
        let missing = CopyTarget::parse_question("technical:3").unwrap();
        assert_eq!(copy_text(&set, missing), None);
    }

    #[test]
    fn test_parse_question_rejects_bad_input() {
        assert!(CopyTarget::parse_question("technical").is_err());
        assert!(CopyTarget::parse_question("culture:1").is_err());
        assert!(CopyTarget::parse_question("technical:0").is_err());
        assert!(CopyTarget::parse_question("technical:x").is_err());
    }
}
