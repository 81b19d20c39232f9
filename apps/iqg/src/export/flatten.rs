//! Ordered question flattening: the linear view shared by clipboard text and counts.

use crate::models::{Category, QuestionSet};

/// Yields every question's display text, categories in `Category::ALL` order and
/// items in arrival order. Borrows only, so repeated calls yield the same sequence.
pub fn flatten_questions(set: &QuestionSet) -> impl Iterator<Item = &str> + '_ {
    Category::ALL
        .into_iter()
        .flat_map(move |category| set.get(category).iter().map(|entry| entry.text()))
}

/// Questions whose text is empty or whitespace-only are left out of both exports
/// and do not take a number.
pub fn is_blank_question(text: &str) -> bool {
    text.trim().is_empty()
}

pub fn question_count(set: &QuestionSet) -> usize {
    flatten_questions(set).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionEntry, QuestionItem};

    fn text(s: &str) -> QuestionEntry {
        QuestionEntry::Text(s.to_string())
    }

    #[test]
    fn test_empty_set_yields_nothing() {
        assert_eq!(flatten_questions(&QuestionSet::default()).count(), 0);
    }

    #[test]
    fn test_category_order_and_item_order() {
        let set = QuestionSet {
            role_specific: vec![text("r1")],
            technical: vec![text("t1"), QuestionItem::new("t2").into()],
            behavioral: vec![text("b1")],
            gap_probing: vec![text("g1"), text("g2")],
            ..Default::default()
        };
        let flat: Vec<&str> = flatten_questions(&set).collect();
        assert_eq!(flat, vec!["t1", "t2", "b1", "g1", "g2", "r1"]);
        assert_eq!(question_count(&set), 6);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let set = QuestionSet {
            situational: vec![text("s1"), text("s2")],
            ..Default::default()
        };
        let first: Vec<&str> = flatten_questions(&set).collect();
        let second: Vec<&str> = flatten_questions(&set).collect();
        assert_eq!(first, second);
    }
}
