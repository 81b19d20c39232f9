use serde::{Deserialize, Serialize};

/// The five interview-question groupings, in display order.
///
/// `Category::ALL` is the single source of ordering for every projection
/// (terminal view, clipboard text, PDF export).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Behavioral,
    Situational,
    GapProbing,
    RoleSpecific,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technical,
        Category::Behavioral,
        Category::Situational,
        Category::GapProbing,
        Category::RoleSpecific,
    ];

    /// Key used by the analysis service payload.
    pub fn key(self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Behavioral => "behavioral",
            Category::Situational => "situational",
            Category::GapProbing => "gap_probing",
            Category::RoleSpecific => "role_specific",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Technical => "Technical Questions",
            Category::Behavioral => "Behavioral Questions",
            Category::Situational => "Situational Questions",
            Category::GapProbing => "Gap Probing Questions",
            Category::RoleSpecific => "Role-Specific Questions",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// A structured question as produced by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
}

impl QuestionItem {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
            expected_topics: None,
            follow_up: None,
        }
    }
}

/// One entry of a category: either a bare question string or a full item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionEntry {
    Text(String),
    Item(QuestionItem),
}

impl QuestionEntry {
    /// The display text of the question.
    pub fn text(&self) -> &str {
        match self {
            QuestionEntry::Text(text) => text,
            QuestionEntry::Item(item) => &item.question,
        }
    }

    pub fn context(&self) -> Option<&str> {
        match self {
            QuestionEntry::Text(_) => None,
            QuestionEntry::Item(item) => item.context.as_deref(),
        }
    }

    pub fn expected_topics(&self) -> &[String] {
        match self {
            QuestionEntry::Text(_) => &[],
            QuestionEntry::Item(item) => item.expected_topics.as_deref().unwrap_or(&[]),
        }
    }

    pub fn follow_up(&self) -> Option<&str> {
        match self {
            QuestionEntry::Text(_) => None,
            QuestionEntry::Item(item) => item.follow_up.as_deref(),
        }
    }
}

impl From<QuestionItem> for QuestionEntry {
    fn from(item: QuestionItem) -> Self {
        QuestionEntry::Item(item)
    }
}

/// Questions grouped by category. Absent and empty categories are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical: Vec<QuestionEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behavioral: Vec<QuestionEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub situational: Vec<QuestionEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gap_probing: Vec<QuestionEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_specific: Vec<QuestionEntry>,
}

impl QuestionSet {
    pub fn get(&self, category: Category) -> &[QuestionEntry] {
        match category {
            Category::Technical => &self.technical,
            Category::Behavioral => &self.behavioral,
            Category::Situational => &self.situational,
            Category::GapProbing => &self.gap_probing,
            Category::RoleSpecific => &self.role_specific,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<QuestionEntry> {
        match category {
            Category::Technical => &mut self.technical,
            Category::Behavioral => &mut self.behavioral,
            Category::Situational => &mut self.situational,
            Category::GapProbing => &mut self.gap_probing,
            Category::RoleSpecific => &mut self.role_specific,
        }
    }

    /// Non-empty categories in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[QuestionEntry])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }
}
