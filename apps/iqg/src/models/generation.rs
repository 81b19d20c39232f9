use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::questions::QuestionSet;

/// Informational metadata echoed by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
}

/// The normalized result of one successful generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<QuestionSet>,
    #[serde(default)]
    pub metadata: GenerationMetadata,
}

impl GenerationResult {
    /// Total number of questions across all categories.
    pub fn question_count(&self) -> usize {
        self.questions
            .as_ref()
            .map(crate::export::flatten::question_count)
            .unwrap_or(0)
    }
}
