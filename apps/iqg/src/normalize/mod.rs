//! Response normalization: maps the analysis service's loosely-typed JSON into
//! `GenerationResult`.
//!
//! Field names vary between two schemes. Each attribute is resolved by checking the
//! primary key, then at most one alternate key; the first non-empty value wins and an
//! attribute with no usable value is left as `None`. Normalization never fails: wrong
//! types and unknown fields are ignored. Only the envelope check (`parse_envelope`)
//! can reject a payload.

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{
    AlignmentDetail, AnalysisResult, Category, GenerationMetadata, GenerationResult,
    QuestionEntry, QuestionItem, QuestionSet, RoleAlignment,
};

// ────────────────────────────────────────────────────────────────────────────
// Field resolution table
// ────────────────────────────────────────────────────────────────────────────

/// `(primary, alternate)` key pairs for the analysis attributes.
const SKILLS_KEYS: (&str, Option<&str>) = ("skills", Some("key_skills"));
const GAPS_KEYS: (&str, Option<&str>) = ("gaps", Some("experience_gaps"));
const EXPERIENCE_KEYS: (&str, Option<&str>) = ("experience", Some("experience_summary"));
const LEADERSHIP_KEYS: (&str, Option<&str>) = ("leadership_indicators", None);
const INCONSISTENCIES_KEYS: (&str, Option<&str>) = ("inconsistencies", None);

/// Returns the first usable value under `primary`, then `alternate`.
///
/// `extract` converts a raw value into the attribute type and returns `None` when the
/// value is empty or of the wrong type, which lets the alternate key be tried.
pub fn resolve_field<T>(
    obj: &Map<String, Value>,
    (primary, alternate): (&str, Option<&str>),
    extract: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    obj.get(primary)
        .and_then(&extract)
        .or_else(|| alternate.and_then(|key| obj.get(key)).and_then(&extract))
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

/// Non-empty list of strings. Non-string elements are dropped.
fn string_list(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Envelope
// ────────────────────────────────────────────────────────────────────────────

/// Checks the `{ success: true, data: {...} }` envelope and normalizes `data`.
pub fn parse_envelope(body: &Value) -> Result<GenerationResult, AppError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    match body.get("data") {
        Some(data @ Value::Object(_)) if success => Ok(normalize_data(data)),
        _ => {
            debug!("Rejecting response envelope: success={success}");
            Err(AppError::InvalidResponse)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalizer
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes the `data` object of a successful response.
pub fn normalize_data(data: &Value) -> GenerationResult {
    GenerationResult {
        analysis: data
            .get("analysis")
            .and_then(Value::as_object)
            .map(normalize_analysis),
        questions: data
            .get("questions")
            .and_then(Value::as_object)
            .map(normalize_questions),
        metadata: data
            .get("metadata")
            .and_then(Value::as_object)
            .map(normalize_metadata)
            .unwrap_or_default(),
    }
}

pub fn normalize_analysis(obj: &Map<String, Value>) -> AnalysisResult {
    AnalysisResult {
        experience: resolve_field(obj, EXPERIENCE_KEYS, non_empty_string),
        skills: resolve_field(obj, SKILLS_KEYS, string_list),
        leadership_indicators: resolve_field(obj, LEADERSHIP_KEYS, string_list),
        gaps: resolve_field(obj, GAPS_KEYS, string_list),
        inconsistencies: resolve_field(obj, INCONSISTENCIES_KEYS, string_list),
        role_alignment: obj.get("role_alignment").and_then(normalize_role_alignment),
    }
}

fn normalize_role_alignment(value: &Value) -> Option<RoleAlignment> {
    match value {
        Value::String(_) => non_empty_string(value).map(RoleAlignment::Text),
        Value::Object(obj) => Some(RoleAlignment::Structured(AlignmentDetail {
            score: obj.get("alignment_score").and_then(Value::as_f64),
            summary: obj.get("summary").and_then(non_empty_string),
            strengths: obj.get("strengths").and_then(string_list),
            concerns: obj.get("concerns").and_then(string_list),
        })),
        _ => None,
    }
}

/// Reads each category by its canonical key. No renaming is applied.
pub fn normalize_questions(obj: &Map<String, Value>) -> QuestionSet {
    let mut set = QuestionSet::default();
    for category in Category::ALL {
        let Some(raw) = obj.get(category.key()).and_then(Value::as_array) else {
            continue;
        };
        let entries = set.get_mut(category);
        for value in raw {
            match normalize_entry(value) {
                Some(entry) => entries.push(entry),
                None => debug!("Dropping unrecognized {} entry", category.key()),
            }
        }
    }
    set
}

fn normalize_entry(value: &Value) -> Option<QuestionEntry> {
    match value {
        Value::String(text) => Some(QuestionEntry::Text(text.clone())),
        Value::Object(obj) => {
            let question = obj.get("question")?.as_str()?.to_string();
            Some(QuestionEntry::Item(QuestionItem {
                question,
                context: obj.get("context").and_then(non_empty_string),
                expected_topics: obj.get("expected_topics").and_then(string_list),
                follow_up: obj.get("follow_up").and_then(non_empty_string),
            }))
        }
        _ => None,
    }
}

fn normalize_metadata(obj: &Map<String, Value>) -> GenerationMetadata {
    GenerationMetadata {
        generated_at: obj.get("generated_at").and_then(non_empty_string),
        candidate_name: obj.get("candidate_name").and_then(non_empty_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::flatten::flatten_questions;
    use serde_json::json;

    fn analysis_of(raw: Value) -> AnalysisResult {
        normalize_analysis(raw.as_object().unwrap())
    }

    #[test]
    fn test_scenario_key_skills_and_single_question() {
        let body = json!({
            "success": true,
            "data": {
                "analysis": {"key_skills": ["Go", "SQL"]},
                "questions": {"technical": [{"question": "Explain CAP theorem"}]}
            }
        });
        let result = parse_envelope(&body).unwrap();
        let analysis = result.analysis.as_ref().unwrap();
        assert_eq!(
            analysis.skills,
            Some(vec!["Go".to_string(), "SQL".to_string()])
        );
        let flat: Vec<&str> = flatten_questions(result.questions.as_ref().unwrap()).collect();
        assert_eq!(flat, vec!["Explain CAP theorem"]);
    }

    #[test]
    fn test_primary_key_only() {
        let a = analysis_of(json!({"skills": ["Rust"], "gaps": ["No k8s"], "experience": "8y"}));
        assert_eq!(a.skills, Some(vec!["Rust".to_string()]));
        assert_eq!(a.gaps, Some(vec!["No k8s".to_string()]));
        assert_eq!(a.experience.as_deref(), Some("8y"));
    }

    #[test]
    fn test_alternate_key_only() {
        let a = analysis_of(json!({
            "key_skills": ["Python"],
            "experience_gaps": ["2019-2020"],
            "experience_summary": "Backend engineer"
        }));
        assert_eq!(a.skills, Some(vec!["Python".to_string()]));
        assert_eq!(a.gaps, Some(vec!["2019-2020".to_string()]));
        assert_eq!(a.experience.as_deref(), Some("Backend engineer"));
    }

    #[test]
    fn test_neither_key_leaves_field_absent() {
        let a = analysis_of(json!({"unrelated": true}));
        assert_eq!(a, AnalysisResult::default());
    }

    #[test]
    fn test_primary_wins_when_both_present() {
        let a = analysis_of(json!({"skills": ["A"], "key_skills": ["B"]}));
        assert_eq!(a.skills, Some(vec!["A".to_string()]));
    }

    #[test]
    fn test_empty_primary_falls_back_to_alternate() {
        let a = analysis_of(json!({"skills": [], "key_skills": ["B"], "experience": ""}));
        assert_eq!(a.skills, Some(vec!["B".to_string()]));
        assert_eq!(a.experience, None);
    }

    #[test]
    fn test_wrong_type_is_treated_as_absent() {
        let a = analysis_of(json!({"skills": "Rust", "leadership_indicators": 3}));
        assert_eq!(a.skills, None);
        assert_eq!(a.leadership_indicators, None);
    }

    #[test]
    fn test_fields_without_alternate_ignore_lookalikes() {
        let a = analysis_of(json!({"leadership": ["Led team"], "inconsistencies": ["Dates"]}));
        assert_eq!(a.leadership_indicators, None);
        assert_eq!(a.inconsistencies, Some(vec!["Dates".to_string()]));
    }

    #[test]
    fn test_role_alignment_text_preserved() {
        let a = analysis_of(json!({"role_alignment": "Strong match for backend roles"}));
        assert_eq!(
            a.role_alignment,
            Some(RoleAlignment::Text(
                "Strong match for backend roles".to_string()
            ))
        );
    }

    #[test]
    fn test_role_alignment_structured_fields_independent() {
        let a = analysis_of(json!({
            "role_alignment": {"alignment_score": 82, "concerns": ["No Go"]}
        }));
        let Some(RoleAlignment::Structured(detail)) = a.role_alignment else {
            panic!("expected structured alignment");
        };
        assert_eq!(detail.score, Some(82.0));
        assert_eq!(detail.summary, None);
        assert_eq!(detail.strengths, None);
        assert_eq!(detail.concerns, Some(vec!["No Go".to_string()]));
    }

    #[test]
    fn test_role_alignment_other_types_absent() {
        assert_eq!(analysis_of(json!({"role_alignment": 7})).role_alignment, None);
        assert_eq!(analysis_of(json!({"role_alignment": ""})).role_alignment, None);
    }

    #[test]
    fn test_questions_mixed_entries_preserve_order() {
        let set = normalize_questions(
            json!({
                "behavioral": [
                    "Tell me about a conflict",
                    {"question": "Describe a failure", "follow_up": "What changed?"},
                    42,
                    {"context": "missing question"}
                ]
            })
            .as_object()
            .unwrap(),
        );
        assert_eq!(set.behavioral.len(), 2);
        assert_eq!(set.behavioral[0].text(), "Tell me about a conflict");
        assert_eq!(set.behavioral[1].follow_up(), Some("What changed?"));
        assert!(set.technical.is_empty());
    }

    #[test]
    fn test_non_array_category_is_absent() {
        let set = normalize_questions(json!({"technical": "oops"}).as_object().unwrap());
        assert!(set.is_empty());
    }

    #[test]
    fn test_metadata_pass_through() {
        let result = normalize_data(&json!({
            "metadata": {"candidate_name": "Jordan Lee", "generated_at": "2024-05-01T10:00:00Z"}
        }));
        assert_eq!(result.metadata.candidate_name.as_deref(), Some("Jordan Lee"));
        assert_eq!(
            result.metadata.generated_at.as_deref(),
            Some("2024-05-01T10:00:00Z")
        );
        assert!(result.analysis.is_none());
        assert!(result.questions.is_none());
    }

    #[test]
    fn test_envelope_rejects_success_false() {
        let body = json!({"success": false, "data": {}});
        assert!(matches!(
            parse_envelope(&body),
            Err(AppError::InvalidResponse)
        ));
    }

    #[test]
    fn test_envelope_rejects_missing_data() {
        assert!(matches!(
            parse_envelope(&json!({"success": true})),
            Err(AppError::InvalidResponse)
        ));
        assert!(matches!(
            parse_envelope(&json!({"success": true, "data": null})),
            Err(AppError::InvalidResponse)
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = json!({
            "success": true,
            "request_id": "abc",
            "data": {"analysis": {"skills": ["Go"], "confidence": 0.9}, "debug": {}}
        });
        let result = parse_envelope(&body).unwrap();
        assert_eq!(
            result.analysis.unwrap().skills,
            Some(vec!["Go".to_string()])
        );
    }
}
