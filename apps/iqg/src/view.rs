//! Terminal rendering of a generation result: the analysis cards followed by the
//! categorized question lists.
//!
//! Questions are numbered per category here, restarting at 1 for each list;
//! the clipboard and PDF exports number globally.

use crate::models::{AnalysisResult, GenerationResult, QuestionSet, RoleAlignment};

pub fn render_result(result: &GenerationResult) -> String {
    let mut out = String::new();

    if let Some(name) = &result.metadata.candidate_name {
        out.push_str(&format!("Candidate: {name}\n"));
    }
    if let Some(at) = &result.metadata.generated_at {
        out.push_str(&format!("Generated at: {at}\n"));
    }
    if !out.is_empty() {
        out.push('\n');
    }

    if let Some(analysis) = &result.analysis {
        render_analysis(&mut out, analysis);
    }
    if let Some(questions) = &result.questions {
        render_questions(&mut out, questions);
    }
    out
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("{title}\n{}\n", "=".repeat(title.chars().count())));
}

fn card_text(out: &mut String, title: &str, text: &str) {
    out.push_str(&format!("{title}\n  {text}\n\n"));
}

fn card_list(out: &mut String, title: &str, items: Option<&Vec<String>>) {
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        return;
    };
    out.push_str(&format!("{title}\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
    out.push('\n');
}

fn render_analysis(out: &mut String, analysis: &AnalysisResult) {
    heading(out, "Resume Analysis");

    if let Some(experience) = &analysis.experience {
        card_text(out, "Experience Summary", experience);
    }
    card_list(out, "Skills", analysis.skills.as_ref());
    card_list(
        out,
        "Leadership Indicators",
        analysis.leadership_indicators.as_ref(),
    );
    card_list(out, "Potential Gaps to Probe", analysis.gaps.as_ref());
    card_list(out, "Inconsistencies", analysis.inconsistencies.as_ref());

    match &analysis.role_alignment {
        Some(RoleAlignment::Text(text)) => card_text(out, "Role Alignment", text),
        Some(RoleAlignment::Structured(detail)) => {
            out.push_str("Role Alignment\n");
            if let Some(score) = detail.score {
                out.push_str(&format!("  Alignment score: {score}\n"));
            }
            if let Some(summary) = &detail.summary {
                out.push_str(&format!("  {summary}\n"));
            }
            out.push('\n');
            card_list(out, "Strengths", detail.strengths.as_ref());
            card_list(out, "Concerns", detail.concerns.as_ref());
        }
        None => {}
    }
}

fn render_questions(out: &mut String, questions: &QuestionSet) {
    heading(out, "Generated Interview Questions");

    if questions.is_empty() {
        out.push_str("No questions were generated.\n");
        return;
    }

    for (category, entries) in questions.non_empty() {
        out.push_str(&format!("{}\n", category.title()));
        for (index, entry) in entries.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", index + 1, entry.text()));
        }
        out.push('\n');
    }
}
