//! Core interview-preparation domain types.
//!
//! These are the wire types exchanged with the external Analysis API and the
//! input to the PDF export pipeline. JSON uses camelCase field names.

use serde::{Deserialize, Serialize};

/// Candidate identity captured on the preparation form.
///
/// `name` may be empty (the form allows anonymous preparation);
/// `interview_simulator` is the optional interviewer-style preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInfo {
    #[serde(default)]
    pub name: String,
    pub title: String,
    pub seniority_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_simulator: Option<String>,
}

impl CandidateInfo {
    /// The simulator style, if one was chosen. Empty strings count as unset.
    pub fn simulator(&self) -> Option<&str> {
        self.interview_simulator
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Skill-gap analysis returned by the Analysis API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub potential_red_flags: Vec<String>,
    pub strong_areas: Vec<String>,
}

/// One entry of the 1–5 star scoring rubric attached to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringItem {
    pub stars: u8,
    pub description: String,
}

/// Evaluation criteria arrive either as one paragraph or as a list of
/// bullet points; both shapes must deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationCriteria {
    Single(String),
    List(Vec<String>),
}

impl EvaluationCriteria {
    /// True when the criteria carry no usable content: an empty or
    /// whitespace-only paragraph. An empty *list* is present-but-empty and
    /// renders zero bullets, so it does not count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            EvaluationCriteria::Single(s) => s.trim().is_empty(),
            EvaluationCriteria::List(_) => false,
        }
    }
}

/// A generated interview question with its answer key and rubric.
///
/// `category` is a free-form label; which labels exist (and in what order
/// they render) is decided by the active [`CategorySet`], not by this type.
///
/// [`CategorySet`]: crate::export::theme::CategorySet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub id: String,
    pub question: String,
    pub category: String,
    pub expected_answer: String,
    pub evaluation_criteria: EvaluationCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_guide: Option<Vec<ScoringItem>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
