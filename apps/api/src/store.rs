//! In-memory interview session store.
//!
//! Holds the single active preparation session: form inputs plus the latest
//! analysis results. State lives only for the process lifetime — there is no
//! persistence layer, a restart starts a fresh session.

use std::sync::{Arc, RwLock};

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::api::AnalysisResponse;
use crate::models::interview::{CandidateInfo, InterviewQuestion, SkillAnalysis};
use crate::state::AppState;

/// Snapshot of everything the session holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub candidate_info: CandidateInfo,
    pub job_description: String,
    pub resume: String,
    pub skill_analysis: Option<SkillAnalysis>,
    pub questions: Vec<InterviewQuestion>,
}

/// Shared handle to the session. Cheap to clone; all clones see the same
/// session.
#[derive(Clone, Default)]
pub struct InterviewStore {
    inner: Arc<RwLock<InterviewSession>>,
}

impl InterviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> InterviewSession {
        self.inner.read().expect("session lock poisoned").clone()
    }

    pub fn set_candidate_info(&self, info: CandidateInfo) {
        self.inner.write().expect("session lock poisoned").candidate_info = info;
    }

    pub fn set_job_description(&self, jd: String) {
        self.inner.write().expect("session lock poisoned").job_description = jd;
    }

    pub fn set_resume(&self, resume: String) {
        self.inner.write().expect("session lock poisoned").resume = resume;
    }

    pub fn set_skill_analysis(&self, analysis: SkillAnalysis) {
        self.inner.write().expect("session lock poisoned").skill_analysis = Some(analysis);
    }

    pub fn set_questions(&self, questions: Vec<InterviewQuestion>) {
        self.inner.write().expect("session lock poisoned").questions = questions;
    }

    /// Stores a completed analysis: candidate info, skill analysis,
    /// questions and the JD text that produced them.
    pub fn apply_analysis(&self, jd_text: &str, analysis: &AnalysisResponse) {
        self.set_candidate_info(analysis.candidate.clone());
        self.set_job_description(jd_text.to_string());
        self.set_skill_analysis(analysis.skill_analysis.clone());
        self.set_questions(analysis.questions.clone());
    }

    pub fn reset(&self) {
        *self.inner.write().expect("session lock poisoned") = InterviewSession::default();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Partial session update from the preparation form; absent fields are left
/// untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdateRequest {
    pub candidate_info: Option<CandidateInfo>,
    pub job_description: Option<String>,
    pub resume: Option<String>,
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<InterviewSession>, AppError> {
    Ok(Json(state.store.snapshot()))
}

/// PUT /api/v1/session
pub async fn handle_update_session(
    State(state): State<AppState>,
    Json(request): Json<SessionUpdateRequest>,
) -> Result<Json<InterviewSession>, AppError> {
    if let Some(info) = request.candidate_info {
        state.store.set_candidate_info(info);
    }
    if let Some(jd) = request.job_description {
        state.store.set_job_description(jd);
    }
    if let Some(resume) = request.resume {
        state.store.set_resume(resume);
    }
    Ok(Json(state.store.snapshot()))
}

/// DELETE /api/v1/session
pub async fn handle_reset_session(State(state): State<AppState>) -> StatusCode {
    state.store.reset();
    StatusCode::NO_CONTENT
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::mock::mock_questions;

    fn analysis() -> AnalysisResponse {
        AnalysisResponse {
            candidate: CandidateInfo {
                name: String::new(),
                title: "Software Engineer".to_string(),
                seniority_level: "Senior".to_string(),
                interview_simulator: None,
            },
            skill_analysis: SkillAnalysis {
                matched_skills: vec!["Rust".to_string()],
                missing_skills: vec![],
                potential_red_flags: vec![],
                strong_areas: vec![],
            },
            questions: mock_questions(),
        }
    }

    #[test]
    fn test_apply_analysis_populates_the_session() {
        let store = InterviewStore::new();
        store.apply_analysis("Senior Rust role", &analysis());

        let session = store.snapshot();
        assert_eq!(session.candidate_info.title, "Software Engineer");
        assert_eq!(session.job_description, "Senior Rust role");
        assert!(session.skill_analysis.is_some());
        assert_eq!(session.questions.len(), mock_questions().len());
    }

    #[test]
    fn test_reset_returns_to_the_initial_state() {
        let store = InterviewStore::new();
        store.set_resume("plain text resume".to_string());
        store.apply_analysis("JD", &analysis());

        store.reset();
        assert_eq!(store.snapshot(), InterviewSession::default());
    }

    #[test]
    fn test_clones_share_one_session() {
        let store = InterviewStore::new();
        let clone = store.clone();
        clone.set_job_description("shared".to_string());
        assert_eq!(store.snapshot().job_description, "shared");
    }
}
