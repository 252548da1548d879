//! Canned analysis backend for development and tests.
//!
//! Returns a fixed five-way question set without any network traffic.
//! Enabled with `USE_MOCK_ANALYSIS=true`.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::analysis::client::{AnalysisApi, AnalysisError, CvUpload};
use crate::models::api::{
    AnalysisResponse, InterviewSimulator, JobTitle, SeniorityLevel,
};
use crate::models::interview::{
    CandidateInfo, EvaluationCriteria, InterviewQuestion, ScoringItem, SkillAnalysis,
};

pub struct MockAnalysisClient;

#[async_trait]
impl AnalysisApi for MockAnalysisClient {
    async fn job_titles(&self) -> Result<Vec<JobTitle>, AnalysisError> {
        Ok(["Software Engineer", "Data Engineer", "Product Manager"]
            .into_iter()
            .map(|name| JobTitle {
                id: Uuid::new_v4(),
                name: name.to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .collect())
    }

    async fn seniority_levels(&self) -> Result<Vec<SeniorityLevel>, AnalysisError> {
        Ok(["Junior", "Mid", "Senior", "Staff"]
            .into_iter()
            .map(|name| SeniorityLevel {
                id: Uuid::new_v4(),
                name: name.to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .collect())
    }

    async fn interview_simulators(&self) -> Result<Vec<InterviewSimulator>, AnalysisError> {
        Ok(["Google", "Amazon", "Netflix"]
            .into_iter()
            .map(|name| InterviewSimulator {
                id: Uuid::new_v4(),
                name: name.to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .collect())
    }

    async fn prepare_interview(
        &self,
        _jd_text: &str,
        _cv_file: CvUpload,
    ) -> Result<AnalysisResponse, AnalysisError> {
        Ok(AnalysisResponse {
            candidate: CandidateInfo {
                name: String::new(),
                title: "Software Engineer".to_string(),
                seniority_level: "Senior".to_string(),
                interview_simulator: None,
            },
            skill_analysis: SkillAnalysis {
                matched_skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
                missing_skills: vec!["Kubernetes".to_string()],
                potential_red_flags: vec![],
                strong_areas: vec!["Systems design".to_string()],
            },
            questions: mock_questions(),
        })
    }
}

/// A small five-way question set exercising both criteria shapes and the
/// scoring guide.
pub fn mock_questions() -> Vec<InterviewQuestion> {
    vec![
        InterviewQuestion {
            id: "ck-1".to_string(),
            question: "Explain how ownership and borrowing prevent data races.".to_string(),
            category: "Core Knowledge".to_string(),
            expected_answer: "One mutable reference xor many shared references, checked at \
                              compile time; Send/Sync extend the guarantee across threads."
                .to_string(),
            evaluation_criteria: EvaluationCriteria::List(vec![
                "Mentions aliasing rules".to_string(),
                "Mentions Send and Sync".to_string(),
            ]),
            scoring_guide: Some(vec![
                ScoringItem {
                    stars: 5,
                    description: "Precise rules with a threading example".to_string(),
                },
                ScoringItem {
                    stars: 3,
                    description: "Correct rules, no concurrency link".to_string(),
                },
                ScoringItem {
                    stars: 1,
                    description: "Cannot state the aliasing rules".to_string(),
                },
            ]),
        },
        InterviewQuestion {
            id: "ps-1".to_string(),
            question: "Walk through debugging a service whose p99 latency doubled overnight."
                .to_string(),
            category: "Practical Skills".to_string(),
            expected_answer: "Compare deploys and traffic mix, check saturation metrics, \
                              bisect with traces before touching code."
                .to_string(),
            evaluation_criteria: EvaluationCriteria::Single(
                "Structured, measurement-first approach.".to_string(),
            ),
            scoring_guide: None,
        },
        InterviewQuestion {
            id: "sb-1".to_string(),
            question: "A migration locked the main table in production. What now?".to_string(),
            category: "Scenario-Based".to_string(),
            expected_answer: "Stop the migration, restore service first, then redo it online \
                              with batched backfills."
                .to_string(),
            evaluation_criteria: EvaluationCriteria::List(vec![
                "Prioritizes user impact".to_string(),
                "Knows online migration patterns".to_string(),
                "Mentions a post-incident review".to_string(),
            ]),
            scoring_guide: None,
        },
    ]
}
