//! Wire types for the external Analysis API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::interview::{CandidateInfo, InterviewQuestion, SkillAnalysis};

/// A selectable job title from the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitle {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A selectable seniority level from the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeniorityLevel {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A selectable interviewer-style preset from the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSimulator {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Envelope used by all catalog list endpoints: `{ "data": [...], "total": n }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> CatalogPage<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self { data, total }
    }
}

/// Result of `prepare-interview`: the skill-gap analysis plus the generated
/// question set for the submitted JD/resume pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub candidate: CandidateInfo,
    pub skill_analysis: SkillAnalysis,
    pub questions: Vec<InterviewQuestion>,
}
