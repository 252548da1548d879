//! Axum route handlers for the Analysis API proxy.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::analysis::client::CvUpload;
use crate::errors::AppError;
use crate::models::api::{
    AnalysisResponse, CatalogPage, InterviewSimulator, JobTitle, SeniorityLevel,
};
use crate::state::AppState;

/// GET /api/v1/titles
pub async fn handle_job_titles(
    State(state): State<AppState>,
) -> Result<Json<CatalogPage<JobTitle>>, AppError> {
    let data = state.analysis.job_titles().await?;
    Ok(Json(CatalogPage::new(data)))
}

/// GET /api/v1/seniority-levels
pub async fn handle_seniority_levels(
    State(state): State<AppState>,
) -> Result<Json<CatalogPage<SeniorityLevel>>, AppError> {
    let data = state.analysis.seniority_levels().await?;
    Ok(Json(CatalogPage::new(data)))
}

/// GET /api/v1/interview-simulators
pub async fn handle_interview_simulators(
    State(state): State<AppState>,
) -> Result<Json<CatalogPage<InterviewSimulator>>, AppError> {
    let data = state.analysis.interview_simulators().await?;
    Ok(Json(CatalogPage::new(data)))
}

/// POST /api/v1/prepare-interview
///
/// Multipart form with `jd_text` (text) and `cv_file` (the resume). Forwards
/// both to the analysis backend, stores the result in the session and
/// returns it.
pub async fn handle_prepare_interview(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut jd_text: Option<String> = None;
    let mut cv_file: Option<CvUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        match field.name() {
            Some("jd_text") => {
                jd_text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(e.to_string()))?,
                );
            }
            Some("cv_file") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                cv_file = Some(CvUpload { file_name, bytes });
            }
            _ => {}
        }
    }

    let jd_text = jd_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("jd_text cannot be empty".to_string()))?;
    let cv_file =
        cv_file.ok_or_else(|| AppError::Validation("cv_file is required".to_string()))?;

    let analysis = state.analysis.prepare_interview(&jd_text, cv_file).await?;

    state.store.apply_analysis(&jd_text, &analysis);

    Ok(Json(analysis))
}
