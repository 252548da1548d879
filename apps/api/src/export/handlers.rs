//! Axum route handlers for the Export API.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::service::{
    group_questions, ExportedDocument, PdfExportService, QuestionsByCategory,
};
use crate::models::interview::CandidateInfo;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuestionsRequest {
    pub candidate_info: CandidateInfo,
    pub questions_by_category: QuestionsByCategory,
}

/// POST /api/v1/export/questions
///
/// Renders the supplied candidate info + grouped questions and returns the
/// PDF as a download. Layout is CPU-bound, so it runs on the blocking pool.
pub async fn handle_export_questions(
    State(state): State<AppState>,
    Json(request): Json<ExportQuestionsRequest>,
) -> Result<Response, AppError> {
    let service = PdfExportService::new(state.page_setup.clone(), state.categories.clone());

    let exported = tokio::task::spawn_blocking(move || {
        service.export_questions(&request.candidate_info, &request.questions_by_category)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e)))??;

    Ok(pdf_response(exported))
}

/// POST /api/v1/export/session
///
/// Exports the questions held in the current in-memory session, grouped by
/// the active category taxonomy.
pub async fn handle_export_session(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.store.snapshot();
    if session.questions.is_empty() {
        return Err(AppError::Validation(
            "the current session has no questions to export".to_string(),
        ));
    }

    let by_category = group_questions(&session.questions, &state.categories);
    let service = PdfExportService::new(state.page_setup.clone(), state.categories.clone());

    let exported = tokio::task::spawn_blocking(move || {
        service.export_questions(&session.candidate_info, &by_category)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e)))??;

    Ok(pdf_response(exported))
}

fn pdf_response(document: ExportedDocument) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    (headers, document.bytes).into_response()
}
