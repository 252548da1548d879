pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::export::handlers as export_handlers;
use crate::state::AppState;
use crate::store;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog proxies for the preparation form
        .route("/api/v1/titles", get(analysis_handlers::handle_job_titles))
        .route(
            "/api/v1/seniority-levels",
            get(analysis_handlers::handle_seniority_levels),
        )
        .route(
            "/api/v1/interview-simulators",
            get(analysis_handlers::handle_interview_simulators),
        )
        // Analysis
        .route(
            "/api/v1/prepare-interview",
            post(analysis_handlers::handle_prepare_interview),
        )
        // Session
        .route(
            "/api/v1/session",
            get(store::handle_get_session)
                .put(store::handle_update_session)
                .delete(store::handle_reset_session),
        )
        // PDF export
        .route(
            "/api/v1/export/questions",
            post(export_handlers::handle_export_questions),
        )
        .route(
            "/api/v1/export/session",
            post(export_handlers::handle_export_session),
        )
        .with_state(state)
}
