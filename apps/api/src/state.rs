use std::sync::Arc;

use crate::analysis::AnalysisApi;
use crate::config::Config;
use crate::export::{CategorySet, PageSetup};
use crate::store::InterviewStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis backend. Default: HTTP client against
    /// ANALYSIS_API_URL; swap for the mock via USE_MOCK_ANALYSIS.
    pub analysis: Arc<dyn AnalysisApi>,
    /// The single in-memory preparation session.
    pub store: InterviewStore,
    pub config: Config,
    /// Active category taxonomy — render order and header colors for the
    /// question export.
    pub categories: CategorySet,
    /// Page geometry for the export layout engine.
    pub page_setup: PageSetup,
}
