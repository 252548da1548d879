mod analysis;
mod config;
mod errors;
mod export;
mod models;
mod routes;
mod state;
mod store;

use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{AnalysisApi, HttpAnalysisClient, MockAnalysisClient};
use crate::config::Config;
use crate::export::{default_page_setup, CategorySet};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::InterviewStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Prep API v{}", env!("CARGO_PKG_VERSION"));

    // Analysis backend: real HTTP client, or the canned mock for development
    let analysis: Arc<dyn AnalysisApi> = if config.use_mock_analysis {
        info!("Using mock analysis client");
        Arc::new(MockAnalysisClient)
    } else {
        info!("Analysis API: {}", config.analysis_api_url);
        Arc::new(HttpAnalysisClient::new(config.analysis_api_url.clone()))
    };

    // Category taxonomy drives export section order and header colors
    let categories = CategorySet::from_name(&config.category_taxonomy).ok_or_else(|| {
        anyhow!(
            "Unknown CATEGORY_TAXONOMY '{}' (expected 'five-way' or 'three-way')",
            config.category_taxonomy
        )
    })?;
    info!("Category taxonomy: {}", config.category_taxonomy);

    // Export page geometry: A4 portrait, 20mm margins, 7mm line height
    let page_setup = default_page_setup();

    // Build app state
    let state = AppState {
        analysis,
        store: InterviewStore::new(),
        config: config.clone(),
        categories,
        page_setup,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
