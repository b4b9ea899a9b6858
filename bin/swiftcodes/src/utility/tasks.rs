use axum::routing::get;
use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use eyre::{eyre, Report};
use http::HeaderValue;
use std::sync::Arc;
use swiftcodes_core::migrations::run_migrations;
use swiftcodes_core::services::{SeedService, SeedSummary};
use swiftcodes_core::stores::postgres::DbPool;
use swiftcodes_core::AppState;
use swiftcodes_primitives::error::ApiError;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// `*` allows any origin; otherwise `origins` is a comma-separated allow-list.
pub fn build_cors(origins: &str) -> Result<CorsLayer, Report> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.trim() == "*" {
        return Ok(cors.allow_origin(Any));
    }

    let allowed_origins = origins
        .split(',')
        .map(|s| s.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| eyre!("Invalid CORS origin: {}", e))?;

    Ok(cors.allow_origin(allowed_origins))
}

/// Loads `.env` if present. Returns whether one was found, for logging once
/// the subscriber is installed.
pub fn load_env() -> bool {
    dotenvy::dotenv().is_ok()
}

pub fn log_env_source(loaded: bool) {
    if loaded {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }
}

pub fn build_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Result<Router, Report> {
    let cors = build_cors(&state.config.cors_origins)?;

    Ok(swiftcodes_api::app::create_router(state)
        .route(
            "/metrics",
            get(move || std::future::ready(metric_handle.render())),
        )
        .layer(metric_layer)
        .layer(cors))
}

pub async fn prepare_database(pool: &DbPool) -> Result<(), Report> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        run_migrations(&mut conn)
    })
    .await?
}

/// Seeds the registry from `SEED_FILE_PATH` when the table is empty.
///
/// A failed import is logged and the service starts anyway.
pub async fn initialize_system(state: &Arc<AppState>) {
    match seed_banks(state.clone()).await {
        Ok(Some(summary)) => info!(
            "Seeded {} headquarters and {} branches ({} linked)",
            summary.headquarters, summary.branches, summary.linked_branches
        ),
        Ok(None) => info!("Bank registry already populated, skipping seed"),
        Err(e) => warn!(
            "Failed to seed banks: {}. Continuing without preloading.",
            e
        ),
    }
}

async fn seed_banks(state: Arc<AppState>) -> Result<Option<SeedSummary>, ApiError> {
    let Some(pool) = state.db.clone() else {
        return Ok(None);
    };

    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        SeedService::seed_if_empty(
            &mut conn,
            state.store.as_ref(),
            &state.config.seed_file_path,
        )
    })
    .await
    .map_err(|e| ApiError::Internal(format!("seed task failed: {}", e)))?
}
