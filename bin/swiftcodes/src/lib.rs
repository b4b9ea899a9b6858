mod observability;

pub mod utility;

pub use swiftcodes_primitives::error::ApiError;

use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{
    build_router, initialize_system, load_env, log_env_source, prepare_database,
};
use eyre::Report;
use swiftcodes_core::AppState;
use swiftcodes_primitives::models::app_config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    let env_loaded = load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();
    log_env_source(env_loaded);

    info!("Starting SWIFT codes service...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool and bring the schema up to date
    let pool = create_db_pool()?;
    prepare_database(&pool).await?;

    // 5. build application state
    let state = AppState::new(pool, config)?;

    // 6. import the registry on first start
    initialize_system(&state).await;

    // 7. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 8. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 9. start HTTP server
    serve(app, &state.config).await?;

    info!("SWIFT codes service shut down gracefully");
    Ok(())
}
