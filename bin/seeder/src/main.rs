//! Imports the SWIFT code registry into an empty database and exits.
//!
//! Usage: `seeder [PATH]`. Without `PATH` the file named by `SEED_FILE_PATH` is used.

use eyre::{eyre, Report};
use std::path::PathBuf;
use swiftcodes::utility::db_pool::create_db_pool;
use swiftcodes::utility::logging::setup_logging;
use swiftcodes::utility::tasks::{load_env, log_env_source, prepare_database};
use swiftcodes_core::services::SeedService;
use swiftcodes_core::PgBankStore;
use swiftcodes_primitives::models::app_config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Report> {
    let env_loaded = load_env();
    setup_logging();
    log_env_source(env_loaded);

    let config = AppConfig::from_env()?;
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or(config.seed_file_path);

    let pool = create_db_pool()?;
    prepare_database(&pool).await?;

    let summary = tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        let store = PgBankStore::new(pool.clone());
        SeedService::seed_if_empty(&mut conn, &store, &path)
            .map_err(|e| eyre!("Seeding from {} failed: {}", path.display(), e))
    })
    .await??;

    match summary {
        Some(summary) => info!(
            "Seeded {} headquarters and {} branches ({} linked)",
            summary.headquarters, summary.branches, summary.linked_branches
        ),
        None => info!("Database already contains banks, nothing to do"),
    }

    Ok(())
}
