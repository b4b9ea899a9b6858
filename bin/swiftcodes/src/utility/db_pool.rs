use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use eyre::Report;
use secrecy::ExposeSecret;
use std::time::Duration;
use swiftcodes_core::stores::postgres::DbPool;
use swiftcodes_primitives::models::database_details::DatabaseInfo;
use tracing::info;

pub fn create_db_pool() -> Result<DbPool, Report> {
    let db = DatabaseInfo::new()?;

    let manager = ConnectionManager::<PgConnection>::new(db.database_url.expose_secret());

    let pool = Pool::builder()
        .max_size(db.max_connections)
        .min_idle(Some(db.min_idle))
        .connection_timeout(Duration::from_secs(8))
        .idle_timeout(Some(db.idle_timeout))
        .max_lifetime(Some(Duration::from_secs(1800))) // 30 minutes
        .test_on_check_out(true)
        .build(manager)?;

    info!(
        "PostgreSQL connection pool created (max_size: {})",
        db.max_connections
    );

    Ok(pool)
}
