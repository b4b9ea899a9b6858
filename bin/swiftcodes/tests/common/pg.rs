use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{sql_query, PgConnection, RunQueryDsl};
use std::time::Duration;
use swiftcodes_core::migrations::run_migrations;
use swiftcodes_core::stores::postgres::DbPool;

/// Pool on `TEST_DATABASE_URL` with migrations applied and `banks` emptied.
///
/// `None` when the variable is unset, so suites run without a database skip
/// their PostgreSQL cases.
pub fn create_test_db_pool() -> Option<DbPool> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = Pool::builder()
        .max_size(5)
        .connection_timeout(Duration::from_secs(5))
        .build(ConnectionManager::<PgConnection>::new(database_url))
        .expect("Failed to create test database pool");

    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    run_migrations(&mut conn).expect("Failed to run migrations");
    cleanup_test_db(&mut conn);

    Some(pool)
}

pub fn cleanup_test_db(conn: &mut PgConnection) {
    sql_query("TRUNCATE banks")
        .execute(conn)
        .expect("Failed to truncate banks");
}
