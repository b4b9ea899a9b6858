use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseInfo {
    pub database_url: SecretString,
    pub max_connections: u32,
    pub min_idle: u32,
    pub idle_timeout: Duration,
}

impl DatabaseInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            database_url: SecretString::new(
                env::var("DATABASE_URL")
                    .map_err(|_| eyre!("DATABASE_URL must be set"))?
                    .into(),
            ),

            max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .map_err(|e| eyre!("Invalid DB_MAX_CONNECTIONS: {}", e))?,

            min_idle: env::var("DB_MIN_IDLE")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .map_err(|e| eyre!("Invalid DB_MIN_IDLE: {}", e))?,

            // 15 minutes
            idle_timeout: Duration::from_secs(
                env::var("DB_IDLE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "900".into())
                    .parse()
                    .map_err(|e| eyre!("Invalid DB_IDLE_TIMEOUT_SECS: {}", e))?,
            ),
        })
    }
}
