use eyre::{eyre, Report};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_SEED_FILE_PATH: &str = "data/SWIFT_CODES.tsv";
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGINS: &str = "*";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path prefix every route is nested under, without slashes.
    pub api_version: String,

    pub seed_file_path: PathBuf,

    /// Deadline for a single store call.
    pub query_timeout: Duration,

    pub host: String,
    pub port: u16,

    /// `*` or a comma-separated list of allowed origins.
    pub cors_origins: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        let query_timeout_secs: u64 = env::var("QUERY_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_QUERY_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| eyre!("Invalid QUERY_TIMEOUT_SECS: {}", e))?;

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| eyre!("Invalid PORT: {}", e))?;

        Ok(Self {
            api_version: env::var("API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.into())
                .trim_matches('/')
                .to_string(),

            seed_file_path: env::var("SEED_FILE_PATH")
                .unwrap_or_else(|_| DEFAULT_SEED_FILE_PATH.into())
                .into(),

            query_timeout: Duration::from_secs(query_timeout_secs),

            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
            port,

            cors_origins: env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            seed_file_path: DEFAULT_SEED_FILE_PATH.into(),
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.to_string(),
        }
    }
}
