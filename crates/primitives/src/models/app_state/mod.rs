pub mod app_config;
pub mod database_details;

pub use app_config::*;
pub use database_details::*;
