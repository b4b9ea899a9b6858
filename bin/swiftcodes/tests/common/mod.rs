#![allow(dead_code)]

use axum::Router;
use std::path::PathBuf;
use std::sync::{Arc, Once};
use std::time::Duration;
use swiftcodes_core::{AppState, InMemoryBankStore};
use swiftcodes_primitives::models::app_config::AppConfig;
use swiftcodes_primitives::models::bank::Bank;

pub mod pg;

pub const HEADQUARTER_CODE: &str = "ABCDEFGHXXX";
pub const BRANCH_CODE: &str = "ABCDEFGH123";

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        swiftcodes::utility::logging::setup_logging();
    });
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_version: "v1".to_string(),
        seed_file_path: PathBuf::from("does-not-exist.tsv"),
        query_timeout: Duration::from_secs(2),
        ..AppConfig::default()
    }
}

/// One Polish headquarters with a single branch.
pub fn fixture_banks() -> Vec<Bank> {
    vec![
        Bank {
            swift_code: HEADQUARTER_CODE.to_string(),
            address: Some("Test Addr".to_string()),
            bank_name: "Headquarter bank PL".to_string(),
            country_iso2: "PL".to_string(),
            country_name: "Poland".to_string(),
            is_headquarter: true,
            headquarter_swift_code: None,
        },
        Bank {
            swift_code: BRANCH_CODE.to_string(),
            address: Some("Branch Addr".to_string()),
            bank_name: "Branch bank PL".to_string(),
            country_iso2: "PL".to_string(),
            country_name: "Poland".to_string(),
            is_headquarter: false,
            headquarter_swift_code: Some(HEADQUARTER_CODE.to_string()),
        },
    ]
}

/// Application state over an in-memory store preloaded with [`fixture_banks`].
pub fn create_test_app_state() -> Arc<AppState> {
    init_logging();

    AppState::in_memory(InMemoryBankStore::with_banks(fixture_banks()), test_config())
        .expect("failed to build test state")
}

pub fn create_empty_app_state() -> Arc<AppState> {
    init_logging();

    AppState::in_memory(InMemoryBankStore::new(), test_config())
        .expect("failed to build test state")
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    swiftcodes_api::app::create_router(state)
}
