use std::sync::Arc;
use std::thread;
use std::time::Duration;
use swiftcodes_core::services::BankService;
use swiftcodes_core::{AppState, BankStore, BankValidator, InMemoryBankStore};
use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{Bank, NewBank};

mod common;
use common::{create_empty_app_state, create_test_app_state, test_config, BRANCH_CODE, HEADQUARTER_CODE};

fn new_bank(swift_code: &str) -> NewBank {
    NewBank {
        swift_code: swift_code.to_string(),
        address: Some("Test Addr".to_string()),
        bank_name: "Test Bank".to_string(),
        country_iso2: "PL".to_string(),
        country_name: "Poland".to_string(),
        is_headquarter: swift_code.ends_with("XXX"),
        headquarter_swift_code: None,
    }
}

/// Wraps the in-memory store and stalls every call.
struct SlowStore {
    inner: InMemoryBankStore,
    delay: Duration,
}

impl BankStore for SlowStore {
    fn create(&self, bank: NewBank) -> Result<Bank, ApiError> {
        thread::sleep(self.delay);
        self.inner.create(bank)
    }

    fn get_by_swift_code(&self, swift_code: &str) -> Result<Vec<Bank>, ApiError> {
        thread::sleep(self.delay);
        self.inner.get_by_swift_code(swift_code)
    }

    fn get_all_by_country_iso2(&self, country_iso2: &str) -> Result<Vec<Bank>, ApiError> {
        thread::sleep(self.delay);
        self.inner.get_all_by_country_iso2(country_iso2)
    }

    fn delete(&self, swift_code: &str) -> Result<(), ApiError> {
        thread::sleep(self.delay);
        self.inner.delete(swift_code)
    }
}

#[tokio::test]
async fn test_create_then_lookup_keeps_fields() {
    let state = create_empty_app_state();

    let created = BankService::create_bank(&state, new_bank("AAAABBCCXXX"))
        .await
        .unwrap();
    let found = BankService::get_by_swift_code(&state, "AAAABBCCXXX".to_string())
        .await
        .unwrap();

    assert_eq!(found, vec![created]);
}

#[tokio::test]
async fn test_duplicate_create_keeps_single_record() {
    let state = create_test_app_state();

    let err = BankService::create_bank(&state, new_bank(HEADQUARTER_CODE))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::AlreadyExists(code) if code == HEADQUARTER_CODE));

    let country = BankService::list_by_country(&state, "PL".to_string())
        .await
        .unwrap();
    assert_eq!(
        country
            .iter()
            .filter(|b| b.swift_code == HEADQUARTER_CODE)
            .count(),
        1
    );
}

#[tokio::test]
async fn test_delete_missing_code_leaves_store_unchanged() {
    let state = create_test_app_state();

    let err = BankService::delete_bank(&state, "ZZZZZZZZXXX".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let country = BankService::list_by_country(&state, "PL".to_string())
        .await
        .unwrap();
    assert_eq!(country.len(), 2);
}

#[tokio::test]
async fn test_deleting_headquarter_keeps_branch_reference() {
    let state = create_test_app_state();

    BankService::delete_bank(&state, HEADQUARTER_CODE.to_string())
        .await
        .unwrap();

    let branch = BankService::get_by_swift_code(&state, BRANCH_CODE.to_string())
        .await
        .unwrap();
    assert_eq!(branch.len(), 1);
    assert_eq!(
        branch[0].headquarter_swift_code.as_deref(),
        Some(HEADQUARTER_CODE)
    );
}

#[tokio::test]
async fn test_slow_store_times_out() {
    common::init_logging();

    let mut config = test_config();
    config.query_timeout = Duration::from_millis(50);

    let state = Arc::new(AppState {
        store: Arc::new(SlowStore {
            inner: InMemoryBankStore::new(),
            delay: Duration::from_millis(500),
        }),
        db: None,
        validator: BankValidator::new().unwrap(),
        config,
    });

    let err = BankService::get_by_swift_code(&state, HEADQUARTER_CODE.to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout(_)));
    assert_eq!(
        err.status_code(),
        http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
