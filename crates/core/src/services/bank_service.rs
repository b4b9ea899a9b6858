use crate::app_state::AppState;
use crate::stores::BankStore;
use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{Bank, NewBank};
use tokio::task;
use tokio::time::timeout;
use tracing::{error, info};

pub struct BankService;

impl BankService {
    pub async fn create_bank(state: &AppState, new_bank: NewBank) -> Result<Bank, ApiError> {
        let bank = run_with_deadline(state, "create", move |store| store.create(new_bank)).await?;

        info!(
            swift_code = %bank.swift_code,
            headquarter = ?bank.headquarter_swift_code,
            "Bank created"
        );
        Ok(bank)
    }

    pub async fn get_by_swift_code(
        state: &AppState,
        swift_code: String,
    ) -> Result<Vec<Bank>, ApiError> {
        run_with_deadline(state, "get_by_swift_code", move |store| {
            store.get_by_swift_code(&swift_code)
        })
        .await
    }

    pub async fn list_by_country(
        state: &AppState,
        country_iso2: String,
    ) -> Result<Vec<Bank>, ApiError> {
        run_with_deadline(state, "get_all_by_country_iso2", move |store| {
            store.get_all_by_country_iso2(&country_iso2)
        })
        .await
    }

    pub async fn delete_bank(state: &AppState, swift_code: String) -> Result<(), ApiError> {
        let deleted = swift_code.clone();
        run_with_deadline(state, "delete", move |store| store.delete(&swift_code)).await?;

        info!(swift_code = %deleted, "Bank deleted");
        Ok(())
    }
}

/// Runs a blocking store call on the blocking pool, failing once
/// `config.query_timeout` elapses. The call itself is not cancelled.
async fn run_with_deadline<T, F>(state: &AppState, operation: &str, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn BankStore) -> Result<T, ApiError> + Send + 'static,
{
    let store = state.store.clone();
    let handle = task::spawn_blocking(move || op(store.as_ref()));

    match timeout(state.config.query_timeout, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => {
            error!("Store task for {} failed: {}", operation, join_error);
            Err(ApiError::Internal(format!("store task failed: {}", join_error)))
        }
        Err(_) => {
            error!(
                "Store call {} exceeded {:?}",
                operation, state.config.query_timeout
            );
            Err(ApiError::Timeout(operation.to_string()))
        }
    }
}
