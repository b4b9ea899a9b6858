use crate::stores::postgres::DbPool;
use crate::stores::{BankStore, InMemoryBankStore, PgBankStore};
use crate::validation::BankValidator;
use eyre::Result;
use std::sync::Arc;

pub use swiftcodes_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BankStore>,
    /// Present when backed by PostgreSQL; used by the health check and startup seeding.
    pub db: Option<DbPool>,
    pub validator: BankValidator,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        Ok(Arc::new(Self {
            store: Arc::new(PgBankStore::new(db.clone())),
            db: Some(db),
            validator: BankValidator::new()?,
            config,
        }))
    }

    pub fn in_memory(store: InMemoryBankStore, config: AppConfig) -> Result<Arc<Self>> {
        Ok(Arc::new(Self {
            store: Arc::new(store),
            db: None,
            validator: BankValidator::new()?,
            config,
        }))
    }
}
