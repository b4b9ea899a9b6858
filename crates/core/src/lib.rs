pub mod app_state;
pub mod migrations;
pub mod repositories;
pub mod services;
pub mod stores;
pub mod validation;

pub use app_state::AppState;
pub use stores::{BankStore, InMemoryBankStore, PgBankStore};
pub use validation::BankValidator;
