pub mod bank_service;
pub mod seed_service;

pub use bank_service::BankService;
pub use seed_service::{SeedService, SeedSummary};
