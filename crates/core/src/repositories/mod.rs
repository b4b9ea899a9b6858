pub mod bank_repository;

pub use bank_repository::BankRepository;
