pub mod bank_dto;
pub mod health_dto;

pub use bank_dto::*;
pub use health_dto::*;
