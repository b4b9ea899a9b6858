pub mod country_banks;
pub mod create_bank;
pub mod delete_bank;
pub mod get_bank;
pub mod health;
