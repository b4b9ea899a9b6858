//! Storage capability for bank records and its two implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBankStore;
pub use postgres::PgBankStore;

use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{Bank, NewBank};

/// The four operations every bank store provides.
///
/// Implementations are blocking; async callers go through
/// [`BankService`](crate::services::bank_service::BankService), which runs
/// them on the blocking pool under a deadline.
pub trait BankStore: Send + Sync {
    /// Inserts a record, resolving `headquarter_swift_code` from the first eight
    /// characters of its SWIFT code. Any value already set on `bank` is replaced.
    ///
    /// Fails with [`ApiError::AlreadyExists`] if the SWIFT code is taken.
    fn create(&self, bank: NewBank) -> Result<Bank, ApiError>;

    /// Returns the matched record first, followed by every record whose
    /// headquarters reference equals `swift_code`, in no particular order.
    ///
    /// A branch lookup therefore yields a single element; check
    /// `is_headquarter` on the first record before treating the rest as branches.
    fn get_by_swift_code(&self, swift_code: &str) -> Result<Vec<Bank>, ApiError>;

    /// Headquarters and branches of one country. Fails with
    /// [`ApiError::NotFound`] when nothing matches.
    fn get_all_by_country_iso2(&self, country_iso2: &str) -> Result<Vec<Bank>, ApiError>;

    /// Removes exactly one record. Branches of a deleted headquarters keep their reference.
    fn delete(&self, swift_code: &str) -> Result<(), ApiError>;
}
