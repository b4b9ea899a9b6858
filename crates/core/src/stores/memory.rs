use crate::stores::BankStore;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{Bank, NewBank};
use swiftcodes_primitives::utility::headquarter_code_for;

/// Process-local store used by tests and database-less runs.
#[derive(Debug, Default)]
pub struct InMemoryBankStore {
    banks: DashMap<String, Bank>,
}

impl InMemoryBankStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts records verbatim, headquarters references included.
    pub fn with_banks(banks: impl IntoIterator<Item = Bank>) -> Self {
        let store = Self::new();
        for bank in banks {
            store.banks.insert(bank.swift_code.clone(), bank);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    fn resolve_headquarter(&self, swift_code: &str) -> Option<String> {
        headquarter_code_for(swift_code).filter(|candidate| self.banks.contains_key(candidate))
    }
}

impl BankStore for InMemoryBankStore {
    fn create(&self, mut bank: NewBank) -> Result<Bank, ApiError> {
        // resolved before taking the entry lock, the headquarters may live in the same shard
        bank.headquarter_swift_code = self.resolve_headquarter(&bank.swift_code);

        match self.banks.entry(bank.swift_code.clone()) {
            Entry::Occupied(_) => Err(ApiError::AlreadyExists(bank.swift_code)),
            Entry::Vacant(slot) => {
                let created = Bank::from(bank);
                slot.insert(created.clone());
                Ok(created)
            }
        }
    }

    fn get_by_swift_code(&self, swift_code: &str) -> Result<Vec<Bank>, ApiError> {
        let matched = self
            .banks
            .get(swift_code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ApiError::NotFound(format!("SWIFT code {}", swift_code)))?;

        let mut banks = vec![matched];
        banks.extend(
            self.banks
                .iter()
                .filter(|entry| entry.headquarter_swift_code.as_deref() == Some(swift_code))
                .map(|entry| entry.value().clone()),
        );

        Ok(banks)
    }

    fn get_all_by_country_iso2(&self, country_iso2: &str) -> Result<Vec<Bank>, ApiError> {
        let banks: Vec<Bank> = self
            .banks
            .iter()
            .filter(|entry| entry.country_iso2 == country_iso2)
            .map(|entry| entry.value().clone())
            .collect();

        if banks.is_empty() {
            return Err(ApiError::NotFound(format!("country {}", country_iso2)));
        }

        Ok(banks)
    }

    fn delete(&self, swift_code: &str) -> Result<(), ApiError> {
        self.banks
            .remove(swift_code)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(format!("SWIFT code {}", swift_code)))
    }
}
