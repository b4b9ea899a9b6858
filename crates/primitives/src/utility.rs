use crate::models::entities::bank::{BANK_PREFIX_LEN, HEADQUARTER_SUFFIX, SWIFT_CODE_LEN};

/// Blank or whitespace-only addresses are stored as absent.
pub fn normalize_address(address: Option<String>) -> Option<String> {
    address.filter(|a| !a.trim().is_empty())
}

pub fn is_headquarter_code(swift_code: &str) -> bool {
    swift_code.len() == SWIFT_CODE_LEN && swift_code.ends_with(HEADQUARTER_SUFFIX)
}

/// The 8-character bank/country/location part shared by a headquarters and its branches.
pub fn bank_prefix(swift_code: &str) -> Option<&str> {
    if swift_code.len() != SWIFT_CODE_LEN {
        return None;
    }
    swift_code.get(..BANK_PREFIX_LEN)
}

/// SWIFT code of the headquarters a code would belong to, e.g. `AAAABBCC123` -> `AAAABBCCXXX`.
pub fn headquarter_code_for(swift_code: &str) -> Option<String> {
    bank_prefix(swift_code).map(|prefix| format!("{prefix}{HEADQUARTER_SUFFIX}"))
}
