use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SWIFT_CODE_LEN: usize = 11;
pub const BANK_PREFIX_LEN: usize = 8;
pub const COUNTRY_ISO2_LEN: usize = 2;
pub const HEADQUARTER_SUFFIX: &str = "XXX";

/// One row of the `banks` table, keyed by SWIFT code.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::banks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub swift_code: String,
    pub address: Option<String>,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub headquarter_swift_code: Option<String>,
}

#[derive(Insertable, Debug, Clone, PartialEq, Eq, Deserialize)]
#[diesel(table_name = crate::schema::banks)]
pub struct NewBank {
    pub swift_code: String,
    pub address: Option<String>,
    pub bank_name: String,
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub headquarter_swift_code: Option<String>,
}

impl From<NewBank> for Bank {
    fn from(bank: NewBank) -> Self {
        Self {
            swift_code: bank.swift_code,
            address: bank.address,
            bank_name: bank.bank_name,
            country_iso2: bank.country_iso2,
            country_name: bank.country_name,
            is_headquarter: bank.is_headquarter,
            headquarter_swift_code: bank.headquarter_swift_code,
        }
    }
}
