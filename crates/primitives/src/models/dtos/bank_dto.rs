use crate::models::entities::bank::Bank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const BANK_CREATED_MESSAGE: &str = "successfully added bank to database";
pub const BANK_DELETED_MESSAGE: &str = "successfully deleted bank from database";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBankRequest {
    #[validate(length(equal = 11, message = "swiftCode must be exactly 11 characters"))]
    #[schema(example = "AAAABBCCXXX")]
    pub swift_code: String,
    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 255, message = "bankName is required (max 255 characters)"))]
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    #[validate(length(equal = 2, message = "countryISO2 must be exactly 2 characters"))]
    #[schema(example = "PL")]
    pub country_iso2: String,
    #[validate(length(min = 1, max = 255, message = "countryName is required (max 255 characters)"))]
    pub country_name: String,
    pub is_headquarter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankShortDto {
    pub swift_code: String,
    pub address: Option<String>,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
}

impl From<Bank> for BankShortDto {
    fn from(bank: Bank) -> Self {
        Self {
            swift_code: bank.swift_code,
            address: bank.address,
            bank_name: bank.bank_name,
            country_iso2: bank.country_iso2,
            country_name: bank.country_name,
            is_headquarter: bank.is_headquarter,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankHeadquarterResponse {
    pub swift_code: String,
    pub address: Option<String>,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub branches: Vec<BankShortDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankBranchResponse {
    pub swift_code: String,
    pub address: Option<String>,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
}

impl From<Bank> for BankBranchResponse {
    fn from(bank: Bank) -> Self {
        Self {
            swift_code: bank.swift_code,
            address: bank.address,
            bank_name: bank.bank_name,
            country_iso2: bank.country_iso2,
            country_name: bank.country_name,
            is_headquarter: bank.is_headquarter,
        }
    }
}

/// Response of a SWIFT code lookup: a headquarters with its branches, or a single branch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SwiftCodeDetails {
    Headquarter(BankHeadquarterResponse),
    Branch(BankBranchResponse),
}

impl SwiftCodeDetails {
    /// Shapes a store lookup result. The first record is the matched one; the
    /// rest are only meaningful as branches when the first is a headquarters.
    pub fn from_lookup(banks: Vec<Bank>) -> Option<Self> {
        let mut banks = banks.into_iter();
        let first = banks.next()?;

        if !first.is_headquarter {
            return Some(SwiftCodeDetails::Branch(first.into()));
        }

        Some(SwiftCodeDetails::Headquarter(BankHeadquarterResponse {
            swift_code: first.swift_code,
            address: first.address,
            bank_name: first.bank_name,
            country_iso2: first.country_iso2,
            country_name: first.country_name,
            is_headquarter: first.is_headquarter,
            branches: banks.map(BankShortDto::from).collect(),
        }))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountrySwiftCodesResponse {
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub swift_codes: Vec<BankShortDto>,
}

impl CountrySwiftCodesResponse {
    pub fn from_banks(banks: Vec<Bank>) -> Option<Self> {
        let first = banks.first()?;
        let country_iso2 = first.country_iso2.clone();
        let country_name = first.country_name.clone();

        Some(Self {
            country_iso2,
            country_name,
            swift_codes: banks.into_iter().map(BankShortDto::from).collect(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
