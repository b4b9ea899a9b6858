use regex::Regex;
use std::collections::HashSet;
use swiftcodes_primitives::countries::ISO_3166_ALPHA2;
use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{NewBank, COUNTRY_ISO2_LEN, SWIFT_CODE_LEN};
use swiftcodes_primitives::models::bank_dto::CreateBankRequest;
use swiftcodes_primitives::utility::{is_headquarter_code, normalize_address};
use validator::Validate;

/// Validates untrusted input before it reaches a store.
///
/// Built once at startup and shared through [`AppState`](crate::AppState).
#[derive(Debug, Clone)]
pub struct BankValidator {
    swift_code_pattern: Regex,
    countries: HashSet<&'static str>,
}

impl BankValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            swift_code_pattern: Regex::new(r"^[A-Z0-9]{11}$")?,
            countries: ISO_3166_ALPHA2.iter().copied().collect(),
        })
    }

    /// Turns a create payload into an insertable record.
    ///
    /// SWIFT and country codes are upper-cased, a blank address becomes absent,
    /// and `isHeadquarter` has to agree with the `XXX` suffix.
    pub fn validate_create(&self, request: CreateBankRequest) -> Result<NewBank, ApiError> {
        request.validate()?;

        let swift_code = request.swift_code.to_ascii_uppercase();
        if !self.swift_code_pattern.is_match(&swift_code) {
            return Err(ApiError::BadRequest(
                "swiftCode must consist of 11 alphanumeric characters".into(),
            ));
        }

        let country_iso2 = request.country_iso2.to_ascii_uppercase();
        if !self.countries.contains(country_iso2.as_str()) {
            return Err(ApiError::BadRequest(format!(
                "countryISO2 {} is not a valid ISO 3166-1 alpha-2 code",
                country_iso2
            )));
        }

        match (request.is_headquarter, is_headquarter_code(&swift_code)) {
            (true, false) => {
                return Err(ApiError::BadRequest(
                    "isHeadquarter set to true, while swift code says otherwise".into(),
                ))
            }
            (false, true) => {
                return Err(ApiError::BadRequest(
                    "isHeadquarter set to false, while swift code says otherwise".into(),
                ))
            }
            _ => {}
        }

        Ok(NewBank {
            swift_code,
            address: normalize_address(request.address),
            bank_name: request.bank_name,
            country_iso2,
            country_name: request.country_name,
            is_headquarter: request.is_headquarter,
            headquarter_swift_code: None,
        })
    }

    /// Path parameter of the by-code routes.
    pub fn parse_swift_code(&self, raw: &str) -> Result<String, ApiError> {
        let swift_code = raw.to_ascii_uppercase();
        if swift_code.chars().count() != SWIFT_CODE_LEN {
            return Err(ApiError::BadRequest("incorrect SWIFT code length".into()));
        }
        Ok(swift_code)
    }

    pub fn parse_country_iso2(&self, raw: &str) -> Result<String, ApiError> {
        let country_iso2 = raw.to_ascii_uppercase();
        if country_iso2.chars().count() != COUNTRY_ISO2_LEN {
            return Err(ApiError::BadRequest(
                "incorrect country ISO2 code length".into(),
            ));
        }
        Ok(country_iso2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(swift_code: &str, is_headquarter: bool) -> CreateBankRequest {
        CreateBankRequest {
            swift_code: swift_code.to_string(),
            address: Some("Test Addr".to_string()),
            bank_name: "Test Bank".to_string(),
            country_iso2: "US".to_string(),
            country_name: "United States".to_string(),
            is_headquarter,
        }
    }

    fn validator() -> BankValidator {
        BankValidator::new().unwrap()
    }

    #[test]
    fn accepts_valid_headquarter() {
        let bank = validator()
            .validate_create(request("FAKECODEXXX", true))
            .unwrap();

        assert_eq!(bank.swift_code, "FAKECODEXXX");
        assert!(bank.is_headquarter);
        assert_eq!(bank.headquarter_swift_code, None);
    }

    #[test]
    fn normalizes_case_and_blank_address() {
        let mut req = request("fakecode123", false);
        req.country_iso2 = "us".to_string();
        req.address = Some("  \t ".to_string());

        let bank = validator().validate_create(req).unwrap();

        assert_eq!(bank.swift_code, "FAKECODE123");
        assert_eq!(bank.country_iso2, "US");
        assert_eq!(bank.address, None);
    }

    #[test]
    fn rejects_headquarter_flag_mismatch() {
        let err = validator()
            .validate_create(request("ABCDEFGH123", true))
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = validator()
            .validate_create(request("ABCDEFGHXXX", false))
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn rejects_wrong_length_and_symbols() {
        let err = validator()
            .validate_create(request("TOOSHORT", false))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = validator()
            .validate_create(request("ABCD-FGH123", false))
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn rejects_unknown_country_and_missing_name() {
        let mut req = request("FAKECODE123", false);
        req.country_iso2 = "QQ".to_string();
        assert!(matches!(
            validator().validate_create(req).unwrap_err(),
            ApiError::BadRequest(_)
        ));

        let mut req = request("FAKECODE123", false);
        req.bank_name = String::new();
        assert!(matches!(
            validator().validate_create(req).unwrap_err(),
            ApiError::Validation(_)
        ));
    }

    #[test]
    fn path_codes_are_upper_cased_and_length_checked() {
        let v = validator();
        assert_eq!(v.parse_swift_code("abcdefghxxx").unwrap(), "ABCDEFGHXXX");
        assert!(v.parse_swift_code("TOOSHORT").is_err());
        assert_eq!(v.parse_country_iso2("pl").unwrap(), "PL");
        assert!(v.parse_country_iso2("TOOLONG").is_err());
    }
}
