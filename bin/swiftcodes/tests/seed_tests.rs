use axum_test::TestServer;
use serde_json::Value;
use std::io::Write;
use swiftcodes_core::services::{SeedService, SeedSummary};
use swiftcodes_core::{AppState, InMemoryBankStore};
use swiftcodes_primitives::error::ApiError;
use tempfile::NamedTempFile;

mod common;
use common::{create_test_app, init_logging, test_config};

const HEADER: &str =
    "COUNTRY ISO2 CODE\tSWIFT CODE\tCODE TYPE\tNAME\tADDRESS\tTOWN NAME\tCOUNTRY NAME\tTIME ZONE";

fn seed_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

#[tokio::test]
async fn test_seeded_registry_is_served() {
    init_logging();

    let file = seed_file(&[
        "PL\tAAAABBCC123\tBIC11\tBRANCH BANK\tUL. TESTOWA 1\tWARSZAWA\tPOLAND\tEurope/Warsaw",
        "PL\tAAAABBCCXXX\tBIC11\tHQ BANK\t\tWARSZAWA\tPOLAND\tEurope/Warsaw",
        "pl\tzzzzyyyy001\tBIC11\tLONE BRANCH\tUL. INNA 2\tKRAKOW\tPOLAND\tEurope/Warsaw",
    ]);

    let store = InMemoryBankStore::new();
    let summary = SeedService::import(&store, file.path()).unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            headquarters: 1,
            branches: 2,
            linked_branches: 1,
        }
    );

    let state = AppState::in_memory(store, test_config()).unwrap();
    let server = TestServer::new(create_test_app(state)).unwrap();

    let hq = server.get("/v1/swift-codes/AAAABBCCXXX").await.json::<Value>();
    assert!(hq["address"].is_null());
    assert_eq!(hq["branches"].as_array().unwrap().len(), 1);
    assert_eq!(hq["branches"][0]["swiftCode"], "AAAABBCC123");

    let lone = server.get("/v1/swift-codes/ZZZZYYYY001").await.json::<Value>();
    assert_eq!(lone["countryISO2"], "PL");
    assert_eq!(lone["isHeadquarter"], false);

    let country = server.get("/v1/swift-codes/country/PL").await.json::<Value>();
    assert_eq!(country["swiftCodes"].as_array().unwrap().len(), 3);
}

#[test]
fn test_seed_aborts_on_short_row() {
    init_logging();

    let file = seed_file(&[
        "PL\tAAAABBCCXXX\tBIC11\tHQ BANK\tADDR\tWARSZAWA\tPOLAND\tEurope/Warsaw",
        "PL\tAAAABBCC123\tBIC11",
    ]);
    let store = InMemoryBankStore::new();

    let err = SeedService::import(&store, file.path()).unwrap_err();

    assert!(matches!(err, ApiError::Csv(_) | ApiError::Seed(_)));
    assert!(store.is_empty());
}

#[test]
fn test_header_only_file_imports_nothing() {
    let file = seed_file(&[]);
    let store = InMemoryBankStore::new();

    let summary = SeedService::import(&store, file.path()).unwrap();

    assert_eq!(summary, SeedSummary::default());
    assert!(store.is_empty());
}
