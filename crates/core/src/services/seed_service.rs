//! One-time import of the SWIFT code registry from a delimited file.
//!
//! The file has a header row followed by rows of
//! `countryISO2, swiftCode, codeType, name, address, townName, countryName, timeZone`,
//! separated by tabs or commas. A branch can appear before its headquarters, so
//! headquarters are inserted in a first pass and branches in a second one.

use crate::repositories::BankRepository;
use crate::stores::BankStore;
use diesel::PgConnection;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{NewBank, SWIFT_CODE_LEN};
use swiftcodes_primitives::utility::{bank_prefix, is_headquarter_code, normalize_address};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub headquarters: usize,
    pub branches: usize,
    /// Branches whose headquarters was found in the file.
    pub linked_branches: usize,
}

#[derive(Debug, Deserialize)]
struct SeedRow {
    country_iso2: String,
    swift_code: String,
    _code_type: String,
    name: String,
    address: Option<String>,
    _town_name: String,
    country_name: String,
    _time_zone: String,
}

#[derive(Debug)]
struct SeedLine {
    line: u64,
    row: SeedRow,
}

impl SeedLine {
    fn to_new_bank(&self, headquarter_swift_code: Option<String>) -> NewBank {
        let swift_code = self.row.swift_code.to_ascii_uppercase();
        NewBank {
            is_headquarter: is_headquarter_code(&swift_code),
            swift_code,
            address: normalize_address(self.row.address.clone()),
            bank_name: self.row.name.clone(),
            country_iso2: self.row.country_iso2.to_ascii_uppercase(),
            country_name: self.row.country_name.clone(),
            headquarter_swift_code,
        }
    }
}

pub struct SeedService;

impl SeedService {
    /// Imports `path` only when the `banks` table is empty.
    ///
    /// Returns `None` when there was already data to keep.
    pub fn seed_if_empty(
        conn: &mut PgConnection,
        store: &dyn BankStore,
        path: &Path,
    ) -> Result<Option<SeedSummary>, ApiError> {
        let existing = BankRepository::count(conn)?;
        if existing > 0 {
            info!("Banks already seeded ({} records exist)", existing);
            return Ok(None);
        }

        Self::import(store, path).map(Some)
    }

    /// Two-pass import. The first failure aborts the run; records inserted
    /// before it are kept.
    pub fn import(store: &dyn BankStore, path: &Path) -> Result<SeedSummary, ApiError> {
        info!("Seeding banks from {}", path.display());

        let lines = Self::read_lines(path)?;
        let mut summary = SeedSummary::default();
        let mut headquarters: HashMap<String, String> = HashMap::new();

        // first pass, headquarters
        for line in lines.iter().filter(|l| is_headquarter_code(&l.swift_code())) {
            let bank = line.to_new_bank(None);
            if let Some(prefix) = bank_prefix(&bank.swift_code) {
                headquarters.insert(prefix.to_string(), bank.swift_code.clone());
            }

            store
                .create(bank)
                .map_err(|e| Self::line_error(line.line, e))?;
            summary.headquarters += 1;
        }

        // second pass, branches
        for line in lines.iter().filter(|l| !is_headquarter_code(&l.swift_code())) {
            let swift_code = line.swift_code();
            let headquarter = bank_prefix(&swift_code).and_then(|p| headquarters.get(p).cloned());
            if headquarter.is_some() {
                summary.linked_branches += 1;
            }

            store
                .create(line.to_new_bank(headquarter))
                .map_err(|e| Self::line_error(line.line, e))?;
            summary.branches += 1;
        }

        info!(
            headquarters = summary.headquarters,
            branches = summary.branches,
            linked_branches = summary.linked_branches,
            "Finished seeding banks"
        );
        Ok(summary)
    }

    fn read_lines(path: &Path) -> Result<Vec<SeedLine>, ApiError> {
        let delimiter = Self::detect_delimiter(path)?;
        debug!("Seed file delimiter: {:?}", delimiter as char);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut lines = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let row: SeedRow = record
                .deserialize(None)
                .map_err(|e| ApiError::Seed(format!("line {}: {}", line, e)))?;

            if row.swift_code.len() != SWIFT_CODE_LEN
                || !row.swift_code.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(ApiError::Seed(format!(
                    "line {}: SWIFT code {:?} is not {} ASCII letters or digits",
                    line, row.swift_code, SWIFT_CODE_LEN
                )));
            }

            lines.push(SeedLine { line, row });
        }

        Ok(lines)
    }

    /// Tab-separated when the header line contains a tab, comma-separated otherwise.
    fn detect_delimiter(path: &Path) -> Result<u8, ApiError> {
        let mut header = String::new();
        BufReader::new(File::open(path)?).read_line(&mut header)?;

        Ok(if header.contains('\t') { b'\t' } else { b',' })
    }

    fn line_error(line: u64, err: ApiError) -> ApiError {
        match err {
            ApiError::AlreadyExists(code) => ApiError::Seed(format!(
                "line {}: SWIFT code {} appears more than once",
                line, code
            )),
            other => ApiError::Seed(format!("line {}: {}", line, other)),
        }
    }
}

impl SeedLine {
    fn swift_code(&self) -> String {
        self.row.swift_code.to_ascii_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::InMemoryBankStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TSV_HEADER: &str =
        "COUNTRY ISO2 CODE\tSWIFT CODE\tCODE TYPE\tNAME\tADDRESS\tTOWN NAME\tCOUNTRY NAME\tTIME ZONE";

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn branch_before_headquarter_is_still_linked() {
        let file = seed_file(&format!(
            "{TSV_HEADER}\n\
             PL\tAAAABBCC123\tBIC11\tBRANCH BANK\tBranch St 1\tWARSZAWA\tPOLAND\tEurope/Warsaw\n\
             PL\tAAAABBCCXXX\tBIC11\tHQ BANK\t \tWARSZAWA\tPOLAND\tEurope/Warsaw\n"
        ));
        let store = InMemoryBankStore::new();

        let summary = SeedService::import(&store, file.path()).unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                headquarters: 1,
                branches: 1,
                linked_branches: 1
            }
        );

        let branch = store.get_by_swift_code("AAAABBCC123").unwrap();
        assert_eq!(branch[0].headquarter_swift_code.as_deref(), Some("AAAABBCCXXX"));

        let hq = store.get_by_swift_code("AAAABBCCXXX").unwrap();
        assert_eq!(hq.len(), 2);
        assert_eq!(hq[0].address, None);
    }

    #[test]
    fn comma_separated_file_is_accepted() {
        let file = seed_file(
            "countryISO2,swiftCode,codeType,name,address,townName,countryName,timeZone\n\
             DE,DDDDDEFFXXX,BIC11,HQ DE,\"Strasse 1, Berlin\",BERLIN,GERMANY,Europe/Berlin\n",
        );
        let store = InMemoryBankStore::new();

        let summary = SeedService::import(&store, file.path()).unwrap();

        assert_eq!(summary.headquarters, 1);
        let hq = store.get_by_swift_code("DDDDDEFFXXX").unwrap();
        assert_eq!(hq[0].address.as_deref(), Some("Strasse 1, Berlin"));
    }

    #[test]
    fn malformed_swift_code_aborts_before_any_insert() {
        let file = seed_file(&format!(
            "{TSV_HEADER}\n\
             PL\tAAAABBCCXXX\tBIC11\tHQ BANK\tAddr\tWARSZAWA\tPOLAND\tEurope/Warsaw\n\
             PL\tSHORT\tBIC11\tBROKEN\tAddr\tWARSZAWA\tPOLAND\tEurope/Warsaw\n"
        ));
        let store = InMemoryBankStore::new();

        let err = SeedService::import(&store, file.path()).unwrap_err();

        assert!(matches!(err, ApiError::Seed(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn non_ascii_swift_code_is_rejected_with_its_line() {
        let file = seed_file(&format!(
            "{TSV_HEADER}\n\
             PL\tAAAABBCCXXX\tBIC11\tHQ BANK\tAddr\tWARSZAWA\tPOLAND\tEurope/Warsaw\n\
             PL\t\u{c4}AAABBCCXXX\tBIC11\tUMLAUT BANK\tAddr\tWARSZAWA\tPOLAND\tEurope/Warsaw\n"
        ));
        let store = InMemoryBankStore::new();

        let err = SeedService::import(&store, file.path()).unwrap_err();

        match err {
            ApiError::Seed(message) => assert!(message.starts_with("line 3:"), "{message}"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_row_aborts_import() {
        let row = "PL\tAAAABBCCXXX\tBIC11\tHQ BANK\tAddr\tWARSZAWA\tPOLAND\tEurope/Warsaw";
        let file = seed_file(&format!("{TSV_HEADER}\n{row}\n{row}\n"));
        let store = InMemoryBankStore::new();

        let err = SeedService::import(&store, file.path()).unwrap_err();

        assert!(matches!(err, ApiError::Seed(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let store = InMemoryBankStore::new();

        let err = SeedService::import(&store, Path::new("/nonexistent/swift.tsv")).unwrap_err();

        assert!(matches!(err, ApiError::Io(_)));
    }
}
