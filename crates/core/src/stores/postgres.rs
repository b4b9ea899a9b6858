use crate::repositories::BankRepository;
use crate::stores::BankStore;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::PgConnection;
use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{Bank, NewBank};
use swiftcodes_primitives::utility::headquarter_code_for;
use tracing::{debug, error};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct PgBankStore {
    pool: DbPool,
}

impl PgBankStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, ApiError> {
        self.pool.get().map_err(|e| {
            error!("Database connection failed: {}", e);
            ApiError::from(e)
        })
    }

    fn resolve_headquarter(
        conn: &mut PgConnection,
        swift_code: &str,
    ) -> Result<Option<String>, ApiError> {
        let Some(candidate) = headquarter_code_for(swift_code) else {
            return Ok(None);
        };

        Ok(BankRepository::find_by_swift_code(conn, &candidate)?.map(|hq| hq.swift_code))
    }
}

impl BankStore for PgBankStore {
    fn create(&self, mut bank: NewBank) -> Result<Bank, ApiError> {
        let mut conn = self.conn()?;

        if BankRepository::exists(&mut conn, &bank.swift_code)? {
            return Err(ApiError::AlreadyExists(bank.swift_code));
        }

        bank.headquarter_swift_code = Self::resolve_headquarter(&mut conn, &bank.swift_code)?;

        let created = BankRepository::create(&mut conn, &bank)?;
        debug!(swift_code = %created.swift_code, "bank inserted");

        Ok(created)
    }

    fn get_by_swift_code(&self, swift_code: &str) -> Result<Vec<Bank>, ApiError> {
        let mut conn = self.conn()?;

        let matched = BankRepository::find_by_swift_code(&mut conn, swift_code)?
            .ok_or_else(|| ApiError::NotFound(format!("SWIFT code {}", swift_code)))?;

        let mut banks = vec![matched];
        banks.extend(BankRepository::find_branches(&mut conn, swift_code)?);

        Ok(banks)
    }

    fn get_all_by_country_iso2(&self, country_iso2: &str) -> Result<Vec<Bank>, ApiError> {
        let mut conn = self.conn()?;

        let banks = BankRepository::find_all_by_country(&mut conn, country_iso2)?;
        if banks.is_empty() {
            return Err(ApiError::NotFound(format!("country {}", country_iso2)));
        }

        Ok(banks)
    }

    fn delete(&self, swift_code: &str) -> Result<(), ApiError> {
        let mut conn = self.conn()?;

        match BankRepository::delete(&mut conn, swift_code)? {
            0 => Err(ApiError::NotFound(format!("SWIFT code {}", swift_code))),
            _ => Ok(()),
        }
    }
}
