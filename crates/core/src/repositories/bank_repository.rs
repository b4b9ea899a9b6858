use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use swiftcodes_primitives::error::ApiError;
use swiftcodes_primitives::models::bank::{Bank, NewBank};
use swiftcodes_primitives::schema::banks;

pub struct BankRepository;

impl BankRepository {
    pub fn count(conn: &mut PgConnection) -> Result<i64, ApiError> {
        banks::table
            .count()
            .get_result(conn)
            .map_err(ApiError::from)
    }

    pub fn exists(conn: &mut PgConnection, swift_code: &str) -> Result<bool, ApiError> {
        diesel::select(diesel::dsl::exists(
            banks::table.filter(banks::swift_code.eq(swift_code)),
        ))
        .get_result(conn)
        .map_err(ApiError::from)
    }

    pub fn find_by_swift_code(
        conn: &mut PgConnection,
        swift_code: &str,
    ) -> Result<Option<Bank>, ApiError> {
        banks::table
            .filter(banks::swift_code.eq(swift_code))
            .select(Bank::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_branches(
        conn: &mut PgConnection,
        headquarter_swift_code: &str,
    ) -> Result<Vec<Bank>, ApiError> {
        banks::table
            .filter(banks::headquarter_swift_code.eq(headquarter_swift_code))
            .select(Bank::as_select())
            .load(conn)
            .map_err(ApiError::from)
    }

    pub fn find_all_by_country(
        conn: &mut PgConnection,
        country_iso2: &str,
    ) -> Result<Vec<Bank>, ApiError> {
        banks::table
            .filter(banks::country_iso2.eq(country_iso2))
            .select(Bank::as_select())
            .load(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_bank: &NewBank) -> Result<Bank, ApiError> {
        diesel::insert_into(banks::table)
            .values(new_bank)
            .returning(Bank::as_returning())
            .get_result(conn)
            .map_err(|e| match e {
                // the primary key, not the pre-insert existence check, is the real duplicate guard
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    ApiError::AlreadyExists(new_bank.swift_code.clone())
                }
                other => ApiError::from(other),
            })
    }

    pub fn delete(conn: &mut PgConnection, swift_code: &str) -> Result<usize, ApiError> {
        diesel::delete(banks::table.filter(banks::swift_code.eq(swift_code)))
            .execute(conn)
            .map_err(ApiError::from)
    }
}
