use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2::PoolError;
use diesel::result::DatabaseErrorKind;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

const INTERNAL_ERROR_MESSAGE: &str = "the server encountered a problem";
const NOT_FOUND_MESSAGE: &str = "resource not found";

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Validation(validator::ValidationErrors),
    BadRequest(String),
    InvalidJson(String),
    AlreadyExists(String),
    NotFound(String),
    Timeout(String),
    Seed(String),
    Csv(csv::Error),
    Io(std::io::Error),
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::BadRequest(_)
            | ApiError::InvalidJson(_)
            | ApiError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            )) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::BadRequest(e) => write!(f, "Bad request: {}", e),
            ApiError::InvalidJson(e) => write!(f, "Invalid JSON payload: {}", e),
            ApiError::AlreadyExists(code) => {
                write!(f, "Bank with SWIFT code {} already exists", code)
            }
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::Timeout(op) => write!(f, "Store call timed out: {}", op),
            ApiError::Seed(e) => write!(f, "Seed import error: {}", e),
            ApiError::Csv(e) => write!(f, "Seed file error: {}", e),
            ApiError::Io(e) => write!(f, "IO error: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            ApiError::Csv(e) => Some(e),
            ApiError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PoolError> for ApiError {
    fn from(err: PoolError) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::Csv(err)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err)
    }
}

/// Status and client-facing message. Server-side failures never leak their detail.
impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        let status = err.status_code();
        let message = match err {
            ApiError::Validation(errors) => format!("Validation error: {}", errors),
            ApiError::BadRequest(msg) | ApiError::InvalidJson(msg) => msg,
            ApiError::AlreadyExists(code) => {
                format!("bank with SWIFT code {} already exists", code)
            }
            ApiError::Database(_) if status == StatusCode::BAD_REQUEST => {
                "bank with this SWIFT code already exists".to_string()
            }
            ApiError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        };
        (status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "internal server error");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let (status, error): (StatusCode, String) = self.into();
        (status, Json(ApiErrorResponse { error })).into_response()
    }
}
