use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;
use swiftcodes_core::services::BankService;
use swiftcodes_core::AppState;
use swiftcodes_primitives::error::{ApiError, ApiErrorResponse};
use swiftcodes_primitives::models::bank_dto::SwiftCodeDetails;

#[utoipa::path(
    get,
    path = "/swift-codes/{swift_code}",
    tag = "SwiftCodes",
    summary = "Look up a SWIFT code",
    description = "Returns the record for the code. Headquarters also list their branches; \
                   branch responses carry no `branches` field.",
    operation_id = "getSwiftCode",
    params(
        ("swift_code" = String, Path, description = "11-character SWIFT code, case-insensitive")
    ),
    responses(
        (status = 200, description = "Record found", body = SwiftCodeDetails),
        (status = 400, description = "SWIFT code has the wrong length", body = ApiErrorResponse),
        (status = 404, description = "No record for this code", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    ),
)]
pub async fn get_bank(
    State(state): State<Arc<AppState>>,
    Path(swift_code): Path<String>,
) -> Result<Json<SwiftCodeDetails>, ApiError> {
    let swift_code = state.validator.parse_swift_code(&swift_code)?;

    let banks = BankService::get_by_swift_code(&state, swift_code.clone()).await?;

    SwiftCodeDetails::from_lookup(banks)
        .map(Json)
        .ok_or(ApiError::NotFound(swift_code))
}
