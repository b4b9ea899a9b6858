use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;
use swiftcodes_core::services::BankService;
use swiftcodes_core::AppState;
use swiftcodes_primitives::error::{ApiError, ApiErrorResponse};
use swiftcodes_primitives::models::bank_dto::{MessageResponse, BANK_DELETED_MESSAGE};

#[utoipa::path(
    delete,
    path = "/swift-codes/{swift_code}",
    tag = "SwiftCodes",
    summary = "Delete a SWIFT code record",
    description = "Removes exactly one record. Deleting a headquarters leaves its branches in place.",
    operation_id = "deleteSwiftCode",
    params(
        ("swift_code" = String, Path, description = "11-character SWIFT code, case-insensitive")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 400, description = "SWIFT code has the wrong length", body = ApiErrorResponse),
        (status = 404, description = "No record for this code", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    ),
)]
pub async fn delete_bank(
    State(state): State<Arc<AppState>>,
    Path(swift_code): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let swift_code = state.validator.parse_swift_code(&swift_code)?;

    BankService::delete_bank(&state, swift_code).await?;

    Ok(Json(MessageResponse::new(BANK_DELETED_MESSAGE)))
}
