use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use http::StatusCode;
use std::sync::Arc;
use swiftcodes_core::services::BankService;
use swiftcodes_core::AppState;
use swiftcodes_primitives::error::{ApiError, ApiErrorResponse};
use swiftcodes_primitives::models::bank_dto::{
    CreateBankRequest, MessageResponse, BANK_CREATED_MESSAGE,
};

#[utoipa::path(
    post,
    path = "/swift-codes",
    tag = "SwiftCodes",
    summary = "Add a SWIFT code record",
    description = "Stores a headquarters or branch record. `isHeadquarter` must agree with the code: \
                   only codes ending in `XXX` are headquarters. A branch is linked to the headquarters \
                   sharing its first eight characters, if one exists.",
    operation_id = "createSwiftCode",
    request_body(content = CreateBankRequest, description = "Record to add"),
    responses(
        (status = 201, description = "Record stored", body = MessageResponse),
        (status = 400, description = "Malformed payload, validation failure or duplicate SWIFT code", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    ),
)]
pub async fn create_bank(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBankRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidJson(rejection.body_text()))?;

    let new_bank = state.validator.validate_create(request)?;
    BankService::create_bank(&state, new_bank).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(BANK_CREATED_MESSAGE)),
    ))
}
