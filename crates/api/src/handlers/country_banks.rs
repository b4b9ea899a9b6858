use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;
use swiftcodes_core::services::BankService;
use swiftcodes_core::AppState;
use swiftcodes_primitives::error::{ApiError, ApiErrorResponse};
use swiftcodes_primitives::models::bank_dto::CountrySwiftCodesResponse;

#[utoipa::path(
    get,
    path = "/swift-codes/country/{country_iso2}",
    tag = "SwiftCodes",
    summary = "List SWIFT codes of a country",
    description = "Returns every headquarters and branch registered in the country.",
    operation_id = "getSwiftCodesByCountry",
    params(
        ("country_iso2" = String, Path, description = "ISO 3166-1 alpha-2 country code, case-insensitive")
    ),
    responses(
        (status = 200, description = "Records found", body = CountrySwiftCodesResponse),
        (status = 400, description = "Country code has the wrong length", body = ApiErrorResponse),
        (status = 404, description = "No records for this country", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    ),
)]
pub async fn country_banks(
    State(state): State<Arc<AppState>>,
    Path(country_iso2): Path<String>,
) -> Result<Json<CountrySwiftCodesResponse>, ApiError> {
    let country_iso2 = state.validator.parse_country_iso2(&country_iso2)?;

    let banks = BankService::list_by_country(&state, country_iso2.clone()).await?;

    CountrySwiftCodesResponse::from_banks(banks)
        .map(Json)
        .ok_or(ApiError::NotFound(country_iso2))
}
