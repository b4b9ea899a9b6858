use crate::handlers::{
    country_banks::__path_country_banks, create_bank::__path_create_bank,
    delete_bank::__path_delete_bank, get_bank::__path_get_bank, health::__path_health_check,
};
use swiftcodes_primitives::error::ApiErrorResponse;
use swiftcodes_primitives::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SWIFT Codes API",
        description = "Lookup and management of bank SWIFT (BIC) codes."
    ),
    paths(create_bank, get_bank, country_banks, delete_bank, health_check),
    components(schemas(
        CreateBankRequest,
        BankShortDto,
        BankHeadquarterResponse,
        BankBranchResponse,
        SwiftCodeDetails,
        CountrySwiftCodesResponse,
        MessageResponse,
        HealthStatus,
        ApiErrorResponse
    )),
    tags(
        (name = "SwiftCodes", description = "SWIFT code records"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
