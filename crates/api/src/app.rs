use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    country_banks::country_banks, create_bank::create_bank, delete_bank::delete_bank,
    get_bank::get_bank, health::health_check,
};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use swiftcodes_core::AppState;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    let version = state.config.api_version.trim_matches('/').to_string();

    let api_router = create_api_routers();
    let api_router = if version.is_empty() {
        api_router
    } else {
        Router::new().nest(&format!("/{}", version), api_router)
    };

    Router::new()
        .merge(api_docs(&version))
        .merge(api_router)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

fn create_api_routers() -> Router<Arc<AppState>> {
    Router::new()
        .route("/swift-codes", post(create_bank))
        .route(
            "/swift-codes/{swift_code}",
            get(get_bank).delete(delete_bank),
        )
        .route("/swift-codes/country/{country_iso2}", get(country_banks))
        .route("/health", get(health_check))
}

fn api_docs(version: &str) -> SwaggerUi {
    let mut doc = ApiDoc::openapi();
    if !version.is_empty() {
        doc.servers = Some(vec![Server::new(format!("/{}", version))]);
    }

    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc)
}
