use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use std::sync::Arc;
use swiftcodes_core::AppState;
use swiftcodes_primitives::models::health_dto::HealthStatus;
use tracing::error;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Health check endpoint",
    description = "Reports whether the service can reach its database. \
                   Services running on the in-memory store are always healthy.",
    operation_id = "healthCheck",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = HealthStatus),
    ),
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthStatus>) {
    let Some(pool) = state.db.as_ref() else {
        return healthy();
    };

    match pool.get() {
        Ok(mut conn) => match diesel::sql_query("SELECT 1").execute(&mut conn) {
            Ok(_) => healthy(),
            Err(e) => {
                error!("Health check DB query failed: {}", e);
                unhealthy("Health check DB query failed")
            }
        },
        Err(e) => {
            error!("Health check DB connection failed: {}", e);
            unhealthy("Health check DB connection failed")
        }
    }
}

fn healthy() -> (StatusCode, Json<HealthStatus>) {
    (
        StatusCode::OK,
        Json(HealthStatus {
            status: StatusCode::OK.to_string(),
            message: "API is healthy".to_string(),
        }),
    )
}

fn unhealthy(message: &str) -> (StatusCode, Json<HealthStatus>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(HealthStatus {
            status: StatusCode::SERVICE_UNAVAILABLE.to_string(),
            message: message.to_string(),
        }),
    )
}
