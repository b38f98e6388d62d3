use crate::schemas::{AppState, ErrorResponse, HealthResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::instrument;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is unhealthy", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    // Re-check the dataset invariants; with compiled-in fixtures this can
    // only fail after a bad edit to the fixtures themselves.
    let datasets_status = if state.datasets.premium_trend.validate().is_ok()
        && state.datasets.market_share.validate().is_ok()
        && state.datasets.coverage_gap.validate().is_ok()
    {
        "valid".to_string()
    } else {
        "invalid".to_string()
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        datasets: datasets_status,
    };

    Ok(Json(response))
}
