use crate::schemas::{ApiResponse, AppState, MarketPulse};
use axum::{extract::State, response::Json};
use common::{CoverageGap, MarketShare, PremiumTrend};
use tracing::instrument;

/// Get the average-premium trend line
#[utoipa::path(
    get,
    path = "/api/v1/market/premium-trend",
    tag = "market",
    responses(
        (status = 200, description = "Premium trend retrieved successfully", body = ApiResponse<PremiumTrend>)
    )
)]
#[instrument]
pub async fn get_premium_trend(State(state): State<AppState>) -> Json<ApiResponse<PremiumTrend>> {
    let response = ApiResponse {
        data: state.datasets.premium_trend.clone(),
        message: "Premium trend retrieved successfully".to_string(),
        success: true,
    };

    Json(response)
}

/// Get the provider market-share breakdown
#[utoipa::path(
    get,
    path = "/api/v1/market/share",
    tag = "market",
    responses(
        (status = 200, description = "Market share retrieved successfully", body = ApiResponse<MarketShare>)
    )
)]
#[instrument]
pub async fn get_market_share(State(state): State<AppState>) -> Json<ApiResponse<MarketShare>> {
    let response = ApiResponse {
        data: state.datasets.market_share.clone(),
        message: "Market share retrieved successfully".to_string(),
        success: true,
    };

    Json(response)
}

/// Get the usage-vs-coverage comparison
#[utoipa::path(
    get,
    path = "/api/v1/market/coverage-gap",
    tag = "market",
    responses(
        (status = 200, description = "Coverage gap retrieved successfully", body = ApiResponse<CoverageGap>)
    )
)]
#[instrument]
pub async fn get_coverage_gap(State(state): State<AppState>) -> Json<ApiResponse<CoverageGap>> {
    let response = ApiResponse {
        data: state.datasets.coverage_gap.clone(),
        message: "Coverage gap retrieved successfully".to_string(),
        success: true,
    };

    Json(response)
}

/// Get all three chart datasets for the Market Pulse panel in one call
#[utoipa::path(
    get,
    path = "/api/v1/market/pulse",
    tag = "market",
    responses(
        (status = 200, description = "Market pulse retrieved successfully", body = ApiResponse<MarketPulse>)
    )
)]
#[instrument]
pub async fn get_market_pulse(State(state): State<AppState>) -> Json<ApiResponse<MarketPulse>> {
    let pulse = MarketPulse {
        premium_trend: state.datasets.premium_trend.clone(),
        market_share: state.datasets.market_share.clone(),
        coverage_gap: state.datasets.coverage_gap.clone(),
        premium_increase_eur: state.datasets.premium_trend.overall_increase(),
    };

    let response = ApiResponse {
        data: pulse,
        message: "Market pulse retrieved successfully".to_string(),
        success: true,
    };

    Json(response)
}
