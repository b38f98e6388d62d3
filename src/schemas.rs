use common::{CoverageGap, MarketShare, PremiumTrend, SavingsEstimate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The fixed market datasets, built once at startup
    pub datasets: Arc<MarketDatasets>,
}

/// All dashboard datasets, validated at startup and immutable afterwards.
#[derive(Debug)]
pub struct MarketDatasets {
    pub premium_trend: PremiumTrend,
    pub market_share: MarketShare,
    pub coverage_gap: CoverageGap,
    pub savings_estimate: SavingsEstimate,
}

/// Everything the Market Pulse panel renders in one response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MarketPulse {
    /// Line chart: average premium per period
    pub premium_trend: PremiumTrend,
    /// Donut chart: provider market shares
    pub market_share: MarketShare,
    /// Grouped bars: usage frequency vs plan coverage
    pub coverage_gap: CoverageGap,
    /// Euro increase from the first trend period to the last
    pub premium_increase_eur: i64,
}

/// One panel of the dashboard's presentation surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PanelDescriptor {
    /// Stable identifier, e.g. "market-pulse"
    pub slug: String,
    /// Display title
    pub title: String,
    /// Insight copy shown at the top of the panel
    pub insight: String,
}

/// Acknowledgment for an uploaded policy document.
/// Receipt only; no parsing or benefit extraction happens yet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadReceipt {
    /// Original file name as submitted
    pub file_name: String,
    /// Size of the received file in bytes
    pub size_bytes: usize,
    /// Detected document format ("pdf" or "csv")
    pub format: String,
    /// Intake status, always "received"
    pub status: String,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Dataset invariant status
    pub datasets: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::market::get_premium_trend,
        crate::handlers::market::get_market_share,
        crate::handlers::market::get_coverage_gap,
        crate::handlers::market::get_market_pulse,
        crate::handlers::panels::get_panels,
        crate::handlers::documents::upload_document,
        crate::handlers::savings::get_savings_estimate,
    ),
    components(
        schemas(
            ApiResponse<PremiumTrend>,
            ApiResponse<MarketShare>,
            ApiResponse<CoverageGap>,
            ApiResponse<MarketPulse>,
            ApiResponse<Vec<PanelDescriptor>>,
            ApiResponse<UploadReceipt>,
            ApiResponse<SavingsEstimate>,
            ErrorResponse,
            HealthResponse,
            MarketPulse,
            PanelDescriptor,
            UploadReceipt,
            PremiumTrend,
            common::PremiumPoint,
            MarketShare,
            common::ProviderShare,
            CoverageGap,
            common::CoverageCategory,
            SavingsEstimate,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "market", description = "Market dataset endpoints"),
        (name = "panels", description = "Dashboard panel metadata"),
        (name = "documents", description = "Policy document intake"),
        (name = "savings", description = "Savings estimate endpoints"),
    ),
    info(
        title = "Premium Pulse API",
        description = "Health Insurance Market Dashboard API - Irish market premiums, provider shares, and coverage gaps",
        version = "0.1.0",
        contact(
            name = "Premium Pulse Team",
            email = "contact@premiumpulse.ie"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
