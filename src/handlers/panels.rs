use crate::schemas::{ApiResponse, AppState, PanelDescriptor};
use axum::{extract::State, response::Json};
use tracing::instrument;

/// Get metadata for the three dashboard panels
#[utoipa::path(
    get,
    path = "/api/v1/panels",
    tag = "panels",
    responses(
        (status = 200, description = "Panel descriptors retrieved successfully", body = ApiResponse<Vec<PanelDescriptor>>)
    )
)]
#[instrument]
pub async fn get_panels(State(_state): State<AppState>) -> Json<ApiResponse<Vec<PanelDescriptor>>> {
    let panels = vec![
        PanelDescriptor {
            slug: "market-pulse".to_string(),
            title: "Market Pulse".to_string(),
            insight: "Premiums are rising faster than tech salaries. Staying on the same plan costs you more every year.".to_string(),
        },
        PanelDescriptor {
            slug: "coverage-analyzer".to_string(),
            title: "Coverage Analyzer".to_string(),
            insight: "Upload your policy document to extract your current benefits and match them against the market.".to_string(),
        },
        PanelDescriptor {
            slug: "savings-calculator".to_string(),
            title: "Savings Calculator".to_string(),
            insight: "Based on typical switching from legacy corporate plans to modern equivalents.".to_string(),
        },
    ];

    let response = ApiResponse {
        data: panels,
        message: "Panel descriptors retrieved successfully".to_string(),
        success: true,
    };

    Json(response)
}
