use crate::schemas::{ApiResponse, AppState};
use axum::{extract::State, response::Json};
use common::SavingsEstimate;
use tracing::instrument;

/// Get the projected annual savings figure
///
/// The figure is a fixed literal today. A future comparison engine would
/// derive it from the caller's current plan against market alternatives.
#[utoipa::path(
    get,
    path = "/api/v1/savings/estimate",
    tag = "savings",
    responses(
        (status = 200, description = "Savings estimate retrieved successfully", body = ApiResponse<SavingsEstimate>)
    )
)]
#[instrument]
pub async fn get_savings_estimate(
    State(state): State<AppState>,
) -> Json<ApiResponse<SavingsEstimate>> {
    let response = ApiResponse {
        data: state.datasets.savings_estimate.clone(),
        message: "Savings estimate retrieved successfully".to_string(),
        success: true,
    };

    Json(response)
}
