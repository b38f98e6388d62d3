use crate::handlers::{
    documents::upload_document,
    health::health_check,
    market::{get_coverage_gap, get_market_pulse, get_market_share, get_premium_trend},
    panels::get_panels,
    savings::get_savings_estimate,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Market dataset routes
        .route("/api/v1/market/premium-trend", get(get_premium_trend))
        .route("/api/v1/market/share", get(get_market_share))
        .route("/api/v1/market/coverage-gap", get(get_coverage_gap))
        .route("/api/v1/market/pulse", get(get_market_pulse))
        // Presentation surface
        .route("/api/v1/panels", get(get_panels))
        // Document intake
        .route("/api/v1/documents", post(upload_document))
        // Savings estimate
        .route("/api/v1/savings/estimate", get(get_savings_estimate))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
