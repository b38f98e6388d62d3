use crate::schemas::{AppState, MarketDatasets};
use anyhow::{Context, Result};
use common::datasets;
use std::sync::Arc;

/// Initialize application configuration and state
pub fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Build the fixed datasets and check their invariants before serving
    let market_datasets = MarketDatasets {
        premium_trend: datasets::premium_trend(),
        market_share: datasets::market_share(),
        coverage_gap: datasets::coverage_gap(),
        savings_estimate: datasets::savings_estimate(),
    };

    market_datasets
        .premium_trend
        .validate()
        .context("premium trend fixture failed validation")?;
    market_datasets
        .market_share
        .validate()
        .context("market share fixture failed validation")?;
    market_datasets
        .coverage_gap
        .validate()
        .context("coverage gap fixture failed validation")?;

    tracing::info!(
        trend_points = market_datasets.premium_trend.points.len(),
        providers = market_datasets.market_share.providers.len(),
        categories = market_datasets.coverage_gap.categories.len(),
        "Market datasets loaded and validated"
    );

    Ok(AppState {
        datasets: Arc::new(market_datasets),
    })
}
