//! The fixed market datasets behind the dashboard charts.
//!
//! Everything here is a compiled-in constant for the Irish health-insurance
//! market. The functions are pure and infallible; callers get a fresh owned
//! value each time, identical on every invocation. There is no ingestion or
//! refresh path, the figures change only with a new release.

use crate::market::{
    CoverageCategory, CoverageGap, MarketShare, PremiumPoint, PremiumTrend, ProviderShare,
};
use crate::savings::SavingsEstimate;

/// Average adult premium per year, 2023 through the 2026 estimate.
pub fn premium_trend() -> PremiumTrend {
    PremiumTrend::new(vec![
        point("2023", 1594),
        point("2024", 1740),
        point("2025", 1879),
        point("2026 (Est)", 1929),
    ])
}

/// Market-share breakdown across Irish providers, 2025.
pub fn market_share() -> MarketShare {
    MarketShare::new(vec![
        share("Vhi Healthcare", 48.0),
        share("Laya Healthcare", 28.0),
        share("Irish Life Health", 20.0),
        share("Others", 4.0),
    ])
}

/// Usage frequency vs plan coverage across benefit categories.
/// Day-to-day claims (GP, physio, dental) are claimed often but covered
/// poorly due to high excesses; hospital stays are the reverse.
pub fn coverage_gap() -> CoverageGap {
    CoverageGap::new(vec![
        category("GP Visits", 85.0, 20.0),
        category("Physio", 60.0, 30.0),
        category("Dental", 70.0, 15.0),
        category("Hospital Stay", 15.0, 95.0),
    ])
}

/// Hardcoded savings figure for the Savings Calculator panel.
pub fn savings_estimate() -> SavingsEstimate {
    SavingsEstimate {
        amount_eur: 450,
        percent_delta: 22.0,
        basis: "Based on typical switching from legacy corporate plans to modern equivalents."
            .to_string(),
    }
}

fn point(period: &str, average_premium: i64) -> PremiumPoint {
    PremiumPoint {
        period: period.to_string(),
        average_premium,
    }
}

fn share(provider: &str, share_percent: f64) -> ProviderShare {
    ProviderShare {
        provider: provider.to_string(),
        share_percent,
    }
}

fn category(name: &str, usage_frequency_percent: f64, coverage_percent: f64) -> CoverageCategory {
    CoverageCategory {
        category: name.to_string(),
        usage_frequency_percent,
        coverage_percent,
    }
}
