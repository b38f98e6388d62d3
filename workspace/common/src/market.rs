use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Maximum drift allowed between the sum of market shares and 100%.
pub const SHARE_SUM_TOLERANCE: f64 = 0.5;

/// Validation failures for the fixed market datasets.
///
/// The datasets are compiled-in constants, so any of these firing means
/// the fixture itself is wrong. They are checked once at startup and in
/// the health endpoint rather than on every request.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset contains no records")]
    EmptyDataset,
    #[error("duplicate label '{0}'")]
    DuplicateLabel(String),
    #[error("percentage {value} for '{label}' is outside [0, 100]")]
    PercentOutOfRange { label: String, value: f64 },
    #[error("negative amount {amount} for period '{period}'")]
    NegativeAmount { period: String, amount: i64 },
    #[error("market shares sum to {0}, expected 100")]
    ShareSumMismatch(f64),
}

/// A single point on the average-premium trend line.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PremiumPoint {
    /// Period label, e.g. "2024" or "2026 (Est)"
    pub period: String,
    /// Average adult premium for the period, in whole euro
    pub average_premium: i64,
}

/// Average adult premium per period, ordered chronologically.
/// Rendered as the "Inflation Curve" line chart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PremiumTrend {
    /// Trend points in chronological order
    pub points: Vec<PremiumPoint>,
}

impl PremiumTrend {
    pub fn new(points: Vec<PremiumPoint>) -> Self {
        Self { points }
    }

    /// Euro increase from the first period to the last.
    /// Zero for an empty trend.
    pub fn overall_increase(&self) -> i64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.average_premium - first.average_premium,
            _ => 0,
        }
    }

    /// Check the trend invariants: non-empty, unique period labels,
    /// non-negative premiums. Construction order is the chronology.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.points.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        for (i, point) in self.points.iter().enumerate() {
            if point.average_premium < 0 {
                return Err(DatasetError::NegativeAmount {
                    period: point.period.clone(),
                    amount: point.average_premium,
                });
            }
            if self.points[..i].iter().any(|p| p.period == point.period) {
                return Err(DatasetError::DuplicateLabel(point.period.clone()));
            }
        }
        Ok(())
    }
}

/// One provider's slice of the insured population.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProviderShare {
    /// Provider name, e.g. "Vhi Healthcare"
    pub provider: String,
    /// Share of the insured population, in percent
    pub share_percent: f64,
}

/// Market-share breakdown across providers.
/// Rendered as the "Who Covers Ireland?" donut chart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MarketShare {
    /// Per-provider shares; order is display order
    pub providers: Vec<ProviderShare>,
}

impl MarketShare {
    pub fn new(providers: Vec<ProviderShare>) -> Self {
        Self { providers }
    }

    /// Sum of all provider shares, in percent.
    pub fn total_share(&self) -> f64 {
        self.providers.iter().map(|p| p.share_percent).sum()
    }

    /// Check the share invariants: non-empty, unique providers, each
    /// share in [0, 100], shares summing to 100 within tolerance.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.providers.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        for (i, share) in self.providers.iter().enumerate() {
            if !(0.0..=100.0).contains(&share.share_percent) {
                return Err(DatasetError::PercentOutOfRange {
                    label: share.provider.clone(),
                    value: share.share_percent,
                });
            }
            if self.providers[..i].iter().any(|p| p.provider == share.provider) {
                return Err(DatasetError::DuplicateLabel(share.provider.clone()));
            }
        }
        let total = self.total_share();
        if (total - 100.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(DatasetError::ShareSumMismatch(total));
        }
        Ok(())
    }
}

/// How often a benefit category is claimed vs how well plans cover it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CoverageCategory {
    /// Benefit category, e.g. "GP Visits"
    pub category: String,
    /// How often policyholders use the benefit, in percent
    pub usage_frequency_percent: f64,
    /// How well a standard plan reimburses it, in percent
    pub coverage_percent: f64,
}

/// Usage-vs-coverage comparison across benefit categories.
/// Rendered as the grouped "Usage vs Coverage Gap" bar chart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CoverageGap {
    /// Categories in display order
    pub categories: Vec<CoverageCategory>,
}

impl CoverageGap {
    pub fn new(categories: Vec<CoverageCategory>) -> Self {
        Self { categories }
    }

    /// Check the gap invariants: non-empty, unique categories, both
    /// percentages in [0, 100].
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.categories.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        for (i, cat) in self.categories.iter().enumerate() {
            for value in [cat.usage_frequency_percent, cat.coverage_percent] {
                if !(0.0..=100.0).contains(&value) {
                    return Err(DatasetError::PercentOutOfRange {
                        label: cat.category.clone(),
                        value,
                    });
                }
            }
            if self.categories[..i].iter().any(|c| c.category == cat.category) {
                return Err(DatasetError::DuplicateLabel(cat.category.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(points: &[(&str, i64)]) -> PremiumTrend {
        PremiumTrend::new(
            points
                .iter()
                .map(|(period, premium)| PremiumPoint {
                    period: period.to_string(),
                    average_premium: *premium,
                })
                .collect(),
        )
    }

    #[test]
    fn empty_trend_is_rejected() {
        assert_eq!(trend(&[]).validate(), Err(DatasetError::EmptyDataset));
    }

    #[test]
    fn duplicate_period_is_rejected() {
        let t = trend(&[("2023", 1594), ("2023", 1740)]);
        assert_eq!(
            t.validate(),
            Err(DatasetError::DuplicateLabel("2023".to_string()))
        );
    }

    #[test]
    fn negative_premium_is_rejected() {
        let t = trend(&[("2023", -1)]);
        assert_eq!(
            t.validate(),
            Err(DatasetError::NegativeAmount {
                period: "2023".to_string(),
                amount: -1,
            })
        );
    }

    #[test]
    fn overall_increase_spans_first_to_last() {
        let t = trend(&[("2023", 1594), ("2024", 1740), ("2025", 1929)]);
        assert_eq!(t.overall_increase(), 335);
        assert_eq!(trend(&[]).overall_increase(), 0);
    }

    #[test]
    fn shares_must_sum_to_100() {
        let m = MarketShare::new(vec![
            ProviderShare {
                provider: "A".to_string(),
                share_percent: 48.0,
            },
            ProviderShare {
                provider: "B".to_string(),
                share_percent: 48.0,
            },
        ]);
        assert_eq!(m.validate(), Err(DatasetError::ShareSumMismatch(96.0)));
    }

    #[test]
    fn share_outside_range_is_rejected() {
        let m = MarketShare::new(vec![ProviderShare {
            provider: "A".to_string(),
            share_percent: 101.0,
        }]);
        assert_eq!(
            m.validate(),
            Err(DatasetError::PercentOutOfRange {
                label: "A".to_string(),
                value: 101.0,
            })
        );
    }

    #[test]
    fn share_sum_tolerance_allows_rounding() {
        let m = MarketShare::new(vec![
            ProviderShare {
                provider: "A".to_string(),
                share_percent: 66.7,
            },
            ProviderShare {
                provider: "B".to_string(),
                share_percent: 33.3,
            },
        ]);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn coverage_percentages_are_bounded() {
        let g = CoverageGap::new(vec![CoverageCategory {
            category: "Dental".to_string(),
            usage_frequency_percent: 70.0,
            coverage_percent: 120.0,
        }]);
        assert_eq!(
            g.validate(),
            Err(DatasetError::PercentOutOfRange {
                label: "Dental".to_string(),
                value: 120.0,
            })
        );
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let g = CoverageGap::new(vec![
            CoverageCategory {
                category: "Physio".to_string(),
                usage_frequency_percent: 60.0,
                coverage_percent: 30.0,
            },
            CoverageCategory {
                category: "Physio".to_string(),
                usage_frequency_percent: 10.0,
                coverage_percent: 10.0,
            },
        ]);
        assert_eq!(
            g.validate(),
            Err(DatasetError::DuplicateLabel("Physio".to_string()))
        );
    }

    #[test]
    fn serde_round_trip_preserves_field_names() {
        let t = trend(&[("2023", 1594)]);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["points"][0]["period"], "2023");
        assert_eq!(json["points"][0]["average_premium"], 1594);
    }
}
