use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Projected annual savings shown on the Savings Calculator panel.
///
/// Today this is a fixed figure for a typical switch from a legacy
/// corporate plan to a modern equivalent. A real comparison engine would
/// compute it from the user's current plan against market alternatives.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SavingsEstimate {
    /// Potential annual savings, in whole euro
    pub amount_eur: i64,
    /// Savings relative to the current premium, in percent
    pub percent_delta: f64,
    /// Short description of what the figure is based on
    pub basis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_expected_fields() {
        let estimate = SavingsEstimate {
            amount_eur: 450,
            percent_delta: 22.0,
            basis: "typical switch".to_string(),
        };
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["amount_eur"], 450);
        assert_eq!(json["percent_delta"], 22.0);
    }
}
