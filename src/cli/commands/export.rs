use anyhow::Result;
use serde_json::json;
use tracing::{debug, info, trace};

use crate::config::initialize_app_state;

pub fn export(pretty: bool) -> Result<()> {
    trace!("Entering export function");
    info!("Exporting dashboard datasets");

    // Same construction and validation path as the server
    let state = initialize_app_state()?;
    let datasets = &state.datasets;
    debug!("Datasets validated for export");

    let document = json!({
        "premium_trend": datasets.premium_trend,
        "market_share": datasets.market_share,
        "coverage_gap": datasets.coverage_gap,
        "savings_estimate": datasets.savings_estimate,
        "premium_increase_eur": datasets.premium_trend.overall_increase(),
    });

    let output = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{}", output);

    info!("Export completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::initialize_app_state;

    #[test]
    fn export_document_contains_all_datasets() {
        let state = initialize_app_state().unwrap();
        let document = serde_json::json!({
            "premium_trend": state.datasets.premium_trend,
            "market_share": state.datasets.market_share,
            "coverage_gap": state.datasets.coverage_gap,
            "savings_estimate": state.datasets.savings_estimate,
            "premium_increase_eur": state.datasets.premium_trend.overall_increase(),
        });

        assert_eq!(document["premium_increase_eur"], 335);
        assert_eq!(document["premium_trend"]["points"][0]["period"], "2023");
        assert_eq!(document["savings_estimate"]["amount_eur"], 450);
    }
}
