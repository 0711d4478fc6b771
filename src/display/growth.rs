//! Growth projection display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_percentage, format_title};
use crate::models::format_amount;
use crate::services::growth::{final_snapshot, GrowthInputs, GrowthSnapshot};

#[derive(Tabled)]
struct GrowthRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Contributed")]
    contributions: String,
    #[tabled(rename = "Interest")]
    interest: String,
}

/// Year-by-year projection table
pub fn format_growth_table(snapshots: &[GrowthSnapshot], symbol: &str) -> String {
    if snapshots.is_empty() {
        return "No years to project.".to_string();
    }

    let rows = snapshots.iter().map(|s| GrowthRow {
        year: s.year,
        capital: format_amount(s.capital as f64, symbol),
        contributions: format_amount(s.cumulative_contributions as f64, symbol),
        interest: format_amount(s.cumulative_interest as f64, symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Inputs and final-year figures
pub fn format_growth_summary(
    inputs: &GrowthInputs,
    snapshots: &[GrowthSnapshot],
    symbol: &str,
) -> String {
    let mut output = format_title("Savings projection");
    output.push_str(&format!(
        "{} initial, {} per month at {} for {} year(s)\n",
        format_amount(inputs.initial_capital, symbol),
        format_amount(inputs.monthly_contribution, symbol),
        format_percentage(inputs.annual_rate_percent),
        inputs.duration_years
    ));

    if let Some(last) = final_snapshot(snapshots) {
        output.push('\n');
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Final capital",
            format_amount(last.capital as f64, symbol)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Total contributed",
            format_amount(last.cumulative_contributions as f64, symbol)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Interest generated",
            format_amount(last.cumulative_interest as f64, symbol)
        ));
    }

    output
}
