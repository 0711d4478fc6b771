//! CSV Export functionality
//!
//! Exports the category and account breakdowns, and growth projections, to
//! spreadsheet-friendly CSV.

use std::io::Write;

use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::models::BudgetResults;
use crate::services::growth::GrowthSnapshot;

/// Export the results breakdown: one row per category, then per account
pub fn export_results_csv<W: Write>(results: &BudgetResults, writer: W) -> SmartBudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Breakdown", "Name", "Total", "Fixed", "Variable", "Color"])
        .map_err(export_error)?;

    for (name, bucket) in results.by_category.iter() {
        csv_writer.write_record([
            "category",
            name,
            format!("{:.2}", bucket.total).as_str(),
            format!("{:.2}", bucket.fixed).as_str(),
            format!("{:.2}", bucket.variable).as_str(),
            bucket.color.as_deref().unwrap_or(""),
        ])
            .map_err(export_error)?;
    }

    for ((name, bucket), slice) in results.by_account.iter().zip(results.account_slices()) {
        csv_writer.write_record([
            "account",
            name,
            format!("{:.2}", bucket.total).as_str(),
            format!("{:.2}", bucket.fixed).as_str(),
            format!("{:.2}", bucket.variable).as_str(),
            slice.color.as_str(),
        ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| SmartBudgetError::Export(e.to_string()))
}

/// Export a growth projection, one row per year
pub fn export_growth_csv<W: Write>(years: &[GrowthSnapshot], writer: W) -> SmartBudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Year", "Capital", "Cumulative Interest", "Cumulative Contributions"])
        .map_err(export_error)?;
    for snapshot in years {
        csv_writer.write_record([
            snapshot.year.to_string(),
            snapshot.capital.to_string(),
            snapshot.cumulative_interest.to_string(),
            snapshot.cumulative_contributions.to_string(),
        ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| SmartBudgetError::Export(e.to_string()))
}

fn export_error(e: csv::Error) -> SmartBudgetError {
    SmartBudgetError::Export(e.to_string())
}
