//! JSON Export functionality
//!
//! Exports budget results and growth projections to JSON with schema
//! versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::models::BudgetResults;
use crate::services::growth::{GrowthInputs, GrowthSnapshot};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Budget results export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Savings rate the results were computed with, in percent
    pub savings_rate: f64,

    pub results: BudgetResults,
}

impl ResultsExport {
    pub fn new(results: &BudgetResults, savings_rate: f64) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            savings_rate,
            results: results.clone(),
        }
    }
}

/// Growth projection export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub inputs: GrowthInputs,
    pub years: Vec<GrowthSnapshot>,
}

impl GrowthExport {
    pub fn new(inputs: &GrowthInputs, years: &[GrowthSnapshot]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            inputs: *inputs,
            years: years.to_vec(),
        }
    }
}

/// Export budget results to JSON
pub fn export_results_json<W: Write>(
    results: &BudgetResults,
    savings_rate: f64,
    writer: &mut W,
) -> SmartBudgetResult<()> {
    let export = ResultsExport::new(results, savings_rate);
    write_pretty(writer, &export)
}

/// Export a growth projection to JSON
pub fn export_growth_json<W: Write>(
    inputs: &GrowthInputs,
    years: &[GrowthSnapshot],
    writer: &mut W,
) -> SmartBudgetResult<()> {
    write_pretty(writer, &GrowthExport::new(inputs, years))
}

fn write_pretty<W: Write, T: Serialize>(writer: &mut W, value: &T) -> SmartBudgetResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| SmartBudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SmartBudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use crate::services::budget::calculate_budget;
    use crate::services::growth::simulate_growth;

    #[test]
    fn test_results_json_export() {
        let expenses = vec![ExpenseRecord::new(1).with_amount("500").with_category("Rent")];
        let results = calculate_budget("2000", "", &expenses, 10.0);

        let mut output = Vec::new();
        export_results_json(&results, 10.0, &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["schemaVersion"], EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed["savingsRate"], 10.0);
        assert_eq!(parsed["results"]["totalExpenses"], 500.0);
        assert_eq!(parsed["results"]["byCategory"]["Rent"]["total"], 500.0);
        assert_eq!(parsed["results"]["utilizationPercent"], 25.0);
    }

    #[test]
    fn test_infinite_utilization_exports_as_text() {
        let expenses = vec![ExpenseRecord::new(1).with_amount("5")];
        let results = calculate_budget("", "", &expenses, 20.0);

        let mut output = Vec::new();
        export_results_json(&results, 20.0, &mut output).unwrap();

        let parsed: ResultsExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.results.utilization_percent, f64::INFINITY);
        let raw: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(raw["results"]["utilizationPercent"], "Infinity");
    }

    #[test]
    fn test_growth_json_export() {
        let inputs = GrowthInputs::default();
        let years = simulate_growth(&inputs);

        let mut output = Vec::new();
        export_growth_json(&inputs, &years, &mut output).unwrap();

        let parsed: GrowthExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.years.len(), 10);
        assert_eq!(parsed.years[0].capital, 2354);
        assert_eq!(parsed.inputs, inputs);
    }
}
