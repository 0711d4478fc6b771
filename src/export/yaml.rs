//! YAML Export functionality
//!
//! Exports budget results to YAML for a human-readable report.

use std::io::Write;

use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::export::json::ResultsExport;
use crate::models::BudgetResults;

/// Export budget results to YAML format
pub fn export_results_yaml<W: Write>(
    results: &BudgetResults,
    savings_rate: f64,
    writer: &mut W,
) -> SmartBudgetResult<()> {
    let export = ResultsExport::new(results, savings_rate);
    let export_err = |e: std::io::Error| SmartBudgetError::Export(e.to_string());

    writeln!(writer, "# Smart Budget Results").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SmartBudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Read a results export back from YAML
pub fn import_results_yaml(yaml_str: &str) -> SmartBudgetResult<ResultsExport> {
    serde_yaml::from_str(yaml_str).map_err(|e| SmartBudgetError::Import(e.to_string()))
}
