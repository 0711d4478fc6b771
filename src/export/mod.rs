//! Export module for Smart Budget
//!
//! Writes budget results and growth projections in several formats:
//! - CSV: category/account breakdown and yearly projection rows
//! - JSON: machine-readable results and projections
//! - YAML: human-readable results

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_growth_csv, export_results_csv};
pub use json::{export_growth_json, export_results_json, GrowthExport, ResultsExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_results_yaml, import_results_yaml};
