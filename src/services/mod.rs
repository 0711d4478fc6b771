//! Service layer for Smart Budget
//!
//! Pure calculations (budget aggregation, CSV normalization, compound
//! growth) plus the editing service that mutates a session.

pub mod budget;
pub mod expense;
pub mod growth;
pub mod import;

pub use budget::{calculate_budget, expense_details, utilization};
pub use expense::ExpenseService;
pub use growth::{final_snapshot, simulate_growth, GrowthInputs, GrowthSnapshot, MAX_DURATION_YEARS};
pub use import::{import_csv_file, import_csv_text, normalize_rows, parse_csv_rows, NormalizedImport};
