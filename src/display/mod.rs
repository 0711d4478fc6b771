//! Display formatting for terminal output
//!
//! Renders results, expense lists and growth projections as plain text and
//! tables for the `budget` binary.

pub mod expense;
pub mod format;
pub mod growth;
pub mod results;

pub use expense::{format_expense_line, format_expense_list};
pub use growth::{format_growth_summary, format_growth_table};
pub use results::{
    format_account_table, format_category_table, format_expense_details, format_results,
    format_results_summary,
};
