//! Core data models for Smart Budget
//!
//! This module contains the data structures of the budgeting domain:
//! expense lines, label vocabularies, the colour palette and the derived
//! budget results and the session that holds them.

pub mod amount;
pub mod expense;
pub mod palette;
pub mod results;
pub mod session;
pub mod vocabulary;

pub use amount::{amount_to_text, format_amount, parse_amount, parse_amount_or_zero};
pub use expense::{
    default_expenses, is_recurring_type, ExpenseField, ExpenseRecord, MAIN_ACCOUNT, PAID_TOKEN,
    RECURRING_TYPE, TEMPORARY_TYPE, UNCATEGORIZED,
};
pub use palette::{palette_color, PALETTE};
pub use results::{Breakdown, BucketTotals, BudgetResults, PieSlice};
pub use vocabulary::Vocabulary;
pub use session::{BudgetSession, DEFAULT_SAVINGS_RATE};
