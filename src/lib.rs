//! Smart Budget - personal budget calculator
//!
//! This library turns monthly income, a list of expense lines and a savings
//! rate into a full budget breakdown, normalizes expense lists imported from
//! CSV, and projects compound growth of a regular investment.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Expense lines, vocabularies, results and the session
//! - `services`: Budget aggregation, CSV import, growth simulation, editing
//! - `storage`: JSON session snapshot storage
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust
//! use smart_budget::models::ExpenseRecord;
//! use smart_budget::services::calculate_budget;
//!
//! let expenses = vec![
//!     ExpenseRecord::new(1).with_amount("1000").with_category("Rent"),
//!     ExpenseRecord::new(2).with_amount("200").with_category("Food"),
//! ];
//! let results = calculate_budget("3000", "", &expenses, 20.0);
//! assert_eq!(results.total_expenses, 1200.0);
//! assert_eq!(results.remaining_balance, 1200.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SmartBudgetError, SmartBudgetResult};
