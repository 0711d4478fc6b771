//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod import;
pub mod income;
pub mod report;
pub mod simulate;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use import::handle_import_command;
pub use income::{handle_income_command, handle_savings_command};
pub use report::{handle_calculate_command, CalculateArgs, ReportFormat};
pub use simulate::{handle_simulate_command, ProjectionFormat, SimulateArgs};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{SmartBudgetError, SmartBudgetResult};

/// Writer for report output: the given file, or stdout
pub(crate) fn open_output(output: Option<&Path>) -> SmartBudgetResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SmartBudgetError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
