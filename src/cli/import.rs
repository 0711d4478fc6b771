//! CLI command handler for CSV import
//!
//! Replaces the whole expense list with the rows of a CSV file. On any
//! failure the session is left untouched.

use std::path::Path;

use crate::config::settings::Settings;
use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::models::BudgetSession;
use crate::services::{import_csv_file, ExpenseService};

/// Handle the import command
pub fn handle_import_command(
    session: &mut BudgetSession,
    settings: &Settings,
    file: &Path,
    delimiter: Option<char>,
) -> SmartBudgetResult<()> {
    let delimiter = match delimiter {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => {
            return Err(SmartBudgetError::Validation(format!(
                "delimiter must be a single ASCII character, got '{}'",
                c
            )))
        }
        None => settings.delimiter_byte(),
    };

    let import = import_csv_file(file, delimiter)?;
    let (count, categories, accounts) = (
        import.expenses.len(),
        import.categories.len(),
        import.accounts.len(),
    );

    ExpenseService::new(session).replace_expenses(import);

    println!("Imported {} expense(s) from {}", count, file.display());
    println!("  Categories: {}", categories);
    println!("  Accounts:   {}", accounts);
    if count == 0 {
        println!("The file had no data rows; the expense list is now empty.");
    }
    Ok(())
}
