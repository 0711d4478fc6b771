//! Expense CLI commands
//!
//! Add, list, edit and delete the expense lines of the saved session.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_line, format_expense_list};
use crate::error::SmartBudgetResult;
use crate::models::{BudgetSession, ExpenseField};
use crate::services::ExpenseService;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense line
    Add {
        /// Label of the expense
        #[arg(short, long)]
        name: Option<String>,

        /// Amount as text (e.g. "850", "12,50")
        #[arg(short, long)]
        amount: Option<String>,

        /// Category (defaults to the first known category)
        #[arg(short, long)]
        category: Option<String>,

        /// Expense type, e.g. Recurring or Temporary
        #[arg(short = 't', long = "type")]
        expense_type: Option<String>,

        /// Account the expense is paid from
        #[arg(long)]
        account: Option<String>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Change one field of an expense
    Edit {
        /// Expense ID
        id: u32,

        /// Field to change: name, amount, category, type, account or paid
        field: ExpenseField,

        /// New value
        value: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: u32,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut BudgetSession,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SmartBudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            expense_type,
            account,
        } => {
            let mut service = ExpenseService::new(session);
            let id = service.add_expense();

            let edits = [
                (ExpenseField::Name, name),
                (ExpenseField::Amount, amount),
                (ExpenseField::Category, category),
                (ExpenseField::Type, expense_type),
                (ExpenseField::Account, account),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    service.update_expense(id, field, &value)?;
                }
            }

            if let Some(expense) = session.expense(id) {
                println!("Added {}", format_expense_line(expense, symbol));
            }
        }
        ExpenseCommands::List => {
            println!("{}", format_expense_list(&session.expenses, symbol));
        }
        ExpenseCommands::Edit { id, field, value } => {
            let mut service = ExpenseService::new(session);
            let expense = service.update_expense(id, field, &value)?;
            println!("Updated {}", format_expense_line(expense, symbol));
        }
        ExpenseCommands::Delete { id } => {
            let removed = ExpenseService::new(session).delete_expense(id)?;
            println!("Deleted {}", format_expense_line(&removed, symbol));
        }
    }

    Ok(())
}
