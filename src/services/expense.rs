//! Expense editing service
//!
//! Add, edit, delete and bulk-replace the expense lines of a session. Any
//! edit invalidates the stored results, which are only refreshed by an
//! explicit recalculation.

use tracing::{debug, info};

use crate::config::settings::MAX_SAVINGS_RATE;
use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::models::{palette_color, BudgetResults, BudgetSession, ExpenseField, ExpenseRecord};
use crate::services::budget::calculate_budget;
use crate::services::import::NormalizedImport;

/// Service for editing a session's expenses and inputs
pub struct ExpenseService<'a> {
    session: &'a mut BudgetSession,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service over a session
    pub fn new(session: &'a mut BudgetSession) -> Self {
        Self { session }
    }

    /// Append a blank expense and return its id
    ///
    /// Category, account and type default to the first entry of their
    /// vocabulary; the colour follows the list length.
    pub fn add_expense(&mut self) -> u32 {
        let id = self.session.next_expense_id();

        let mut expense = ExpenseRecord::new(id);
        expense.category = self.session.categories.first().unwrap_or("").to_string();
        expense.account = self.session.accounts.first().unwrap_or("").to_string();
        expense.set_type(self.session.types.first().unwrap_or(""));
        expense.color = palette_color(self.session.expenses.len()).to_string();

        self.session.expenses.push(expense);
        self.session.show_results = false;
        debug!(id, "expense added");
        id
    }

    /// Change one field of an expense
    ///
    /// Setting `type` also sets the recurrence flag. `paid` accepts
    /// yes/no, true/false or 1/0.
    pub fn update_expense(
        &mut self,
        id: u32,
        field: ExpenseField,
        value: &str,
    ) -> SmartBudgetResult<&ExpenseRecord> {
        let paid = match field {
            ExpenseField::Paid => Some(parse_flag(value)?),
            _ => None,
        };

        let index = self
            .session
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SmartBudgetError::expense_not_found(id))?;

        self.session.show_results = false;
        let expense = &mut self.session.expenses[index];
        match field {
            ExpenseField::Name => expense.name = value.to_string(),
            ExpenseField::Amount => expense.amount = value.to_string(),
            ExpenseField::Category => expense.category = value.to_string(),
            ExpenseField::Type => expense.set_type(value),
            ExpenseField::Account => expense.account = value.to_string(),
            ExpenseField::Paid => expense.is_paid = paid.unwrap_or_default(),
        }
        debug!(id, %field, "expense updated");
        Ok(expense)
    }

    /// Remove an expense permanently
    pub fn delete_expense(&mut self, id: u32) -> SmartBudgetResult<ExpenseRecord> {
        let index = self
            .session
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SmartBudgetError::expense_not_found(id))?;

        self.session.show_results = false;
        debug!(id, "expense deleted");
        Ok(self.session.expenses.remove(index))
    }

    /// Replace the whole expense list with an import
    ///
    /// Category and account vocabularies are replaced; the type vocabulary
    /// only when the import found at least one type.
    pub fn replace_expenses(&mut self, import: NormalizedImport) {
        let NormalizedImport {
            expenses,
            categories,
            accounts,
            types,
        } = import;

        info!(count = expenses.len(), "expense list replaced by import");
        self.session.expenses = expenses;
        self.session.categories = categories;
        self.session.accounts = accounts;
        if !types.is_empty() {
            self.session.types = types;
        }
        self.session.show_results = false;
    }

    /// Set both income fields
    pub fn set_income(&mut self, income: &str, supplemental_income: Option<&str>) {
        self.session.income = income.to_string();
        if let Some(supplement) = supplemental_income {
            self.session.supplemental_income = supplement.to_string();
        }
        self.session.show_results = false;
    }

    /// Set the savings rate, which must lie in `0..=50`
    pub fn set_savings_rate(&mut self, rate: f64) -> SmartBudgetResult<()> {
        if !(0.0..=MAX_SAVINGS_RATE).contains(&rate) {
            return Err(SmartBudgetError::Validation(format!(
                "savings rate must be between 0 and {}%, got {}",
                MAX_SAVINGS_RATE, rate
            )));
        }
        self.session.savings_rate = rate;
        self.session.show_results = false;
        Ok(())
    }

    /// Recompute the results from scratch and store them in the session
    pub fn calculate(&mut self) -> &BudgetResults {
        let results = calculate_budget(
            &self.session.income,
            &self.session.supplemental_income,
            &self.session.expenses,
            self.session.savings_rate,
        );
        self.session.show_results = true;
        self.session.results.insert(results)
    }

    /// Return to a fresh session, keeping the given savings rate
    pub fn reset(&mut self, savings_rate: f64) {
        *self.session = BudgetSession::with_savings_rate(savings_rate);
        info!("session reset");
    }
}

fn parse_flag(value: &str) -> SmartBudgetResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" | "" => Ok(false),
        other => Err(SmartBudgetError::Validation(format!(
            "expected yes or no, got '{}'",
            other
        ))),
    }
}
