//! Expense list display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::truncate;
use crate::models::{format_amount, parse_amount, ExpenseRecord, PAID_TOKEN};

const NAME_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    expense_type: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Paid")]
    paid: String,
}

/// Format the expense list as a table
///
/// Amounts that do not parse are shown as typed, in brackets, since they
/// count as zero in every calculation.
pub fn format_expense_list(expenses: &[ExpenseRecord], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses. Add one with 'budget expense add'.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id,
        name: truncate(&e.name, NAME_WIDTH),
        category: truncate(&e.category, NAME_WIDTH),
        amount: format_amount_cell(&e.amount, symbol),
        expense_type: e.expense_type.clone(),
        account: e.account.clone(),
        paid: if e.is_paid { PAID_TOKEN.to_string() } else { String::new() },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// One-line description of an expense
pub fn format_expense_line(expense: &ExpenseRecord, symbol: &str) -> String {
    let name = if expense.name.is_empty() {
        "(unnamed)"
    } else {
        &expense.name
    };
    format!(
        "#{} {} [{}] {}",
        expense.id,
        name,
        expense.effective_category(),
        format_amount_cell(&expense.amount, symbol)
    )
}

fn format_amount_cell(text: &str, symbol: &str) -> String {
    if text.trim().is_empty() {
        return "-".to_string();
    }
    match parse_amount(text) {
        Some(value) => format_amount(value, symbol),
        None => format!("[{}]", text),
    }
}
