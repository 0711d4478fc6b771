//! Budget aggregation
//!
//! Turns the income fields, the expense list and a savings rate into a full
//! [`BudgetResults`]. Pure and deterministic: the same inputs always give the
//! same results, and malformed numeric text counts as zero instead of failing.

use tracing::debug;

use crate::models::{
    parse_amount_or_zero, Breakdown, BudgetResults, ExpenseRecord, PieSlice,
};

/// Compute the budget results for one set of inputs
///
/// Expenses whose amount is blank or parses to zero are left out of every
/// rollup, so they never create empty category or account buckets.
pub fn calculate_budget(
    income: &str,
    supplemental_income: &str,
    expenses: &[ExpenseRecord],
    savings_rate_percent: f64,
) -> BudgetResults {
    let total_income = parse_amount_or_zero(income) + parse_amount_or_zero(supplemental_income);

    let mut by_category = Breakdown::new();
    let mut by_account = Breakdown::new();
    let mut total_fixed_expenses = 0.0;
    let mut total_variable_expenses = 0.0;

    for expense in expenses {
        let amount = expense.amount_value();
        if amount == 0.0 {
            continue;
        }

        let category = by_category.bucket_mut(expense.effective_category());
        if category.color.is_none() {
            category.color = Some(expense.color.clone());
        }
        category.add(amount, expense.is_recurring);

        by_account
            .bucket_mut(expense.effective_account())
            .add(amount, expense.is_recurring);

        if expense.is_recurring {
            total_fixed_expenses += amount;
        } else {
            total_variable_expenses += amount;
        }
    }

    let total_expenses = total_fixed_expenses + total_variable_expenses;
    let recommended_savings = total_income * (savings_rate_percent / 100.0);
    let remaining_balance = total_income - total_expenses - recommended_savings;

    let pie_data = by_category
        .iter()
        .map(|(name, bucket)| PieSlice {
            name: name.to_string(),
            value: bucket.total,
            color: bucket.color.clone().unwrap_or_default(),
        })
        .collect();

    let utilization_percent = utilization(total_expenses, total_income);

    debug!(
        total_income,
        total_expenses,
        remaining_balance,
        categories = by_category.len(),
        accounts = by_account.len(),
        "budget calculated"
    );

    BudgetResults {
        total_income,
        total_fixed_expenses,
        total_variable_expenses,
        total_expenses,
        recommended_savings,
        remaining_balance,
        is_deficit: remaining_balance < 0.0,
        pie_data,
        by_category,
        by_account,
        utilization_percent,
    }
}

/// Expenses as a percentage of income
///
/// Zero income yields `0.0` when there are no expenses and an infinity with
/// the sign of the expenses otherwise, never NaN.
pub fn utilization(total_expenses: f64, total_income: f64) -> f64 {
    if total_income == 0.0 {
        if total_expenses == 0.0 {
            0.0
        } else {
            f64::INFINITY.copysign(total_expenses)
        }
    } else {
        total_expenses / total_income * 100.0
    }
}

/// Expense lines for the detail view
///
/// Keeps lines whose category is in `categories` (all lines when it is
/// empty). Returns the positive lines sorted by amount, largest first, and
/// the total of every kept line.
pub fn expense_details<'a>(
    expenses: &'a [ExpenseRecord],
    categories: &[String],
) -> (Vec<&'a ExpenseRecord>, f64) {
    let filtered: Vec<&ExpenseRecord> = expenses
        .iter()
        .filter(|e| categories.is_empty() || categories.contains(&e.category))
        .collect();

    let total = filtered.iter().map(|e| e.amount_value()).sum();

    let mut lines: Vec<&ExpenseRecord> = filtered
        .into_iter()
        .filter(|e| e.amount_value() > 0.0)
        .collect();
    lines.sort_by(|a, b| b.amount_value().total_cmp(&a.amount_value()));

    (lines, total)
}
