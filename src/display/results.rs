//! Budget results display formatting
//!
//! Summary block, deficit warning, utilization bar and the category and
//! account breakdown tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_bar, format_percentage, format_title, share_of};
use crate::models::{format_amount, BudgetResults, ExpenseRecord, PAID_TOKEN};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Fixed")]
    fixed: String,
    #[tabled(rename = "Variable")]
    variable: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Color")]
    color: String,
}

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Expense")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid")]
    paid: String,
}

/// Format the full results report
pub fn format_results(results: &BudgetResults, savings_rate: f64, symbol: &str) -> String {
    let mut output = format_results_summary(results, savings_rate, symbol);

    output.push('\n');
    output.push_str(&format_title("Expenses by category"));
    output.push_str(&format_category_table(results, symbol));
    output.push('\n');

    output.push('\n');
    output.push_str(&format_title("Expenses by account"));
    output.push_str(&format_account_table(results, symbol));
    output.push('\n');

    output
}

/// Totals, savings, balance, utilization and the deficit warning
pub fn format_results_summary(results: &BudgetResults, savings_rate: f64, symbol: &str) -> String {
    let mut output = format_title("Budget summary");

    let savings_label = format!("Recommended savings ({})", format_percentage(savings_rate));
    let lines = [
        ("Total income", results.total_income),
        ("Fixed expenses", results.total_fixed_expenses),
        ("Variable expenses", results.total_variable_expenses),
        ("Total expenses", results.total_expenses),
    ];
    for (label, value) in lines {
        output.push_str(&format!("{:<28}{:>16}\n", label, format_amount(value, symbol)));
    }
    output.push_str(&format!(
        "{:<28}{:>16}\n",
        savings_label,
        format_amount(results.recommended_savings, symbol)
    ));
    output.push_str(&format!(
        "{:<28}{:>16}\n",
        "Remaining balance",
        format_amount(results.remaining_balance, symbol)
    ));

    output.push_str(&format!(
        "{:<28}[{}] {}\n",
        "Income used by expenses",
        format_bar(results.utilization_capped(), BAR_WIDTH),
        format_percentage(results.utilization_percent)
    ));

    if results.is_deficit {
        output.push_str(&format!(
            "\nWARNING: deficit of {}. Expenses and savings exceed your income.\n",
            format_amount(-results.remaining_balance, symbol)
        ));
        if results.is_over_budget() {
            output.push_str("Expenses alone are higher than your income.\n");
        }
    }

    output
}

/// Category table with fixed/variable split and share of total expenses
pub fn format_category_table(results: &BudgetResults, symbol: &str) -> String {
    if results.by_category.is_empty() {
        return "No expenses with an amount yet.".to_string();
    }

    let rows = results.by_category.iter().map(|(name, bucket)| BreakdownRow {
        name: name.to_string(),
        total: format_amount(bucket.total, symbol),
        fixed: format_amount(bucket.fixed, symbol),
        variable: format_amount(bucket.variable, symbol),
        share: format_percentage(share_of(bucket.total, results.total_expenses)),
        color: bucket.color.clone().unwrap_or_default(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Account table, coloured in first-seen order
pub fn format_account_table(results: &BudgetResults, symbol: &str) -> String {
    if results.by_account.is_empty() {
        return "No expenses with an amount yet.".to_string();
    }

    let slices = results.account_slices();
    let rows = results
        .by_account
        .iter()
        .zip(slices)
        .map(|((name, bucket), slice)| BreakdownRow {
            name: name.to_string(),
            total: format_amount(bucket.total, symbol),
            fixed: format_amount(bucket.fixed, symbol),
            variable: format_amount(bucket.variable, symbol),
            share: format_percentage(share_of(bucket.total, results.total_expenses)),
            color: slice.color,
        });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Expense detail lines for a category selection, largest first
///
/// `lines` and `total` come from [`crate::services::expense_details`].
pub fn format_expense_details(
    lines: &[&ExpenseRecord],
    total: f64,
    categories: &[String],
    symbol: &str,
) -> String {
    let scope = if categories.is_empty() {
        "all categories".to_string()
    } else {
        categories.join(", ")
    };
    let mut output = format_title(&format!("Details: {}", scope));

    if lines.is_empty() {
        output.push_str("No matching expenses.\n");
    } else {
        let rows = lines.iter().map(|e| DetailRow {
            name: e.name.clone(),
            category: e.effective_category().to_string(),
            amount: format_amount(e.amount_value(), symbol),
            paid: if e.is_paid { PAID_TOKEN.to_string() } else { String::new() },
        });
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push_str(&format!("Total: {}\n", format_amount(total, symbol)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::budget::{calculate_budget, expense_details};

    fn sample_expenses() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(1)
                .with_amount("1000")
                .with_category("Rent")
                .with_account("Checking")
                .with_type("Recurring"),
            ExpenseRecord::new(2)
                .with_amount("200")
                .with_category("Food")
                .with_account("Card")
                .with_type("Temporary"),
        ]
    }

    #[test]
    fn test_summary_lists_totals() {
        let results = calculate_budget("3000", "", &sample_expenses(), 20.0);
        let output = format_results_summary(&results, 20.0, "€");

        assert!(output.contains("3000.00 €"));
        assert!(output.contains("1200.00 €"));
        assert!(output.contains("Recommended savings (20%)"));
        assert!(output.contains("40%"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_deficit_warning() {
        let results = calculate_budget("1000", "", &sample_expenses(), 20.0);
        let output = format_results_summary(&results, 20.0, "€");

        assert!(output.contains("WARNING: deficit of 400.00 €"));
        assert!(output.contains("Expenses alone are higher"));
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_no_income_shows_na() {
        let results = calculate_budget("", "", &sample_expenses(), 20.0);
        let output = format_results_summary(&results, 20.0, "$");
        assert!(output.contains("n/a"));
    }

    #[test]
    fn test_breakdown_tables() {
        let results = calculate_budget("3000", "", &sample_expenses(), 20.0);
        let output = format_results(&results, 20.0, "€");

        assert!(output.contains("Rent"));
        assert!(output.contains("Food"));
        assert!(output.contains("Checking"));
        assert!(output.contains("#8884d8"));
        assert!(output.contains("#82ca9d"));
    }

    #[test]
    fn test_empty_breakdown() {
        let results = calculate_budget("3000", "", &[], 20.0);
        assert_eq!(
            format_category_table(&results, "€"),
            "No expenses with an amount yet."
        );
    }

    #[test]
    fn test_details_are_sorted() {
        let expenses = sample_expenses();
        let (lines, total) = expense_details(&expenses, &[]);
        let output = format_expense_details(&lines, total, &[], "€");

        let rent = output.find("1000.00 €").unwrap();
        let food = output.find("200.00 €").unwrap();
        assert!(rent < food);
        assert!(output.contains("Total: 1200.00 €"));
        assert!(output.contains("all categories"));
    }
}
