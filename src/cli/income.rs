//! Income and savings CLI commands

use crate::config::settings::Settings;
use crate::error::SmartBudgetResult;
use crate::models::{format_amount, parse_amount_or_zero, BudgetSession};
use crate::services::ExpenseService;

/// Handle the income command
pub fn handle_income_command(
    session: &mut BudgetSession,
    settings: &Settings,
    salary: &str,
    supplement: Option<&str>,
) -> SmartBudgetResult<()> {
    ExpenseService::new(session).set_income(salary, supplement);

    let symbol = settings.currency_symbol.as_str();
    let main = parse_amount_or_zero(&session.income);
    let extra = parse_amount_or_zero(&session.supplemental_income);

    println!("Income:        {}", format_amount(main, symbol));
    println!("Supplemental:  {}", format_amount(extra, symbol));
    println!("Total income:  {}", format_amount(main + extra, symbol));
    Ok(())
}

/// Handle the savings command
pub fn handle_savings_command(session: &mut BudgetSession, rate: f64) -> SmartBudgetResult<()> {
    ExpenseService::new(session).set_savings_rate(rate)?;
    println!("Savings rate set to {}%", rate);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_keeps_raw_text() {
        let mut session = BudgetSession::default();
        handle_income_command(&mut session, &Settings::default(), "2 400,50", Some("abc")).unwrap();

        assert_eq!(session.income, "2 400,50");
        assert_eq!(session.supplemental_income, "abc");
    }

    #[test]
    fn test_savings_rate_out_of_range() {
        let mut session = BudgetSession::default();
        assert!(handle_savings_command(&mut session, 75.0).unwrap_err().is_validation());
        assert_eq!(session.savings_rate, 20.0);
    }
}
