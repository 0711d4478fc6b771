//! Budget calculation CLI command
//!
//! Recomputes the results from the session inputs, stores them, and prints
//! or exports them.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::open_output;
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_results};
use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::export::{export_results_csv, export_results_json, export_results_yaml};
use crate::models::BudgetSession;
use crate::services::{expense_details, ExpenseService};

/// Output format for budget results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// JSON document
    Json,
    /// YAML document with a comment header
    Yaml,
    /// Category and account breakdown rows
    Csv,
}

/// Arguments of the calculate command
#[derive(Args, Debug, Default)]
pub struct CalculateArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also list the expenses behind the totals, largest first
    #[arg(short, long)]
    pub details: bool,

    /// Restrict the detail list to these categories (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,
}

/// Handle the calculate command
pub fn handle_calculate_command(
    session: &mut BudgetSession,
    settings: &Settings,
    args: CalculateArgs,
) -> SmartBudgetResult<()> {
    let savings_rate = session.savings_rate;
    let results = ExpenseService::new(session).calculate().clone();
    let symbol = settings.currency_symbol.as_str();

    let mut writer = open_output(args.output.as_deref())?;
    let io_err = |e: std::io::Error| SmartBudgetError::Export(e.to_string());

    match args.format {
        ReportFormat::Text => {
            write!(writer, "{}", format_results(&results, savings_rate, symbol)).map_err(io_err)?;
            if args.details || !args.categories.is_empty() {
                let (lines, total) = expense_details(&session.expenses, &args.categories);
                writeln!(writer).map_err(io_err)?;
                write!(
                    writer,
                    "{}",
                    format_expense_details(&lines, total, &args.categories, symbol)
                )
                .map_err(io_err)?;
            }
        }
        ReportFormat::Json => export_results_json(&results, savings_rate, &mut writer)?,
        ReportFormat::Yaml => export_results_yaml(&results, savings_rate, &mut writer)?,
        ReportFormat::Csv => export_results_csv(&results, &mut writer)?,
    }
    writer.flush().map_err(io_err)?;

    if let Some(path) = &args.output {
        println!("Results written to: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_calculate_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("results.json");

        let mut session = BudgetSession::default();
        session.income = "2000".into();
        session.expenses[0].amount = "500".into();

        let args = CalculateArgs {
            format: ReportFormat::Json,
            output: Some(output.clone()),
            ..CalculateArgs::default()
        };
        handle_calculate_command(&mut session, &Settings::default(), args).unwrap();

        assert!(session.show_results);
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["results"]["remainingBalance"], 1100.0);
    }

    #[test]
    fn test_text_details_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("results.txt");

        let mut session = BudgetSession::default();
        session.income = "2000".into();
        session.expenses[0].amount = "500".into();
        session.expenses[1].amount = "120".into();

        let args = CalculateArgs {
            output: Some(output.clone()),
            categories: vec!["Food".into()],
            ..CalculateArgs::default()
        };
        handle_calculate_command(&mut session, &Settings::default(), args).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("Budget summary"));
        assert!(text.contains("Details: Food"));
        assert!(text.contains("Total: 120.00 €"));
    }
}
