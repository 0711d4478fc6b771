//! Growth simulation CLI command

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::open_output;
use crate::config::settings::Settings;
use crate::display::{format_growth_summary, format_growth_table};
use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::export::{export_growth_csv, export_growth_json};
use crate::services::{simulate_growth, GrowthInputs};

/// Output format for growth projections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ProjectionFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Arguments of the simulate command; omitted values come from the settings
#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    /// Starting capital
    #[arg(long)]
    pub initial: Option<f64>,

    /// Contribution per month
    #[arg(long)]
    pub monthly: Option<f64>,

    /// Annual return in percent
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Number of years to project
    #[arg(long)]
    pub years: Option<u32>,

    #[arg(short, long, value_enum, default_value_t = ProjectionFormat::Text)]
    pub format: ProjectionFormat,

    /// Write the projection to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SimulateArgs {
    /// Merge the given flags over the configured defaults
    pub fn inputs(&self, defaults: &GrowthInputs) -> GrowthInputs {
        GrowthInputs {
            initial_capital: self.initial.unwrap_or(defaults.initial_capital),
            monthly_contribution: self.monthly.unwrap_or(defaults.monthly_contribution),
            annual_rate_percent: self.rate.unwrap_or(defaults.annual_rate_percent),
            duration_years: self.years.unwrap_or(defaults.duration_years),
        }
    }
}

/// Handle the simulate command
pub fn handle_simulate_command(settings: &Settings, args: SimulateArgs) -> SmartBudgetResult<()> {
    let inputs = args.inputs(&settings.growth);
    inputs.validate()?;

    let years = simulate_growth(&inputs);
    let symbol = settings.currency_symbol.as_str();

    let mut writer = open_output(args.output.as_deref())?;
    let io_err = |e: std::io::Error| SmartBudgetError::Export(e.to_string());

    match args.format {
        ProjectionFormat::Text => {
            writeln!(writer, "{}", format_growth_table(&years, symbol)).map_err(io_err)?;
            writeln!(writer).map_err(io_err)?;
            write!(writer, "{}", format_growth_summary(&inputs, &years, symbol)).map_err(io_err)?;
        }
        ProjectionFormat::Json => export_growth_json(&inputs, &years, &mut writer)?,
        ProjectionFormat::Csv => export_growth_csv(&years, &mut writer)?,
    }
    writer.flush().map_err(io_err)?;

    if let Some(path) = &args.output {
        println!("Projection written to: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_defaults() {
        let args = SimulateArgs {
            monthly: Some(250.0),
            years: Some(3),
            ..SimulateArgs::default()
        };
        let inputs = args.inputs(&GrowthInputs::default());

        assert_eq!(inputs.initial_capital, 1000.0);
        assert_eq!(inputs.monthly_contribution, 250.0);
        assert_eq!(inputs.annual_rate_percent, 7.0);
        assert_eq!(inputs.duration_years, 3);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let args = SimulateArgs {
            years: Some(0),
            ..SimulateArgs::default()
        };
        let err = handle_simulate_command(&Settings::default(), args).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_csv_projection_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("growth.csv");
        let args = SimulateArgs {
            years: Some(1),
            format: ProjectionFormat::Csv,
            output: Some(output.clone()),
            ..SimulateArgs::default()
        };
        handle_simulate_command(&Settings::default(), args).unwrap();

        let csv_str = std::fs::read_to_string(&output).unwrap();
        assert!(csv_str.ends_with("1,2354,154,2200\n"));
    }
}
