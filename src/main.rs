use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use smart_budget::cli::{
    handle_calculate_command, handle_expense_command, handle_import_command,
    handle_income_command, handle_savings_command, handle_simulate_command, CalculateArgs,
    ExpenseCommands, SimulateArgs,
};
use smart_budget::config::{paths::BudgetPaths, settings::Settings};
use smart_budget::error::SmartBudgetResult;
use smart_budget::logging::init_tracing;
use smart_budget::models::BudgetSession;
use smart_budget::services::ExpenseService;
use smart_budget::storage::open_session_store;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget calculator",
    long_about = "Smart Budget turns your income, your expense lines and a savings \
                  rate into a full monthly breakdown, and projects how a regular \
                  investment grows over time."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Set the monthly income
    Income {
        /// Main income, e.g. "2400" or "2 400,50"
        salary: String,

        /// Supplemental income
        #[arg(short, long)]
        supplement: Option<String>,
    },

    /// Set the savings rate in percent (0 to 50)
    Savings {
        rate: f64,
    },

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Replace all expenses with the rows of a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,

        /// Field delimiter (defaults to the configured one)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Compute and show the budget results
    #[command(alias = "calc")]
    Calculate(CalculateArgs),

    /// Project compound growth of a regular investment
    Simulate(SimulateArgs),

    /// Discard the saved session and start over
    Reset {
        /// Delete the session file instead of writing a fresh session
        #[arg(long)]
        purge: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Smart Budget at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  budget income 2400");
            println!("  budget expense add --name Rent --amount 850 --category Housing");
            println!("  budget calculate");
        }
        Some(Commands::Config) => {
            println!("Smart Budget Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no (run 'budget init')" }
            );
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Session file:     {}", paths.session_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Default savings rate: {}%", settings.default_savings_rate);
            println!("  CSV delimiter:        '{}'", settings.csv_delimiter);
            println!(
                "  Growth defaults:      {} initial, {} monthly, {}% for {} years",
                settings.growth.initial_capital,
                settings.growth.monthly_contribution,
                settings.growth.annual_rate_percent,
                settings.growth.duration_years
            );
        }
        Some(Commands::Income { salary, supplement }) => {
            with_session(&paths, &settings, |session| {
                handle_income_command(session, &settings, &salary, supplement.as_deref())
            })?;
        }
        Some(Commands::Savings { rate }) => {
            with_session(&paths, &settings, |session| handle_savings_command(session, rate))?;
        }
        Some(Commands::Expense(cmd)) => {
            with_session(&paths, &settings, |session| {
                handle_expense_command(session, &settings, cmd)
            })?;
        }
        Some(Commands::Import { file, delimiter }) => {
            with_session(&paths, &settings, |session| {
                handle_import_command(session, &settings, &file, delimiter)
            })?;
        }
        Some(Commands::Calculate(args)) => {
            with_session(&paths, &settings, |session| {
                handle_calculate_command(session, &settings, args)
            })?;
        }
        Some(Commands::Simulate(args)) => {
            handle_simulate_command(&settings, args)?;
        }
        Some(Commands::Reset { purge: true }) => {
            let store = open_session_store(&paths)?;
            if store.clear()? {
                println!("Session file deleted: {}", store.path().display());
            } else {
                println!("No saved session; nothing to delete.");
            }
        }
        Some(Commands::Reset { purge: false }) => {
            with_session(&paths, &settings, |session| {
                ExpenseService::new(session).reset(settings.default_savings_rate);
                println!("Session reset to defaults.");
                Ok(())
            })?;
        }
        None => {
            println!("Smart Budget - personal budget calculator");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}

/// Load the session, run `action` on it and save it if the action succeeded
fn with_session<F>(paths: &BudgetPaths, settings: &Settings, action: F) -> Result<()>
where
    F: FnOnce(&mut BudgetSession) -> SmartBudgetResult<()>,
{
    let store = open_session_store(paths)?;
    let mut session = store.load_or_default(settings.default_savings_rate);
    action(&mut session)?;
    store.save(&mut session)?;
    Ok(())
}
