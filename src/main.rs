use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_report_command,
    BudgetCommands, ExpenseCommands,
};
use expense_cli::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_cli::config::settings::Settings;
use expense_cli::logging::init_tracing;
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense log with monthly category budgets",
    long_about = "Record dated, categorized expenses in a CSV ledger, browse and \
                  filter them, and get a warning when a category goes over its \
                  monthly budget."
)]
struct Cli {
    /// Directory holding the ledger, budgets and settings
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show spending per category against budgets for a month
    Report {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Copy the ledger file to another location
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report { month }) => {
            handle_report_command(&storage, &settings, month.as_deref())?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&storage, &output)?;
        }
        Some(Commands::Config) => {
            println!("Expense Log Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default category:   {}", settings.default_category);
            println!("  Currency symbol:    {:?}", settings.currency_symbol);
            println!("  Budget warnings:    {}", settings.warn_on_budget_exceeded);
        }
        None => {
            println!("expenses - Personal expense log");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
