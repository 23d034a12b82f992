//! Expense CLI commands
//!
//! Implements CLI commands for recording, browsing and deleting expenses.

use chrono::{Datelike, Local};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_budget_warning, format_delete_prompt, format_expense_list, format_expense_row,
};
use crate::error::ExpenseResult;
use crate::models::{parse_month, NewExpense, DATE_FORMAT};
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50", or "-5" for a refund)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name (defaults to the configured default category)
        #[arg(short, long, default_value = "")]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },
    /// List expenses, most recent first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Delete the expense at a position in the listing
    Delete {
        /// Position as shown by `list` with the same filters
        position: usize,
        #[command(flatten)]
        filter: FilterArgs,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show the total spent in a category for one month
    Total {
        /// Category name (case-insensitive)
        category: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Listing filters shared by `list` and `delete`
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Only categories containing this text (case-insensitive)
    #[arg(short = 'C', long = "category")]
    pub category: Option<String>,
}

impl FilterArgs {
    fn to_filter(&self) -> ExpenseResult<ExpenseFilter> {
        ExpenseFilter::parse(
            self.from.as_deref(),
            self.to.as_deref(),
            self.category.as_deref(),
        )
    }
}

/// Resolve an optional `YYYY-MM` argument, falling back to the current month
pub(crate) fn month_or_current(month: Option<&str>) -> ExpenseResult<(i32, u32)> {
    match month {
        Some(m) => parse_month(m),
        None => {
            let today = Local::now().date_naive();
            Ok((today.year(), today.month()))
        }
    }
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage).with_default_category(&settings.default_category);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
            let outcome = service.add(&NewExpense::new(date, category, amount, description))?;

            println!("Added: {}", format_expense_row(&outcome.expense));

            if let Some(violation) = outcome.violation {
                if settings.warn_on_budget_exceeded {
                    println!();
                    println!("{}", format_budget_warning(&violation));
                }
            }
        }

        ExpenseCommands::List { filter } => {
            let expenses = service.list(&filter.to_filter()?)?;
            print!("{}", format_expense_list(&expenses));
        }

        ExpenseCommands::Delete {
            position,
            filter,
            force,
        } => {
            let expense = service.select(&filter.to_filter()?, position)?;

            if !force {
                println!("{}", format_delete_prompt(&expense));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let removed = service.delete(&expense)?;
            if removed > 1 {
                println!(
                    "Deleted {} identical expenses: {}",
                    removed,
                    format_expense_row(&expense)
                );
            } else {
                println!("Deleted expense: {}", format_expense_row(&expense));
            }
        }

        ExpenseCommands::Total { category, month } => {
            let (year, month) = month_or_current(month.as_deref())?;
            let total = service.total(&category, year, month)?;
            println!(
                "{} {}-{:02}: {}",
                category,
                year,
                month,
                total.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
