//! Budget CLI commands
//!
//! Implements CLI commands for setting and showing monthly budget ceilings.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_list;
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Replace all budgets (e.g., "Food:300, Rent:1200")
    Set {
        /// One or more category:amount pairs
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Show the current budgets
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        BudgetCommands::Set { entries } => {
            let budgets = service.set_budgets(&entries.join(","))?;
            if budgets.is_empty() {
                println!("Budgets cleared.");
            } else {
                println!("Budgets saved: {}", budgets.describe());
            }
        }

        BudgetCommands::Show => {
            print!(
                "{}",
                format_budget_list(&service.budgets(), &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::error::ExpenseError;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_joins_separate_entries() {
        let (_temp_dir, storage) = create_test_storage();
        handle_budget_command(
            &storage,
            &Settings::default(),
            BudgetCommands::Set {
                entries: vec!["Food:100".into(), "Rent: 800".into()],
            },
        )
        .unwrap();

        let budgets = storage.budgets.load();
        assert_eq!(budgets.limit_for("Food"), Some(Money::from_cents(10000)));
        assert_eq!(budgets.limit_for("Rent"), Some(Money::from_cents(80000)));
    }

    #[test]
    fn test_set_rejects_malformed_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let err = handle_budget_command(
            &storage,
            &Settings::default(),
            BudgetCommands::Set {
                entries: vec!["Food=100".into()],
            },
        )
        .unwrap_err();

        assert!(matches!(err, ExpenseError::InvalidBudgetFormat(_)));
        assert!(storage.budgets.load().is_empty());
    }
}
