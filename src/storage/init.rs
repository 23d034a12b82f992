//! Storage initialization
//!
//! Handles first-run setup: the data directory, an empty ledger with its
//! header row, and an empty budget mapping.

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

use super::budgets::JsonBudgetStore;
use super::ledger::CsvLedger;

/// Create whatever backing files are missing; existing files are left alone
pub fn initialize_storage(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;
    CsvLedger::new(paths.ledger_file()).ensure_exists()?;
    JsonBudgetStore::new(paths.budgets_file()).ensure_exists()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("data"));

        initialize_storage(&paths).unwrap();

        let ledger = std::fs::read_to_string(paths.ledger_file()).unwrap();
        assert_eq!(ledger.trim_end(), "date,category,amount,description");
        let budgets = std::fs::read_to_string(paths.budgets_file()).unwrap();
        assert_eq!(budgets.trim(), "{}");
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let ledger = "date,category,amount,description\n2024-03-01,Food,50.00,lunch\n";
        std::fs::write(paths.ledger_file(), ledger).unwrap();
        std::fs::write(paths.budgets_file(), "garbage").unwrap();

        initialize_storage(&paths).unwrap();

        assert_eq!(std::fs::read_to_string(paths.ledger_file()).unwrap(), ledger);
        assert_eq!(std::fs::read_to_string(paths.budgets_file()).unwrap(), "garbage");
    }
}
