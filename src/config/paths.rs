//! Path management for the expense log
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `EXPENSE_CLI_DATA_DIR` environment variable
//! 2. The platform data directory (`~/.local/share/expense-cli` on Linux,
//!    `~/Library/Application Support/expense-cli` on macOS,
//!    `%APPDATA%\expense-cli\data` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_CLI_DATA_DIR";

/// Manages all paths used by the expense log
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from the environment, falling back to the platform data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the expense ledger (expenses.csv)
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Path to the budget ceilings (budgets.json)
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join("budgets.json")
    }

    /// Path to the settings file (config.json)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create data directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-cli")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine home directory".into()))
}
