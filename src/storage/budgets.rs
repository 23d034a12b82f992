//! Budget ceiling repository for JSON storage
//!
//! Manages loading and saving the `category -> ceiling` mapping in
//! budgets.json. Loading fails open: an unreadable file counts as "no
//! budgets" and is replaced on the next save.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExpenseResult;
use crate::models::Budgets;

use super::file_io::{read_json_or_default, write_json_atomic};
use super::BudgetStore;

/// Budget ceilings stored as a pretty-printed JSON object
#[derive(Debug, Clone)]
pub struct JsonBudgetStore {
    path: PathBuf,
}

impl JsonBudgetStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty mapping (`{}`) if no budget file exists
    ///
    /// Returns whether a file was created.
    pub fn ensure_exists(&self) -> ExpenseResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        write_json_atomic(&self.path, &Budgets::new())?;
        info!(path = %self.path.display(), "created empty budget file");
        Ok(true)
    }
}

impl BudgetStore for JsonBudgetStore {
    fn load(&self) -> Budgets {
        read_json_or_default(&self.path)
    }

    fn save(&self, budgets: &Budgets) -> ExpenseResult<()> {
        write_json_atomic(&self.path, budgets)?;
        info!(categories = budgets.len(), "saved budgets");
        Ok(())
    }
}
