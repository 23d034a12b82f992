//! Storage layer for the expense log
//!
//! The ledger and the budget mapping sit behind two narrow traits so the
//! query and budget logic never depend on how records are persisted. The
//! default backings are a CSV file and a JSON file in the data directory.

pub mod budgets;
pub mod file_io;
pub mod init;
pub mod ledger;

use std::io::Write;
use std::path::Path;

pub use budgets::JsonBudgetStore;
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use ledger::{CsvLedger, RowSkip, LEDGER_HEADER};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::{Budgets, Expense};

/// Persistent sequence of expense records
pub trait RecordStore {
    /// Every well-formed record, in storage order
    fn read_all(&self) -> ExpenseResult<Vec<Expense>>;

    /// Add one record at the end; existing records are untouched
    fn append(&self, expense: &Expense) -> ExpenseResult<()>;

    /// Replace the whole ledger with `expenses`
    fn rewrite(&self, expenses: &[Expense]) -> ExpenseResult<()>;

    /// Remove every record identical to `target`, returning how many went
    ///
    /// The ledger is only rewritten when something matched.
    fn delete_matching(&self, target: &Expense) -> ExpenseResult<usize> {
        let mut expenses = self.read_all()?;
        let before = expenses.len();
        expenses.retain(|e| !e.same_as(target));
        let removed = before - expenses.len();

        if removed > 0 {
            self.rewrite(&expenses)?;
        }
        Ok(removed)
    }

    /// Write the ledger to `dest` in its file format, returning bytes written
    fn export_to(&self, dest: &Path) -> ExpenseResult<u64> {
        let expenses = self.read_all()?;
        let mut buffer = Vec::new();
        ledger::write_ledger(&mut buffer, &expenses)?;
        write_atomic(dest, |w| {
            w.write_all(&buffer)?;
            Ok(())
        })?;
        Ok(buffer.len() as u64)
    }
}

/// Persistent category -> monthly ceiling mapping
pub trait BudgetStore {
    /// The stored mapping; empty when missing or unreadable
    fn load(&self) -> Budgets;

    /// Replace the stored mapping
    fn save(&self, budgets: &Budgets) -> ExpenseResult<()>;
}

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    pub ledger: Box<dyn RecordStore>,
    pub budgets: Box<dyn BudgetStore>,
}

impl Storage {
    /// Open the file-backed stores, creating any missing files
    pub fn new(paths: &ExpensePaths) -> ExpenseResult<Self> {
        initialize_storage(paths)?;

        Ok(Self::with_stores(
            CsvLedger::new(paths.ledger_file()),
            JsonBudgetStore::new(paths.budgets_file()),
        ))
    }

    /// Use alternative backings for the ledger and budgets
    pub fn with_stores(
        ledger: impl RecordStore + 'static,
        budgets: impl BudgetStore + 'static,
    ) -> Self {
        Self {
            ledger: Box::new(ledger),
            budgets: Box::new(budgets),
        }
    }
}
