//! Expense service
//!
//! The workflows the presentation layer drives: adding an expense (with the
//! budget check that follows), browsing, deleting, managing budgets, and
//! exporting. Every call re-reads the stores; nothing is cached.

use std::path::Path;

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetViolation, Budgets, Expense, Money, NewExpense, DEFAULT_CATEGORY};
use crate::storage::Storage;

use super::budget::{check_budget, month_summary, CategorySummary};
use super::query::{filter, total_for_category_month, ExpenseFilter};

/// Result of adding an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The record as written to the ledger
    pub expense: Expense,
    /// Set when the expense pushed its category over the monthly ceiling
    pub violation: Option<BudgetViolation>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    default_category: String,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Category used when an expense is added without one
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Validate and record a new expense, then check its category's budget
    ///
    /// Invalid input is rejected before anything is written.
    pub fn add(&self, input: &NewExpense) -> ExpenseResult<AddOutcome> {
        let expense = input.validate(&self.default_category)?;
        self.storage.ledger.append(&expense)?;

        let budgets = self.storage.budgets.load();
        let violation = if budgets.limit_for(&expense.category).is_some() {
            let records = self.storage.ledger.read_all()?;
            check_budget(&budgets, &expense.category, expense.date, &records)
        } else {
            None
        };

        if let Some(v) = &violation {
            info!(
                category = %v.category,
                period = %v.period_label(),
                used = %v.used,
                limit = %v.limit,
                "budget exceeded"
            );
        }

        Ok(AddOutcome { expense, violation })
    }

    /// Expenses matching `criteria`, most recent first
    pub fn list(&self, criteria: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let records = self.storage.ledger.read_all()?;
        Ok(filter(&records, criteria))
    }

    /// The expense at 1-based `position` in the filtered listing
    pub fn select(&self, criteria: &ExpenseFilter, position: usize) -> ExpenseResult<Expense> {
        let listing = self.list(criteria)?;
        position
            .checked_sub(1)
            .and_then(|i| listing.into_iter().nth(i))
            .ok_or_else(|| ExpenseError::selection_not_found(position))
    }

    /// Delete `expense` from the ledger
    ///
    /// Records are matched on all four fields, so identical duplicates are
    /// removed together. Returns how many rows were removed.
    pub fn delete(&self, expense: &Expense) -> ExpenseResult<usize> {
        let removed = self.storage.ledger.delete_matching(expense)?;
        info!(removed, date = %expense.date, category = %expense.category, "deleted expense");
        Ok(removed)
    }

    /// Current budget ceilings
    pub fn budgets(&self) -> Budgets {
        self.storage.budgets.load()
    }

    /// Replace all budget ceilings from a `category:amount, ...` entry string
    ///
    /// Nothing is saved if any entry is malformed.
    pub fn set_budgets(&self, entries: &str) -> ExpenseResult<Budgets> {
        let budgets = Budgets::parse_entries(entries)?;
        self.storage.budgets.save(&budgets)?;
        Ok(budgets)
    }

    /// Total spent in `category` (case-insensitive) during one month
    pub fn total(&self, category: &str, year: i32, month: u32) -> ExpenseResult<Money> {
        let records = self.storage.ledger.read_all()?;
        Ok(total_for_category_month(&records, category, year, month))
    }

    /// Per-category spend and ceilings for one month
    pub fn month_summary(&self, year: i32, month: u32) -> ExpenseResult<Vec<CategorySummary>> {
        let records = self.storage.ledger.read_all()?;
        Ok(month_summary(&records, &self.budgets(), year, month))
    }

    /// Copy the ledger to `dest`, returning the number of bytes written
    pub fn export(&self, dest: &Path) -> ExpenseResult<u64> {
        let bytes = self.storage.ledger.export_to(dest)?;
        info!(dest = %dest.display(), bytes, "exported ledger");
        Ok(bytes)
    }
}
