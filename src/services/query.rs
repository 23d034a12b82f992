//! Expense queries
//!
//! Filtering and month totals over a slice of records. Nothing here touches
//! storage; callers pass in whatever the record store returned.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{parse_date, Expense, Money};

/// Options for filtering expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Earliest date to include (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest date to include (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring the category must contain
    pub category_contains: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw user input; blank fields impose no constraint
    pub fn parse(
        start: Option<&str>,
        end: Option<&str>,
        category: Option<&str>,
    ) -> ExpenseResult<Self> {
        Ok(Self {
            start_date: non_blank(start).map(parse_date).transpose()?,
            end_date: non_blank(end).map(parse_date).transpose()?,
            category_contains: non_blank(category).map(str::to_string),
        })
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn category_contains(mut self, needle: impl Into<String>) -> Self {
        self.category_contains = Some(needle.into());
        self
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.category_contains.is_none()
    }

    fn admits(&self, expense: &Expense, needle: Option<&str>) -> bool {
        if self.start_date.is_some_and(|start| expense.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| expense.date > end) {
            return false;
        }
        needle.map_or(true, |n| expense.category_contains(n))
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Records matching `criteria`, most recent first
///
/// The sort is stable: records sharing a date keep their relative order.
pub fn filter(records: &[Expense], criteria: &ExpenseFilter) -> Vec<Expense> {
    let needle = criteria.category_contains.as_deref().map(str::to_lowercase);

    let mut matched: Vec<Expense> = records
        .iter()
        .filter(|e| criteria.admits(e, needle.as_deref()))
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

/// Sum of amounts for one category (case-insensitive) in one calendar month
pub fn total_for_category_month(
    records: &[Expense],
    category: &str,
    year: i32,
    month: u32,
) -> Money {
    records
        .iter()
        .filter(|e| e.category_matches(category) && e.falls_in_month(year, month))
        .map(|e| e.amount)
        .sum()
}
