//! Expense record model
//!
//! An expense has no identifier of its own: two records are the same record
//! when all four fields match.

use chrono::{Datelike, NaiveDate};

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// The single date format used in the ledger and for user input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Category assigned when the user leaves the category blank
pub const DEFAULT_CATEGORY: &str = "Other";

/// Parse a date in the fixed ledger format
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ExpenseError::invalid_date(trimmed))
}

/// Parse a `YYYY-MM` month into its year and month number
pub fn parse_month(input: &str) -> ExpenseResult<(i32, u32)> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), DATE_FORMAT)
        .map(|d| (d.year(), d.month()))
        .map_err(|_| ExpenseError::InvalidMonth {
            input: trimmed.to_string(),
        })
}

/// A single dated, categorized expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub description: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Whether `other` is the same ledger entry (all four fields equal)
    pub fn same_as(&self, other: &Expense) -> bool {
        self.date == other.date
            && self.category == other.category
            && self.amount == other.amount
            && self.description == other.description
    }

    /// Case-insensitive category equality
    pub fn category_matches(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive category substring test; `needle` must already be lowercase
    pub fn category_contains(&self, needle: &str) -> bool {
        self.category.to_lowercase().contains(needle)
    }

    /// Whether the expense falls within the given calendar month
    pub fn falls_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// Raw expense fields as entered by the user, before validation
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl NewExpense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Validate the raw fields into an [`Expense`]
    ///
    /// Date is checked before amount, so a record with both wrong reports
    /// the date.
    pub fn validate(&self, default_category: &str) -> ExpenseResult<Expense> {
        let date = parse_date(&self.date)?;

        let amount_str = self.amount.trim();
        let amount = Money::parse(amount_str)
            .map_err(|_| ExpenseError::InvalidAmount(amount_str.to_string()))?;

        let category = match self.category.trim() {
            "" => default_category.to_string(),
            name => name.to_string(),
        };

        Ok(Expense {
            date,
            category,
            amount,
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_trims_and_defaults_category() {
        let input = NewExpense::new(" 2024-03-01 ", "   ", " 50 ", "  lunch ");
        let expense = input.validate(DEFAULT_CATEGORY).unwrap();

        assert_eq!(expense.date, date(2024, 3, 1));
        assert_eq!(expense.category, "Other");
        assert_eq!(expense.amount, Money::from_cents(5000));
        assert_eq!(expense.description, "lunch");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert_eq!(parse_month(" 1999-12 ").unwrap(), (1999, 12));

        for bad in ["2024-13", "2024", "03-2024", "2024-03-01", ""] {
            let err = parse_month(bad).unwrap_err();
            assert!(matches!(err, ExpenseError::InvalidMonth { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let err = NewExpense::new("03/01/2024", "Food", "1", "")
            .validate(DEFAULT_CATEGORY)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidDate { .. }));

        let err = NewExpense::new("2024-02-30", "Food", "1", "")
            .validate(DEFAULT_CATEGORY)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidDate { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_amount() {
        let err = NewExpense::new("2024-03-01", "Food", "twelve", "")
            .validate(DEFAULT_CATEGORY)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount(ref s) if s == "twelve"));
    }

    #[test]
    fn test_same_as_requires_all_fields() {
        let a = Expense::new(date(2024, 3, 1), "Food", Money::from_cents(5000), "lunch");
        let mut b = a.clone();
        assert!(a.same_as(&b));

        b.category = "food".into();
        assert!(!a.same_as(&b));

        let mut c = a.clone();
        c.amount = Money::from_cents(5001);
        assert!(!a.same_as(&c));
    }

    #[test]
    fn test_category_matching_ignores_case() {
        let e = Expense::new(date(2024, 3, 1), "Groceries", Money::zero(), "");
        assert!(e.category_matches("GROCERIES"));
        assert!(!e.category_matches("Grocery"));
        assert!(e.category_contains("cer"));
        assert!(!e.category_contains("xyz"));
    }

    #[test]
    fn test_falls_in_month() {
        let e = Expense::new(date(2024, 3, 31), "Food", Money::zero(), "");
        assert!(e.falls_in_month(2024, 3));
        assert!(!e.falls_in_month(2024, 4));
        assert!(!e.falls_in_month(2023, 3));
    }
}
