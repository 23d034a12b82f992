//! Custom error types for the expense log
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense log operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A user-supplied date did not match the ledger date format
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// A user-supplied month did not match `YYYY-MM`
    #[error("Invalid month '{input}': expected YYYY-MM")]
    InvalidMonth { input: String },

    /// A user-supplied amount was not a number
    #[error("Invalid amount '{0}': must be a number (e.g. 123.45)")]
    InvalidAmount(String),

    /// A budget entry string was not a list of `category:amount` pairs
    #[error("Invalid budget format '{0}': use category:amount pairs separated by commas")]
    InvalidBudgetFormat(String),

    /// A budget entry had a non-numeric ceiling
    #[error("Budget for '{category}' must be a number, got '{value}'")]
    InvalidBudgetAmount { category: String, value: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl ExpenseError {
    /// Create an invalid date error for the given raw input
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create a "not found" error for a listing position
    pub fn selection_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: format!("#{}", index),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by rejected user input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::InvalidMonth { .. }
                | Self::InvalidAmount(_)
                | Self::InvalidBudgetFormat(_)
                | Self::InvalidBudgetAmount { .. }
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense log operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
