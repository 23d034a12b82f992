//! expense-cli - Personal expense log for the terminal
//!
//! This library provides the core functionality for recording dated,
//! categorized expenses in a CSV ledger, browsing and filtering them, and
//! warning when a category goes over its monthly budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, budgets)
//! - `storage`: CSV ledger and JSON budget storage
//! - `services`: Queries, budget evaluation and expense workflows
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expenses` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::paths::ExpensePaths;
//! use expense_cli::models::NewExpense;
//! use expense_cli::services::ExpenseService;
//! use expense_cli::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let storage = Storage::new(&paths)?;
//! let outcome = ExpenseService::new(&storage)
//!     .add(&NewExpense::new("2024-03-01", "Food", "12.50", "lunch"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
