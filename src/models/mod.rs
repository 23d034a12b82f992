//! Core data models for the expense log
//!
//! This module contains the data structures of the expense domain: ledger
//! records, money amounts, and monthly budget ceilings.

pub mod budget;
pub mod expense;
pub mod money;

pub use budget::{BudgetViolation, Budgets};
pub use expense::{parse_date, parse_month, Expense, NewExpense, DATE_FORMAT, DEFAULT_CATEGORY};
pub use money::{Money, MoneyParseError, MAX_CENTS};
