//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, budgets and month summaries
//! for terminal display. Everything here returns a `String`; printing is left
//! to the CLI.

pub mod budget;
pub mod expense;

pub use budget::{format_budget_list, format_budget_warning, format_month_summary};
pub use expense::{format_delete_prompt, format_expense_list, format_expense_row};
