//! Service layer for the expense log
//!
//! The service layer provides the logic on top of the storage layer:
//! validating input, filtering and totalling records, and evaluating budgets.

pub mod budget;
pub mod expense;
pub mod query;

pub use budget::{check_budget, month_summary, CategorySummary};
pub use expense::{AddOutcome, ExpenseService};
pub use query::{filter, total_for_category_month, ExpenseFilter};
