//! Budget evaluation
//!
//! Decides whether a category has gone over its monthly ceiling, and builds
//! the per-category overview for a month.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{BudgetViolation, Budgets, Expense, Money};

use super::query::total_for_category_month;

/// Check `category`'s spend for the month containing `date` against its ceiling
///
/// `records` must already include the expense that triggered the check. The
/// budget is looked up by exact key while the month total matches categories
/// case-insensitively, so a `"food"` ceiling does not apply to expenses
/// entered as `"Food"`. Spending exactly the ceiling is not a violation.
pub fn check_budget(
    budgets: &Budgets,
    category: &str,
    date: NaiveDate,
    records: &[Expense],
) -> Option<BudgetViolation> {
    let limit = budgets.limit_for(category)?;
    let (year, month) = (date.year(), date.month());
    let used = total_for_category_month(records, category, year, month);

    debug!(category, year, month, %used, %limit, "checked budget");

    (used > limit).then(|| BudgetViolation {
        category: category.to_string(),
        year,
        month,
        used,
        limit,
    })
}

/// One row of a month overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub spent: Money,
    pub limit: Option<Money>,
}

impl CategorySummary {
    pub fn is_over_budget(&self) -> bool {
        self.limit.is_some_and(|limit| self.spent > limit)
    }

    /// Ceiling minus spend, if the category has a ceiling
    pub fn remaining(&self) -> Option<Money> {
        self.limit.map(|limit| limit - self.spent)
    }
}

/// Spend per category for one month, alongside any ceilings
///
/// Every budgeted category gets a row (spent may be zero). Each expense is
/// counted in exactly one row: the budget spelled exactly like its category,
/// else the first budget matching it ignoring case. Categories with spending
/// but no ceiling are grouped case-insensitively under the first spelling
/// seen. Rows are ordered by category name, ignoring case.
pub fn month_summary(
    records: &[Expense],
    budgets: &Budgets,
    year: i32,
    month: u32,
) -> Vec<CategorySummary> {
    let mut rows: Vec<CategorySummary> = budgets
        .iter()
        .map(|(category, limit)| CategorySummary {
            category: category.to_string(),
            spent: Money::zero(),
            limit: Some(limit),
        })
        .collect();
    let budgeted = rows.len();

    for expense in records.iter().filter(|e| e.falls_in_month(year, month)) {
        let slot = rows[..budgeted]
            .iter()
            .position(|r| r.category == expense.category)
            .or_else(|| rows.iter().position(|r| expense.category_matches(&r.category)));

        match slot {
            Some(i) => rows[i].spent += expense.amount,
            None => rows.push(CategorySummary {
                category: expense.category.clone(),
                spent: expense.amount,
                limit: None,
            }),
        }
    }

    rows.sort_by_key(|r| r.category.to_lowercase());
    rows
}
