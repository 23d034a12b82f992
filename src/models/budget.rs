//! Monthly budget ceilings per category
//!
//! A ceiling applies to every calendar month alike. Keys are stored exactly
//! as entered and looked up case-sensitively.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Mapping from category name to monthly ceiling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budgets(BTreeMap<String, Money>);

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse budget entries of the form `food:2000, rent:8000`
    ///
    /// Blank parts are skipped. Each part is split at its first `:`; the
    /// category is trimmed and the ceiling must be numeric. A later entry for
    /// the same category replaces an earlier one. Negative ceilings are
    /// accepted as entered.
    pub fn parse_entries(input: &str) -> ExpenseResult<Self> {
        let mut budgets = Self::new();

        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (category, value) = part
                .split_once(':')
                .ok_or_else(|| ExpenseError::InvalidBudgetFormat(part.to_string()))?;
            let category = category.trim();
            let value = value.trim();

            let limit = Money::parse(value).map_err(|_| ExpenseError::InvalidBudgetAmount {
                category: category.to_string(),
                value: value.to_string(),
            })?;

            budgets.set(category, limit);
        }

        Ok(budgets)
    }

    /// Ceiling for an exact (case-sensitive) category key
    pub fn limit_for(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    pub fn set(&mut self, category: impl Into<String>, limit: Money) {
        self.0.insert(category.into(), limit);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `category:amount` pairs, the same shape `parse_entries` reads
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(category, limit)| format!("{}:{}", category, limit))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<(String, Money)> for Budgets {
    fn from_iter<I: IntoIterator<Item = (String, Money)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A category's month-to-date spend has gone over its ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetViolation {
    pub category: String,
    pub year: i32,
    pub month: u32,
    pub used: Money,
    pub limit: Money,
}

impl BudgetViolation {
    /// Amount spent beyond the ceiling
    pub fn overage(&self) -> Money {
        self.used - self.limit
    }

    /// Month label in `YYYY-MM` form
    pub fn period_label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for BudgetViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category '{}' exceeded budget for {}: used {} > budget {}",
            self.category,
            self.period_label(),
            self.used,
            self.limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let budgets = Budgets::parse_entries("food:2000, rent : 8000.50 ,, ").unwrap();
        assert_eq!(budgets.len(), 2);
        assert_eq!(budgets.limit_for("food"), Some(Money::from_cents(200000)));
        assert_eq!(budgets.limit_for("rent"), Some(Money::from_cents(800050)));
    }

    #[test]
    fn test_parse_empty_input_clears() {
        assert!(Budgets::parse_entries("").unwrap().is_empty());
        assert!(Budgets::parse_entries(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_colon() {
        let err = Budgets::parse_entries("food:10, rent 800").unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidBudgetFormat(ref p) if p == "rent 800"));
    }

    #[test]
    fn test_parse_non_numeric_value() {
        let err = Budgets::parse_entries("food:lots").unwrap_err();
        assert!(matches!(
            err,
            ExpenseError::InvalidBudgetAmount { ref category, .. } if category == "food"
        ));
    }

    #[test]
    fn test_parse_splits_at_first_colon_and_keeps_negatives() {
        let err = Budgets::parse_entries("a:b:1").unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidBudgetAmount { ref value, .. } if value == "b:1"));

        let budgets = Budgets::parse_entries("refunds:-50, food:1, food:2").unwrap();
        assert_eq!(budgets.limit_for("refunds"), Some(Money::from_cents(-5000)));
        assert_eq!(budgets.limit_for("food"), Some(Money::from_cents(200)));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let budgets = Budgets::parse_entries("food:100").unwrap();
        assert!(budgets.limit_for("Food").is_none());
        assert!(budgets.limit_for("food").is_some());
    }

    #[test]
    fn test_describe_round_trips() {
        let budgets = Budgets::parse_entries("rent:8000, food:2000").unwrap();
        assert_eq!(budgets.describe(), "food:2000.00, rent:8000.00");
        assert_eq!(Budgets::parse_entries(&budgets.describe()).unwrap(), budgets);
    }

    #[test]
    fn test_json_shape() {
        let budgets = Budgets::parse_entries("Food:100").unwrap();
        assert_eq!(serde_json::to_string(&budgets).unwrap(), r#"{"Food":100.0}"#);

        let loaded: Budgets = serde_json::from_str(r#"{"Food": 100, "Rent": 8000.5}"#).unwrap();
        assert_eq!(loaded.limit_for("Rent"), Some(Money::from_cents(800050)));
    }

    #[test]
    fn test_violation_helpers() {
        let v = BudgetViolation {
            category: "Food".into(),
            year: 2024,
            month: 3,
            used: Money::from_cents(11000),
            limit: Money::from_cents(10000),
        };
        assert_eq!(v.overage(), Money::from_cents(1000));
        assert_eq!(v.period_label(), "2024-03");
        assert_eq!(
            v.to_string(),
            "Category 'Food' exceeded budget for 2024-03: used 110.00 > budget 100.00"
        );
    }
}
