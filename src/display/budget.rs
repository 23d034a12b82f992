//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetViolation, Budgets};
use crate::services::CategorySummary;

/// Warning shown after an expense pushes its category over budget
pub fn format_budget_warning(violation: &BudgetViolation) -> String {
    format!("Warning: {}", violation)
}

/// Format the budget mapping, one category per line
pub fn format_budget_list(budgets: &Budgets, symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let width = budgets.iter().map(|(c, _)| c.chars().count()).max().unwrap_or(0);
    let mut output = String::new();
    for (category, limit) in budgets.iter() {
        output.push_str(&format!(
            "{:width$}  {:>12}\n",
            category,
            limit.format_with_symbol(symbol),
            width = width
        ));
    }
    output
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format a month overview as a table
pub fn format_month_summary(period: &str, rows: &[CategorySummary], symbol: &str) -> String {
    if rows.is_empty() {
        return format!("No expenses or budgets for {}.\n", period);
    }

    let dash = || "-".to_string();
    let table_rows: Vec<SummaryRow> = rows
        .iter()
        .map(|row| SummaryRow {
            category: row.category.clone(),
            spent: row.spent.format_with_symbol(symbol),
            budget: row
                .limit
                .map_or_else(dash, |limit| limit.format_with_symbol(symbol)),
            remaining: row
                .remaining()
                .map_or_else(dash, |left| left.format_with_symbol(symbol)),
            status: match row.limit {
                None => "",
                Some(_) if row.is_over_budget() => "OVER",
                Some(_) => "ok",
            },
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());

    format!("Spending for {}\n{}\n", period, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_budget_warning() {
        let violation = BudgetViolation {
            category: "Food".into(),
            year: 2024,
            month: 3,
            used: Money::from_cents(11000),
            limit: Money::from_cents(10000),
        };
        assert_eq!(
            format_budget_warning(&violation),
            "Warning: Category 'Food' exceeded budget for 2024-03: used 110.00 > budget 100.00"
        );
    }

    #[test]
    fn test_budget_list() {
        let budgets = Budgets::parse_entries("Food:100, Rent:800.5").unwrap();
        let output = format_budget_list(&budgets, "$");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Food"));
        assert!(lines[0].ends_with("$100.00"));
        assert!(lines[1].ends_with("$800.50"));

        assert_eq!(format_budget_list(&Budgets::new(), ""), "No budgets set.\n");
    }

    #[test]
    fn test_month_summary_table() {
        let rows = vec![
            CategorySummary {
                category: "Books".into(),
                spent: Money::from_cents(1500),
                limit: None,
            },
            CategorySummary {
                category: "Food".into(),
                spent: Money::from_cents(11000),
                limit: Some(Money::from_cents(10000)),
            },
        ];
        let output = format_month_summary("2024-03", &rows, "");

        assert!(output.starts_with("Spending for 2024-03\n"));
        assert!(output.contains("Category"));
        assert!(output.contains("Books"));
        assert!(output.contains("110.00"));
        assert!(output.contains("-10.00"));
        assert!(output.contains("OVER"));
    }

    #[test]
    fn test_empty_month_summary() {
        assert_eq!(
            format_month_summary("2024-03", &[], ""),
            "No expenses or budgets for 2024-03.\n"
        );
    }
}
