//! Expense display formatting
//!
//! Listing rows use the layout
//! `date  |  category  |  amount  |  description`, with the category cut or
//! padded to a fixed width so the columns line up.

use crate::models::{Expense, DATE_FORMAT};

const CATEGORY_WIDTH: usize = 18;
const AMOUNT_WIDTH: usize = 8;

/// Format a single expense as a listing row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{}  |  {}  |  {:>amount$}  |  {}",
        expense.date.format(DATE_FORMAT),
        fit(&expense.category, CATEGORY_WIDTH),
        expense.amount,
        expense.description,
        amount = AMOUNT_WIDTH
    )
}

/// Format expenses as a numbered listing, one row per line
///
/// Numbers start at 1 and are the positions `delete` accepts.
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let number_width = expenses.len().to_string().len();
    let mut output = String::new();
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:>width$}. {}\n",
            i + 1,
            format_expense_row(expense),
            width = number_width
        ));
    }
    output
}

/// Summary line shown before an expense is deleted
pub fn format_delete_prompt(expense: &Expense) -> String {
    format!(
        "Delete expense: {} | {} | {}?",
        expense.date.format(DATE_FORMAT),
        expense.category,
        expense.amount
    )
}

/// Truncate or pad `s` to exactly `width` characters
fn fit(s: &str, width: usize) -> String {
    let cut: String = s.chars().take(width).collect();
    format!("{:width$}", cut, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Money};

    fn expense(category: &str, cents: i64, description: &str) -> Expense {
        Expense::new(
            parse_date("2024-03-01").unwrap(),
            category,
            Money::from_cents(cents),
            description,
        )
    }

    #[test]
    fn test_format_row() {
        let row = format_expense_row(&expense("Food", 5000, "lunch"));
        assert_eq!(row, "2024-03-01  |  Food                |     50.00  |  lunch");
    }

    #[test]
    fn test_long_category_is_cut() {
        let row = format_expense_row(&expense("Entertainment and leisure", 123456, ""));
        assert_eq!(row, "2024-03-01  |  Entertainment and   |   1234.56  |  ");
    }

    #[test]
    fn test_multibyte_category() {
        let row = format_expense_row(&expense("Café-Restaurants-Bars", -250, "refund"));
        assert!(row.contains("|  Café-Restaurants-B  |"));
        assert!(row.contains("|     -2.50  |"));
    }

    #[test]
    fn test_numbered_list() {
        let list = format_expense_list(&[expense("Food", 5000, "lunch"), expense("Rent", 80000, "")]);
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. 2024-03-01  |  Food"));
        assert!(lines[1].starts_with("2. 2024-03-01  |  Rent"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(
            format_delete_prompt(&expense("Food", 5000, "lunch")),
            "Delete expense: 2024-03-01 | Food | 50.00?"
        );
    }
}
