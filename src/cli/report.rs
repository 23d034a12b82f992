//! Report CLI command
//!
//! Prints a month's spending per category next to its budget.

use crate::config::settings::Settings;
use crate::display::format_month_summary;
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::expense::month_or_current;

/// Handle the report command for `month` (`YYYY-MM`, defaults to the current month)
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
) -> ExpenseResult<()> {
    let (year, month) = month_or_current(month)?;
    let rows = ExpenseService::new(storage).month_summary(year, month)?;

    print!(
        "{}",
        format_month_summary(
            &format!("{}-{:02}", year, month),
            &rows,
            &settings.currency_symbol
        )
    );
    Ok(())
}
