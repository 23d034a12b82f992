//! CSV-backed expense ledger
//!
//! The ledger is a flat `date,category,amount,description` file. Rows that
//! do not parse are skipped on read rather than reported, so one damaged
//! line never hides the rest of the ledger.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Expense, Money, DATE_FORMAT};

use super::file_io::write_atomic;
use super::RecordStore;

/// Header row of the ledger file
pub const LEDGER_HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// Why a stored row was left out of a read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSkip {
    /// The CSV reader could not decode the row
    Unreadable(String),
    BadDate(String),
    BadAmount(String),
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    date: usize,
    category: usize,
    amount: usize,
    description: usize,
}

impl Columns {
    /// Locate columns by header name, falling back to the standard order
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str, fallback: usize| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .unwrap_or(fallback)
        };
        Self {
            date: find("date", 0),
            category: find("category", 1),
            amount: find("amount", 2),
            description: find("description", 3),
        }
    }
}

/// Lenient parse of one stored row
fn parse_row(record: &StringRecord, columns: Columns) -> Result<Expense, RowSkip> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let date = parse_date(field(columns.date))
        .map_err(|_| RowSkip::BadDate(field(columns.date).to_string()))?;
    let amount = Money::parse(field(columns.amount))
        .map_err(|_| RowSkip::BadAmount(field(columns.amount).to_string()))?;

    Ok(Expense {
        date,
        category: field(columns.category).to_string(),
        amount,
        description: field(columns.description).to_string(),
    })
}

fn to_row(expense: &Expense) -> [String; 4] {
    [
        expense.date.format(DATE_FORMAT).to_string(),
        expense.category.clone(),
        expense.amount.to_string(),
        expense.description.clone(),
    ]
}

/// Write a header plus one row per expense
pub(crate) fn write_ledger<W: Write>(writer: W, expenses: &[Expense]) -> ExpenseResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(LEDGER_HEADER)?;
    for expense in expenses {
        writer.write_record(to_row(expense))?;
    }
    writer.flush()?;
    Ok(())
}

/// Expense ledger stored as a CSV file
#[derive(Debug, Clone)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty ledger (header only) if none exists
    ///
    /// Returns whether a file was created.
    pub fn ensure_exists(&self) -> ExpenseResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        write_atomic(&self.path, |w| write_ledger(w, &[]))?;
        info!(path = %self.path.display(), "created empty ledger");
        Ok(true)
    }

    /// Whether `other` resolves to the ledger file, following symlinks
    fn is_same_file(&self, other: &Path) -> bool {
        match (fs::canonicalize(&self.path), fs::canonicalize(other)) {
            (Ok(ours), Ok(theirs)) => ours == theirs,
            _ => false,
        }
    }

    fn is_missing_or_empty(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true)
    }
}

impl RecordStore for CsvLedger {
    fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let columns = Columns::from_headers(reader.headers()?);

        let mut expenses = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let parsed = match result {
                Ok(record) => parse_row(&record, columns),
                Err(e) => Err(RowSkip::Unreadable(e.to_string())),
            };

            match parsed {
                Ok(expense) => expenses.push(expense),
                Err(skip) => debug!(row = index + 1, ?skip, "skipping ledger row"),
            }
        }

        Ok(expenses)
    }

    fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        let needs_header = self.is_missing_or_empty();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(LEDGER_HEADER)?;
        }
        writer.write_record(to_row(expense))?;
        writer.flush()?;

        info!(
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            "appended expense"
        );
        Ok(())
    }

    fn rewrite(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_atomic(&self.path, |w| write_ledger(w, expenses))?;
        info!(rows = expenses.len(), "rewrote ledger");
        Ok(())
    }

    fn export_to(&self, dest: &Path) -> ExpenseResult<u64> {
        if self.is_same_file(dest) {
            return Err(ExpenseError::Export(format!(
                "{} is the ledger itself",
                dest.display()
            )));
        }
        fs::copy(&self.path, dest).map_err(|e| {
            ExpenseError::Export(format!("Failed to copy ledger to {}: {}", dest.display(), e))
        })
    }
}
