//! CLI command for ledger export

use std::path::Path;

use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Handle the export command: copy the ledger to `output` unchanged
pub fn handle_export_command(storage: &Storage, output: &Path) -> ExpenseResult<()> {
    let bytes = ExpenseService::new(storage).export(output)?;
    println!("Exported {} bytes to {}", bytes, output.display());
    Ok(())
}
