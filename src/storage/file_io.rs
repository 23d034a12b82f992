//! File I/O utilities with atomic writes
//!
//! Full-file writes go to a sibling temp file which is synced and renamed
//! over the destination, so a crash leaves either the old or the new
//! contents in place.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::ExpenseError;

/// Sibling temp path used while replacing `path` (e.g. `budgets.json.tmp`)
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the contents of `path` atomically
///
/// `write` receives a buffered writer over the temp file. If it fails, the
/// temp file is removed and the destination is left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), ExpenseError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ExpenseError>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename cannot cross filesystems
    let temp_path = temp_path_for(path);

    let result = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))
        })
        .and_then(|()| {
            fs::rename(&temp_path, path)
                .map_err(|e| ExpenseError::Storage(format!("Failed to rename temp file: {}", e)))
        });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

/// Write JSON to a file atomically, pretty-printed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)
            .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;
        writeln!(writer)
            .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))
    })
}

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ExpenseError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ExpenseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read JSON from a file, falling back to the default on any failure
///
/// Failures are logged, never returned.
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    read_json(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "unreadable file, using defaults");
        T::default()
    })
}
