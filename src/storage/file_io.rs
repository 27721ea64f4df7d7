//! File I/O utilities with atomic writes
//!
//! Provides CSV read/write helpers that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read all rows of a headed CSV file, or `None` if the file doesn't exist
///
/// Columns are matched to fields by header name.
pub fn read_csv<T, P>(path: P) -> Result<Option<Vec<T>>, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let rows = reader
        .deserialize::<T>()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| LedgerError::Csv(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(Some(rows))
}

/// Write rows as CSV atomically (write to temp, then rename)
///
/// The header row is always written, even when `rows` is empty.
pub fn write_csv_atomic<T, P>(path: P, headers: &[&str], rows: &[T]) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Io(format!("Failed to create temp file: {}", e)))?;

    // Header is written by hand so that an empty ledger still has one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let mut inner = writer
        .into_inner()
        .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e.error())))?;

    inner
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e)))?;

    inner
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))?;

    drop(inner);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Sibling temp path used while saving: `finances.csv` -> `finances.csv.tmp`
pub fn temp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    name.into()
}
