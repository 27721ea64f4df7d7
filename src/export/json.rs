//! JSON Export functionality
//!
//! Renders records, or the whole ledger with metadata, as JSON.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::models::Record;
use crate::storage::RecordStore;

/// Whole-ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Every record, in ledger order
    pub records: Vec<Record>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub record_count: usize,

    /// Earliest record timestamp
    pub earliest_record: Option<String>,

    /// Latest record timestamp
    pub latest_record: Option<String>,
}

impl LedgerExport {
    /// Snapshot the store
    pub fn from_store(store: &RecordStore) -> Self {
        let records = store.records().to_vec();

        // Timestamps are fixed-width, so text order is chronological
        let earliest_record = records.iter().map(|r| &r.date).min().cloned();
        let latest_record = records.iter().map(|r| &r.date).max().cloned();

        let metadata = ExportMetadata {
            record_count: records.len(),
            earliest_record,
            latest_record,
        };

        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            metadata,
        }
    }
}

/// Write a list of records as a JSON array
pub fn export_records_json<W: Write>(
    records: &[Record],
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, records)?;
    } else {
        serde_json::to_writer(&mut *writer, records)?;
    }
    writeln!(writer)?;

    Ok(())
}

/// Export the full ledger to JSON
pub fn export_ledger_json<W: Write>(
    store: &RecordStore,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;

    Ok(())
}
