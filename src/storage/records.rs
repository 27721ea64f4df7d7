//! Record store backed by a CSV file
//!
//! The whole file is read into memory on open and rewritten after every
//! mutation. A record's position in the sequence is its only identity.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Record, HEADERS};
use crate::services::{self, BalanceSummary, RecordFilter};

use super::file_io::{read_csv, write_csv_atomic};

/// Outcome of reading the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// File was read; holds the number of records loaded
    Loaded(usize),
    /// File does not exist yet; in-memory records were left as they were
    Missing,
}

/// Ordered, persisted collection of ledger records
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store for `path` without touching disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Create a store for `path` and load it
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<(Self, LoadStatus)> {
        let mut store = Self::new(path);
        let status = store.load()?;
        Ok((store, status))
    }

    /// Create a store for the resolved ledger file and load it
    pub fn open_paths(paths: &LedgerPaths) -> LedgerResult<(Self, LoadStatus)> {
        Self::open(paths.data_file())
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload records from disk
    ///
    /// A missing file is not an error: the current records are kept and
    /// `LoadStatus::Missing` is returned so the caller can tell the user.
    pub fn load(&mut self) -> LedgerResult<LoadStatus> {
        match read_csv::<Record, _>(&self.path)? {
            Some(records) => {
                debug!(path = %self.path.display(), count = records.len(), "loaded records");
                self.records = records;
                Ok(LoadStatus::Loaded(self.records.len()))
            }
            None => {
                info!(path = %self.path.display(), "ledger file not found");
                Ok(LoadStatus::Missing)
            }
        }
    }

    /// Rewrite the backing file with the header and every record
    pub fn save(&self) -> LedgerResult<()> {
        write_csv_atomic(&self.path, &HEADERS, &self.records)?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved records");
        Ok(())
    }

    /// Append a record stamped with the current local time and persist
    pub fn add(
        &mut self,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<&Record> {
        self.push(Record::new(category, amount, description))
    }

    /// Append a prebuilt record and persist
    ///
    /// If the save fails the record is removed again, so memory matches disk.
    pub fn push(&mut self, record: Record) -> LedgerResult<&Record> {
        debug!(date = %record.date, category = %record.category, "adding record");
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }

        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Overwrite category, amount and description of the record at `index`
    ///
    /// `index` is zero-based. Out of range leaves memory and disk untouched;
    /// a failed save restores the previous values in memory.
    pub fn edit(
        &mut self,
        index: usize,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<&Record> {
        let len = self.records.len();
        let Some(record) = self.records.get_mut(index) else {
            warn!(index, len, "rejected edit of nonexistent record");
            return Err(LedgerError::InvalidIndex { index, len });
        };

        let previous = record.clone();
        record.update(category, amount, description);
        debug!(index, "edited record");
        if let Err(e) = self.save() {
            self.records[index] = previous;
            return Err(e);
        }

        Ok(&self.records[index])
    }

    /// Income, expense and balance totals
    pub fn balance(&self) -> LedgerResult<BalanceSummary> {
        services::compute_balance(&self.records)
    }

    /// Records matching every criterion in `filter`, in ledger order
    pub fn search(&self, filter: &RecordFilter) -> LedgerResult<Vec<Record>> {
        services::search(&self.records, filter)
    }

    /// 1-based numbered view of every record, for display
    pub fn list(&self) -> impl Iterator<Item = (usize, &Record)> + '_ {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    /// All records in ledger order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
