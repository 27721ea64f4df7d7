//! Storage layer for finledger
//!
//! Provides the CSV-backed record store with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod records;

pub use file_io::{read_csv, write_csv_atomic};
pub use records::{LoadStatus, RecordStore};
