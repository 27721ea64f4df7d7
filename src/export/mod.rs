//! Export module for finledger
//!
//! Provides machine-readable JSON output of ledger records.

pub mod json;

pub use json::{export_ledger_json, export_records_json, ExportMetadata, LedgerExport};
