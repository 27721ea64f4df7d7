//! Configuration module for finledger
//!
//! Resolves where the ledger lives on disk. There is no settings file; the
//! only configuration is the backing CSV path.

pub mod paths;

pub use paths::{LedgerPaths, DEFAULT_DATA_FILE, DATA_FILE_ENV};
