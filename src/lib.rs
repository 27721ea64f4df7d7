//! finledger - personal finance ledger backed by a CSV file
//!
//! Records income and expense entries, edits them by position, computes a
//! running balance and searches with simple filters.
//!
//! # Architecture
//!
//! - `config`: ledger file path resolution
//! - `error`: custom error types
//! - `models`: the `Record` type and category constants
//! - `storage`: CSV file I/O and the `RecordStore`
//! - `services`: balance and search logic
//! - `display`: terminal formatting
//! - `export`: JSON output
//! - `cli`: clap subcommands and the interactive menu
//! - `logging`: tracing initialisation
//!
//! # Example
//!
//! ```rust,no_run
//! use finledger::services::RecordFilter;
//! use finledger::storage::RecordStore;
//!
//! let (mut store, _status) = RecordStore::open("finances.csv")?;
//! store.add("доход", "100", "salary")?;
//! let summary = store.balance()?;
//! let incomes = store.search(&RecordFilter::new().category("доход"))?;
//! # Ok::<(), finledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
