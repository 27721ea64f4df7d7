//! Business logic layer
//!
//! Pure computations over the record sequence. The store delegates to these
//! so they can be tested without touching disk.

pub mod balance;
pub mod search;

pub use balance::{compute_balance, BalanceSummary};
pub use search::{search, RecordFilter};
