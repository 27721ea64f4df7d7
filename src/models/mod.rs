//! Core data models for finledger

pub mod record;

pub use record::{
    parse_amount, Record, DATE_FORMAT, EXPENSE_CATEGORY, HEADERS, INCOME_CATEGORY,
    TIMESTAMP_FORMAT,
};
