//! Display formatting for terminal output

pub mod record;

pub use record::{format_balance, format_record_list, format_record_row, format_search_results};
