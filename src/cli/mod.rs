//! CLI command handlers
//!
//! This module bridges clap argument parsing and the interactive menu with
//! the record store.

pub mod menu;
pub mod record;

pub use menu::run_menu;
pub use record::{handle_record_command, index_from_number, validate_date, RecordCommands};
