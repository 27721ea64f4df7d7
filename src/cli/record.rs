//! Record CLI commands
//!
//! One-shot subcommands over the record store.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::record::{format_balance, format_record_list, format_search_results};
use crate::error::{LedgerError, LedgerResult};
use crate::export::json::{export_ledger_json, export_records_json};
use crate::models::DATE_FORMAT;
use crate::services::RecordFilter;
use crate::storage::RecordStore;

/// Record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Show income, expense and balance totals
    Balance,
    /// Add a new record stamped with the current time
    Add {
        /// Category ("доход" for income, "расход" for expense)
        category: String,
        /// Amount (e.g., "100" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(default_value = "")]
        description: String,
    },
    /// Edit an existing record
    Edit {
        /// Record number as shown by `list` (starting at 1)
        #[arg(allow_hyphen_values = true)]
        number: i64,
        /// New category
        category: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// New description
        #[arg(default_value = "")]
        description: String,
    },
    /// Search records; every given filter must match
    Search {
        /// Exact category
        #[arg(short, long)]
        category: Option<String>,
        /// Calendar date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Amount, compared numerically
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all records with their numbers
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the whole ledger with metadata as JSON
    Export {
        /// Compact single-line output
        #[arg(long)]
        compact: bool,
    },
}

/// Handle a record command
pub fn handle_record_command(store: &mut RecordStore, cmd: RecordCommands) -> LedgerResult<()> {
    match cmd {
        RecordCommands::Balance => {
            let summary = store.balance()?;
            print!("{}", format_balance(&summary));
        }
        RecordCommands::Add {
            category,
            amount,
            description,
        } => {
            let record = store.add(category, amount, description)?;
            println!("Added record: {}", record);
        }
        RecordCommands::Edit {
            number,
            category,
            amount,
            description,
        } => {
            let index = index_from_number(number)?;
            let record = store.edit(index, category, amount, description)?;
            println!("Updated record {}: {}", number, record);
        }
        RecordCommands::Search {
            category,
            date,
            amount,
            json,
        } => {
            let filter = RecordFilter::from_inputs(category, date, amount);
            if let Some(date) = &filter.date {
                validate_date(date)?;
            }

            let results = store.search(&filter)?;
            if json {
                export_records_json(&results, &mut std::io::stdout().lock(), true)?;
            } else {
                print!("{}", format_search_results(&results));
            }
        }
        RecordCommands::List { json } => {
            if json {
                export_records_json(store.records(), &mut std::io::stdout().lock(), true)?;
            } else {
                print!("{}", format_record_list(store.list()));
            }
        }
        RecordCommands::Export { compact } => {
            export_ledger_json(store, &mut std::io::stdout().lock(), !compact)?;
        }
    }

    Ok(())
}

/// Convert a 1-based record number into a store index
pub fn index_from_number(number: i64) -> LedgerResult<usize> {
    if number < 1 {
        return Err(LedgerError::Validation(format!(
            "Record number must be 1 or greater, got {}",
            number
        )));
    }

    usize::try_from(number - 1)
        .map_err(|_| LedgerError::Validation(format!("Record number {} is too large", number)))
}

/// Check that a search date is `YYYY-MM-DD`
pub fn validate_date(date: &str) -> LedgerResult<()> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date
        ))
    })?;
    Ok(())
}
