//! Ledger record model
//!
//! A record is one income or expense entry. Every field is kept as text,
//! exactly as it appears on disk; amounts are parsed on demand.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Category label counted as income when computing the balance
pub const INCOME_CATEGORY: &str = "доход";

/// Category label counted as expense when computing the balance
pub const EXPENSE_CATEGORY: &str = "расход";

/// strftime format of the `date` field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// strftime format accepted by the date search filter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names, in on-disk order
pub const HEADERS: [&str; 4] = ["date", "category", "amount", "description"];

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS` local time
    pub date: String,
    pub category: String,
    /// Decimal amount as entered; not validated
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn new(
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::stamped(Local::now(), category, amount, description)
    }

    /// Create a record stamped with the given instant
    pub fn stamped<Tz: TimeZone>(
        at: DateTime<Tz>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self::with_date(
            at.format(TIMESTAMP_FORMAT).to_string(),
            category,
            amount,
            description,
        )
    }

    /// Create a record with a preformatted timestamp
    pub fn with_date(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// The date portion of the timestamp (text before the first whitespace)
    pub fn day(&self) -> &str {
        self.date.split_whitespace().next().unwrap_or("")
    }

    /// Parse the stored amount as a floating-point number
    pub fn parsed_amount(&self) -> LedgerResult<f64> {
        parse_amount(&self.amount)
    }

    pub fn is_income(&self) -> bool {
        self.category == INCOME_CATEGORY
    }

    pub fn is_expense(&self) -> bool {
        self.category == EXPENSE_CATEGORY
    }

    /// Replace the mutable fields; the timestamp never changes
    pub fn update(
        &mut self,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.category = category.into();
        self.amount = amount.into();
        self.description = description.into();
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Category: {}, Amount: {}, Description: {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// Parse amount text as `f64`, ignoring surrounding whitespace
pub fn parse_amount(s: &str) -> LedgerResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| LedgerError::invalid_amount(s))
}
