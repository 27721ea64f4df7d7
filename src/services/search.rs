//! Filtered record search
//!
//! A linear, order-preserving scan over the ledger. Every filter that is set
//! must match; unset filters match everything.

use crate::error::LedgerResult;
use crate::models::{parse_amount, Record};

/// Search criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    /// Exact category match
    pub category: Option<String>,
    /// `YYYY-MM-DD`, compared against the date portion of the timestamp
    pub date: Option<String>,
    /// Numeric equality after parsing both sides
    pub amount: Option<String>,
}

impl RecordFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by calendar date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Filter by amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Build a filter from optional inputs, treating blank text as unset
    pub fn from_inputs(
        category: Option<String>,
        date: Option<String>,
        amount: Option<String>,
    ) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            category: non_blank(category),
            date: non_blank(date),
            amount: non_blank(amount),
        }
    }
}

/// Return the records matching every criterion in `filter`, in ledger order
///
/// When an amount filter is present every record's amount is parsed, so a
/// single malformed amount fails the search. The filter amount itself is only
/// parsed once there is a record to compare it with.
pub fn search(records: &[Record], filter: &RecordFilter) -> LedgerResult<Vec<Record>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let wanted_amount = filter.amount.as_deref().map(parse_amount).transpose()?;

    let mut results = Vec::new();
    for record in records {
        let amount_match = match wanted_amount {
            Some(wanted) => record.parsed_amount()? == wanted,
            None => true,
        };
        let category_match = filter
            .category
            .as_deref()
            .map_or(true, |c| record.category == c);
        let date_match = filter.date.as_deref().map_or(true, |d| record.day() == d);

        if amount_match && category_match && date_match {
            results.push(record.clone());
        }
    }

    Ok(results)
}
