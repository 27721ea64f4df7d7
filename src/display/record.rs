//! Record display formatting
//!
//! Formats records and balance totals for terminal output.

use crate::models::Record;
use crate::services::BalanceSummary;

/// Format a single numbered record row
pub fn format_record_row(number: usize, record: &Record) -> String {
    format!("{}. {}", number, record)
}

/// Format the numbered record list used when picking a record to edit
pub fn format_record_list<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Record)>,
{
    let mut output = String::new();

    for (number, record) in records {
        output.push_str(&format_record_row(number, record));
        output.push('\n');
    }

    if output.is_empty() {
        return "No records found.\n".to_string();
    }

    output
}

/// Format search results, or a notice when nothing matched
pub fn format_search_results(results: &[Record]) -> String {
    if results.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::from("Search results:\n");
    for record in results {
        output.push_str(&format!("  {}\n", record));
    }

    output
}

/// Format balance totals
pub fn format_balance(summary: &BalanceSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Current balance: {:.2}\n", summary.balance));
    output.push_str(&format!("Total income:    {:.2}\n", summary.incomes));
    output.push_str(&format!("Total expenses:  {:.2}\n", summary.expenses));
    output
}
