//! Interactive menu
//!
//! A prompt loop offering balance, add, edit, search and exit. Operation
//! errors are reported and the loop continues; end of input exits.

use std::io::{BufRead, Write};

use crate::display::record::{format_balance, format_record_list, format_search_results};
use crate::error::LedgerResult;
use crate::services::RecordFilter;
use crate::storage::RecordStore;

use super::record::{index_from_number, validate_date};

const MENU: &str = "\n\
1. Show balance\n\
2. Add record\n\
3. Edit record\n\
4. Search records\n\
5. Exit\n";

const EDIT_NUMBER_PROMPT: &str = "Enter the record number to edit: ";
const SEARCH_CATEGORY_PROMPT: &str = "Enter category (доход/расход) or leave empty: ";
const SEARCH_DATE_PROMPT: &str = "Enter date (YYYY-MM-DD) or leave empty: ";
const SEARCH_AMOUNT_PROMPT: &str = "Enter amount or leave empty: ";

/// Run the menu until the user exits or input ends
pub fn run_menu<R, W>(store: &mut RecordStore, mut input: R, output: &mut W) -> LedgerResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, output, "Choose an option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => match store.balance() {
                Ok(summary) => write!(output, "{}", format_balance(&summary))?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            "2" => {
                let Some(fields) = prompt_fields(&mut input, output, "")? else {
                    break;
                };
                let (category, amount, description) = fields;
                match store.add(category, amount, description) {
                    Ok(_) => writeln!(output, "Record added.")?,
                    Err(e) => writeln!(output, "Error: {}", e)?,
                }
            }
            "3" => {
                write!(output, "{}", format_record_list(store.list()))?;
                let Some(number) = prompt(&mut input, output, EDIT_NUMBER_PROMPT)? else {
                    break;
                };
                let index = match number.trim().parse::<i64>() {
                    Ok(n) => index_from_number(n),
                    Err(_) => {
                        writeln!(output, "Error: '{}' is not a record number", number.trim())?;
                        continue;
                    }
                };
                let Some(fields) = prompt_fields(&mut input, output, "new ")? else {
                    break;
                };
                let (category, amount, description) = fields;
                match index.and_then(|i| store.edit(i, category, amount, description).map(|_| ())) {
                    Ok(()) => writeln!(output, "Record updated.")?,
                    Err(e) => writeln!(output, "Error: {}", e)?,
                }
            }
            "4" => {
                let Some(category) = prompt(&mut input, output, SEARCH_CATEGORY_PROMPT)? else {
                    break;
                };
                let Some(date) = prompt(&mut input, output, SEARCH_DATE_PROMPT)? else {
                    break;
                };
                let Some(amount) = prompt(&mut input, output, SEARCH_AMOUNT_PROMPT)? else {
                    break;
                };

                let filter = RecordFilter::from_inputs(Some(category), Some(date), Some(amount));
                if let Some(date) = &filter.date {
                    if validate_date(date).is_err() {
                        writeln!(output, "Invalid date format. Use YYYY-MM-DD.")?;
                        continue;
                    }
                }

                match store.search(&filter) {
                    Ok(results) => write!(output, "{}", format_search_results(&results))?,
                    Err(e) => writeln!(output, "Error: {}", e)?,
                }
            }
            "5" => break,
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

/// Ask for category, amount and description; `None` on end of input
fn prompt_fields<R, W>(
    input: &mut R,
    output: &mut W,
    qualifier: &str,
) -> LedgerResult<Option<(String, String, String)>>
where
    R: BufRead,
    W: Write,
{
    let category = prompt(
        input,
        output,
        &format!("Enter {}category (доход/расход): ", qualifier),
    )?;
    let amount = prompt(input, output, &format!("Enter {}amount: ", qualifier))?;
    let description = prompt(input, output, &format!("Enter {}description: ", qualifier))?;

    Ok(match (category, amount, description) {
        (Some(c), Some(a), Some(d)) => Some((c, a, d)),
        _ => None,
    })
}

/// Print `message` and read one line without its terminator
fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> LedgerResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, RecordStore) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::new(temp_dir.path().join("finances.csv"));
        store
            .push(Record::with_date("2024-01-01 09:00:00", "доход", "100", "salary"))
            .unwrap();
        store
            .push(Record::with_date("2024-01-02 18:30:00", "расход", "40", "groceries"))
            .unwrap();
        (temp_dir, store)
    }

    fn run(store: &mut RecordStore, script: &str) -> String {
        let mut output = Vec::new();
        run_menu(store, Cursor::new(script.as_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_balance_then_exit() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "1\n5\n");

        assert!(output.contains("Current balance: 60.00"));
        assert!(output.contains("Total income:    100.00"));
    }

    #[test]
    fn test_add_record() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "2\nдоход\n15\ngift, from grandma\n5\n");

        assert!(output.contains("Record added."));
        assert_eq!(store.len(), 3);
        let last = &store.records()[2];
        assert_eq!(last.category, "доход");
        assert_eq!(last.amount, "15");
        assert_eq!(last.description, "gift, from grandma");
    }

    #[test]
    fn test_edit_uses_one_based_number() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "3\n2\nрасход\n45\nmarket\n5\n");

        assert!(output.contains("1. Date: 2024-01-01 09:00:00"));
        assert!(output.contains("Record updated."));
        assert_eq!(store.records()[1].amount, "45");
        assert_eq!(store.records()[1].date, "2024-01-02 18:30:00");
    }

    #[test]
    fn test_edit_invalid_number_is_reported() {
        let (_temp_dir, mut store) = create_test_store();
        let before = store.records().to_vec();

        let output = run(&mut store, "3\n7\nдоход\n1\nx\n3\n0\nдоход\n1\nx\n3\nabc\n5\n");

        assert!(output.contains("Invalid record index 6"));
        assert!(output.contains("Record number must be 1 or greater"));
        assert!(output.contains("'abc' is not a record number"));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_search_with_blank_filters() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "4\n\n2024-01-02\n\n5\n");

        assert!(output.contains("Search results:"));
        assert!(output.contains("groceries"));
        assert!(!output.contains("salary"));
    }

    #[test]
    fn test_search_rejects_bad_date() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "4\n\n2024/01/02\n\n5\n");

        assert!(output.contains("Invalid date format. Use YYYY-MM-DD."));
        assert!(!output.contains("Search results:"));
    }

    #[test]
    fn test_search_no_matches() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "4\nдоход\n\n40\n5\n");

        assert!(output.contains("No records found."));
    }

    #[test]
    fn test_bad_amount_reported_and_loop_continues() {
        let (_temp_dir, mut store) = create_test_store();
        store.add("расход", "oops", "").unwrap();

        let output = run(&mut store, "1\n4\n\n\n40\n5\n");

        assert_eq!(output.matches("Invalid amount: 'oops'").count(), 2);
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run(&mut store, "9\n");

        assert!(output.contains("Invalid choice. Please try again."));
    }
}
