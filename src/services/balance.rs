//! Balance computation
//!
//! Sums income and expense records into a running balance.

use serde::Serialize;

use crate::error::LedgerResult;
use crate::models::Record;

/// Totals over the income and expense categories
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BalanceSummary {
    pub incomes: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl BalanceSummary {
    fn from_totals(incomes: f64, expenses: f64) -> Self {
        Self {
            incomes,
            expenses,
            balance: incomes - expenses,
        }
    }
}

/// Compute totals over `records`
///
/// Only records whose category is exactly `доход` or `расход` are parsed and
/// summed; any other category is skipped. An unparseable amount in a counted
/// record fails the whole computation.
pub fn compute_balance(records: &[Record]) -> LedgerResult<BalanceSummary> {
    let mut incomes = 0.0;
    let mut expenses = 0.0;

    for record in records {
        if record.is_income() {
            incomes += record.parsed_amount()?;
        } else if record.is_expense() {
            expenses += record.parsed_amount()?;
        }
    }

    Ok(BalanceSummary::from_totals(incomes, expenses))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, amount: &str) -> Record {
        Record::with_date("2024-01-01 12:00:00", category, amount, "")
    }

    #[test]
    fn test_balance_income_and_expense() {
        let records = vec![
            record("доход", "100"),
            record("расход", "40"),
            record("доход", "10"),
        ];

        let summary = compute_balance(&records).unwrap();
        assert_eq!(summary.incomes, 110.0);
        assert_eq!(summary.expenses, 40.0);
        assert_eq!(summary.balance, 70.0);
    }

    #[test]
    fn test_balance_empty() {
        assert_eq!(compute_balance(&[]).unwrap(), BalanceSummary::default());
    }

    #[test]
    fn test_other_categories_ignored() {
        let records = vec![
            record("доход", "50"),
            record("подарок", "1000"),
            record("Доход", "1000"),
            record(" расход", "1000"),
        ];

        let summary = compute_balance(&records).unwrap();
        assert_eq!(summary.incomes, 50.0);
        assert_eq!(summary.expenses, 0.0);
        assert_eq!(summary.balance, 50.0);
    }

    #[test]
    fn test_unparseable_counted_amount_fails() {
        let records = vec![record("доход", "100"), record("расход", "lots")];

        let err = compute_balance(&records).unwrap_err();
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_unparseable_uncounted_amount_is_skipped() {
        let records = vec![record("доход", "100"), record("misc", "lots")];

        let summary = compute_balance(&records).unwrap();
        assert_eq!(summary.balance, 100.0);
    }

    #[test]
    fn test_decimal_amounts() {
        let records = vec![record("доход", "10.5"), record("расход", "0.5")];

        let summary = compute_balance(&records).unwrap();
        assert_eq!(summary.balance, 10.0);
    }
}
