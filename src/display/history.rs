//! History table formatting
//!
//! Renders the ledger as a table: kind, amount, date, time, running
//! balance. Columns mirror the persisted schema.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Money, Transaction};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl HistoryRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            kind: txn.kind.label().to_string(),
            amount: txn.amount.format_with_symbol(symbol),
            date: txn.date_str(),
            time: txn.time_str(),
            balance: txn.balance.format_with_symbol(symbol),
        }
    }
}

/// Format the full history as a table
pub fn format_history_table(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let rows: Vec<HistoryRow> = transactions
        .iter()
        .map(|txn| HistoryRow::new(txn, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::single(1), Alignment::right())
        .modify(Columns::single(4), Alignment::right());
    table.to_string()
}

/// Format the current balance as a one-line summary
pub fn format_balance_summary(balance: Money, symbol: &str) -> String {
    format!("Current balance: {}", balance.format_with_symbol(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::{NaiveDate, NaiveTime};

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 1,
                kind: TransactionKind::OpeningBalance,
                amount: Money::from_cents(100_000),
                date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                balance: Money::from_cents(100_000),
            },
            Transaction {
                id: 2,
                kind: TransactionKind::Deposit,
                amount: Money::from_cents(25_000),
                date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
                time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
                balance: Money::from_cents(125_000),
            },
        ]
    }

    #[test]
    fn test_history_table_contents() {
        let table = format_history_table(&sample_transactions(), "kr");

        assert!(table.contains("Opening Balance"));
        assert!(table.contains("1000.00 kr"));
        assert!(table.contains("1250.00 kr"));
        assert!(table.contains("2025-05-02"));
        assert!(table.contains("09:30:00"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history_table(&[], "kr"), "No transactions recorded.");
    }

    #[test]
    fn test_balance_summary() {
        assert_eq!(
            format_balance_summary(Money::from_cents(95_000), "kr"),
            "Current balance: 950.00 kr"
        );
    }
}
