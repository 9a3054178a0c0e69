//! SQLite-backed ledger store
//!
//! Persists the transaction sequence in a local database file. Amounts and
//! balances are stored as integer cents; dates and times as zero-padded
//! text so the `ORDER BY (date, time)` used for display matches
//! chronological order.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, Row};

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, Transaction, TransactionKind, DATE_FORMAT, TIME_FORMAT};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        amount INTEGER NOT NULL,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        balance INTEGER NOT NULL
    )
";

/// A row to be inserted; the id is assigned by the store
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub balance: Money,
}

/// Durable append-only store of ledger transactions
pub struct LedgerStore {
    conn: Connection,
}

impl LedgerStore {
    /// Open (or create) the ledger database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> SaldoResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            SaldoError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::with_connection(conn)
    }

    /// Open an in-memory ledger database (used by tests)
    pub fn open_in_memory() -> SaldoResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> SaldoResult<Self> {
        conn.execute(SCHEMA, [])
            .map_err(|e| SaldoError::Storage(format!("Failed to create schema: {}", e)))?;
        Ok(Self { conn })
    }

    /// Number of rows in the ledger
    pub fn count(&self) -> SaldoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))?;
        Ok(count as u64)
    }

    /// Check whether the ledger has no rows
    pub fn is_empty(&self) -> SaldoResult<bool> {
        Ok(self.count()? == 0)
    }

    /// Insert a new row and return it with its assigned id
    ///
    /// No balance arithmetic is validated here; the balance engine supplies
    /// an already-correct running balance.
    pub fn append(&self, new: NewTransaction) -> SaldoResult<Transaction> {
        self.conn.execute(
            "INSERT INTO transactions (type, amount, date, time, balance)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                new.kind.label(),
                new.amount.cents(),
                new.date.format(DATE_FORMAT).to_string(),
                new.time.format(TIME_FORMAT).to_string(),
                new.balance.cents(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(Transaction {
            id,
            kind: new.kind,
            amount: new.amount,
            date: new.date,
            time: new.time,
            balance: new.balance,
        })
    }

    /// All rows ordered by `(date, time)` ascending
    ///
    /// Reads fresh from the database on every call; nothing is cached.
    pub fn all(&self) -> SaldoResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, type, amount, date, time, balance FROM transactions
             ORDER BY date ASC, time ASC",
        )?;
        let rows = stmt.query_map([], row_to_transaction)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(SaldoError::from)
    }

    /// The most recently inserted row (maximum id), if any
    ///
    /// This is the row whose balance seeds the next movement.
    pub fn latest_by_id(&self) -> SaldoResult<Option<Transaction>> {
        self.query_single(
            "SELECT id, type, amount, date, time, balance FROM transactions
             ORDER BY id DESC LIMIT 1",
        )
    }

    /// The first inserted row (minimum id), if any
    ///
    /// Anchors the starting point of the balance chart.
    pub fn first_by_id(&self) -> SaldoResult<Option<Transaction>> {
        self.query_single(
            "SELECT id, type, amount, date, time, balance FROM transactions
             ORDER BY id ASC LIMIT 1",
        )
    }

    fn query_single(&self, sql: &str) -> SaldoResult<Option<Transaction>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query_map([], row_to_transaction)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }
}

/// Map a database row to a Transaction
fn row_to_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let label: String = row.get(1)?;
    let kind = TransactionKind::from_label(&label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown transaction type: {}", label).into(),
        )
    })?;

    let date_str: String = row.get(3)?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, e.into())
    })?;

    let time_str: String = row.get(4)?;
    let time = NaiveTime::parse_from_str(&time_str, TIME_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, e.into())
    })?;

    Ok(Transaction {
        id: row.get(0)?,
        kind,
        amount: Money::from_cents(row.get(2)?),
        date,
        time,
        balance: Money::from_cents(row.get(5)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_row(
        kind: TransactionKind,
        amount: i64,
        date: (i32, u32, u32),
        time: (u32, u32, u32),
        balance: i64,
    ) -> NewTransaction {
        NewTransaction {
            kind,
            amount: Money::from_cents(amount),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(time.0, time.1, time.2).unwrap(),
            balance: Money::from_cents(balance),
        }
    }

    #[test]
    fn test_empty_store() {
        let store = LedgerStore::open_in_memory().unwrap();

        assert!(store.is_empty().unwrap());
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.all().unwrap().is_empty());
        assert!(store.latest_by_id().unwrap().is_none());
        assert!(store.first_by_id().unwrap().is_none());
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let store = LedgerStore::open_in_memory().unwrap();

        let first = store
            .append(new_row(
                TransactionKind::OpeningBalance,
                100_000,
                (2025, 1, 1),
                (8, 0, 0),
                100_000,
            ))
            .unwrap();
        let second = store
            .append(new_row(
                TransactionKind::Deposit,
                25_000,
                (2025, 1, 2),
                (9, 0, 0),
                125_000,
            ))
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_all_ordered_by_date_time_not_insertion() {
        let store = LedgerStore::open_in_memory().unwrap();

        // Inserted out of chronological order
        store
            .append(new_row(
                TransactionKind::Deposit,
                100,
                (2025, 6, 2),
                (12, 0, 0),
                200,
            ))
            .unwrap();
        store
            .append(new_row(
                TransactionKind::OpeningBalance,
                100,
                (2025, 6, 1),
                (8, 0, 0),
                100,
            ))
            .unwrap();
        store
            .append(new_row(
                TransactionKind::Deposit,
                100,
                (2025, 6, 2),
                (9, 30, 0),
                300,
            ))
            .unwrap();

        let all = store.all().unwrap();
        let timestamps: Vec<_> = all.iter().map(|t| t.timestamp()).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
        assert_eq!(all[0].kind, TransactionKind::OpeningBalance);
    }

    #[test]
    fn test_all_is_idempotent() {
        let store = LedgerStore::open_in_memory().unwrap();
        store
            .append(new_row(
                TransactionKind::OpeningBalance,
                100_000,
                (2025, 1, 1),
                (8, 0, 0),
                100_000,
            ))
            .unwrap();

        assert_eq!(store.all().unwrap(), store.all().unwrap());
    }

    #[test]
    fn test_latest_and_first_by_id() {
        let store = LedgerStore::open_in_memory().unwrap();

        // Chronologically newest row inserted first: by-id lookups must not
        // follow (date, time) order.
        store
            .append(new_row(
                TransactionKind::Deposit,
                500,
                (2025, 12, 31),
                (23, 59, 59),
                1500,
            ))
            .unwrap();
        store
            .append(new_row(
                TransactionKind::Withdrawal,
                200,
                (2025, 1, 1),
                (0, 0, 1),
                1300,
            ))
            .unwrap();

        let first = store.first_by_id().unwrap().unwrap();
        let latest = store.latest_by_id().unwrap().unwrap();
        assert_eq!(first.kind, TransactionKind::Deposit);
        assert_eq!(latest.kind, TransactionKind::Withdrawal);
        assert_eq!(latest.balance, Money::from_cents(1300));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.db");

        {
            let store = LedgerStore::open(&path).unwrap();
            store
                .append(new_row(
                    TransactionKind::OpeningBalance,
                    860_000,
                    (2025, 2, 2),
                    (10, 0, 0),
                    860_000,
                ))
                .unwrap();
        }

        let store = LedgerStore::open(&path).unwrap();
        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].balance, Money::from_cents(860_000));
    }
}
