//! Transaction model
//!
//! A transaction is one immutable row of the ledger: the opening balance or
//! a single deposit/withdrawal movement, together with the running balance
//! that resulted from it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use super::money::Money;

/// Date column format, zero-padded so lexical order matches chronological order
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time column format, zero-padded so lexical order matches chronological order
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// The kind of a ledger row
///
/// Persisted as its human-readable label in the `type` column; semantically
/// a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// The synthetic first row establishing the initial account value
    OpeningBalance,
    /// An inflow movement
    Deposit,
    /// An outflow movement
    Withdrawal,
}

impl TransactionKind {
    /// The label stored in the `type` column
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpeningBalance => "Opening Balance",
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }

    /// Parse a stored label back into a kind
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Opening Balance" => Some(Self::OpeningBalance),
            "Deposit" => Some(Self::Deposit),
            "Withdrawal" => Some(Self::Withdrawal),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A deposit or withdrawal, i.e. a signed change applied to the balance
///
/// The opening balance is deliberately not a movement: it can only be
/// recorded once, through a separate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// The transaction kind this movement is recorded as
    pub fn transaction_kind(&self) -> TransactionKind {
        match self {
            Self::Deposit => TransactionKind::Deposit,
            Self::Withdrawal => TransactionKind::Withdrawal,
        }
    }

    /// Apply this movement's magnitude to a balance
    pub fn apply(&self, balance: Money, amount: Money) -> Money {
        match self {
            Self::Deposit => balance + amount,
            Self::Withdrawal => balance - amount,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.transaction_kind())
    }
}

/// A single immutable ledger row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Row id, assigned by the store on insert, never reused
    pub id: i64,

    /// Kind of row (opening balance, deposit, withdrawal)
    pub kind: TransactionKind,

    /// Non-negative magnitude of the movement; for the opening row this is
    /// the starting value itself, not a delta
    pub amount: Money,

    /// Calendar date at insertion, local timezone
    pub date: NaiveDate,

    /// Wall-clock time at insertion, local timezone
    pub time: NaiveTime,

    /// Account balance immediately after this row is applied
    pub balance: Money,
}

impl Transaction {
    /// Combined date and time of this row
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Date formatted for the `date` column
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Time formatted for the `time` column
    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in [
            TransactionKind::OpeningBalance,
            TransactionKind::Deposit,
            TransactionKind::Withdrawal,
        ] {
            assert_eq!(TransactionKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(TransactionKind::from_label("Transfer"), None);
    }

    #[test]
    fn test_movement_apply() {
        let balance = Money::from_cents(100_000);
        let amount = Money::from_cents(25_000);

        assert_eq!(
            MovementKind::Deposit.apply(balance, amount),
            Money::from_cents(125_000)
        );
        assert_eq!(
            MovementKind::Withdrawal.apply(balance, amount),
            Money::from_cents(75_000)
        );
    }

    #[test]
    fn test_timestamp_formatting() {
        let txn = Transaction {
            id: 1,
            kind: TransactionKind::Deposit,
            amount: Money::from_cents(500),
            date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            time: NaiveTime::from_hms_opt(9, 5, 3).unwrap(),
            balance: Money::from_cents(500),
        };

        assert_eq!(txn.date_str(), "2025-03-07");
        assert_eq!(txn.time_str(), "09:05:03");
        assert_eq!(txn.timestamp().to_string(), "2025-03-07 09:05:03");
    }
}
