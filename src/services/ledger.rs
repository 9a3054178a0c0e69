//! Balance engine
//!
//! Turns a requested deposit/withdrawal into a correctly-balanced ledger
//! row, and derives the views (current balance, history, chart points) from
//! the store.
//!
//! Empty-store policy: an empty ledger has balance 0 on every path, for
//! movements and chart rendering alike.

use chrono::{Local, NaiveDateTime};

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, MovementKind, Transaction, TransactionKind};
use crate::storage::{LedgerStore, NewTransaction};

/// Presentation layer capability the engine depends on
///
/// Decouples the engine from any particular input widget: a prompter can
/// ask the user for a decimal amount and show a warning, nothing more.
pub trait Prompter {
    /// Ask for the initial account value; `None` means the user declined
    fn request_opening_balance(&mut self) -> SaldoResult<Option<Money>>;

    /// Ask for a deposit/withdrawal amount; `None` means the user declined
    fn request_amount(&mut self, kind: MovementKind) -> SaldoResult<Option<Money>>;

    /// Show a non-fatal warning (e.g. an invalid amount)
    fn warn(&mut self, message: &str);
}

/// One point of the balance-over-time chart
///
/// The engine generates these; the view just renders them.
#[derive(Debug, Clone, PartialEq)]
pub struct BalancePoint {
    /// Point label: "Start" for the anchor, "date time" for transactions
    pub label: String,
    /// Balance at this point
    pub balance: Money,
}

/// Business logic over the ledger store
pub struct LedgerService<'a> {
    store: &'a LedgerStore,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// First-run initialization
    ///
    /// If the ledger is empty, requests an opening balance through the
    /// prompter and records it. Declining leaves the ledger empty, which is
    /// treated as balance 0 everywhere.
    pub fn initialize(&self, prompter: &mut dyn Prompter) -> SaldoResult<()> {
        if !self.store.is_empty()? {
            return Ok(());
        }

        match prompter.request_opening_balance()? {
            Some(amount) => match self.record_opening_balance(amount) {
                Ok(_) => Ok(()),
                Err(SaldoError::Validation(msg)) => {
                    prompter.warn(&msg);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            None => Ok(()),
        }
    }

    /// Record the opening balance row
    ///
    /// Only valid on an empty ledger, so the opening row is always the one
    /// with the smallest id. The amount column of the opening row holds the
    /// starting value itself, not a delta.
    pub fn record_opening_balance(&self, amount: Money) -> SaldoResult<Transaction> {
        self.record_opening_balance_at(amount, Local::now().naive_local())
    }

    /// Record the opening balance with an explicit timestamp
    pub fn record_opening_balance_at(
        &self,
        amount: Money,
        at: NaiveDateTime,
    ) -> SaldoResult<Transaction> {
        if amount.is_negative() {
            return Err(SaldoError::Validation(
                "Opening balance cannot be negative".into(),
            ));
        }
        if !self.store.is_empty()? {
            return Err(SaldoError::Validation(
                "An opening balance has already been recorded".into(),
            ));
        }

        self.store.append(NewTransaction {
            kind: TransactionKind::OpeningBalance,
            amount,
            date: at.date(),
            time: at.time(),
            balance: amount,
        })
    }

    /// Record a deposit or withdrawal
    ///
    /// Rejects non-positive amounts with a validation error and performs no
    /// write. Otherwise reads the latest balance by id (0 when the ledger
    /// is empty), applies the movement, and appends the new row stamped
    /// with the current local time.
    pub fn record_movement(&self, kind: MovementKind, amount: Money) -> SaldoResult<Transaction> {
        self.record_movement_at(kind, amount, Local::now().naive_local())
    }

    /// Record a movement with an explicit timestamp
    pub fn record_movement_at(
        &self,
        kind: MovementKind,
        amount: Money,
        at: NaiveDateTime,
    ) -> SaldoResult<Transaction> {
        if !amount.is_positive() {
            return Err(SaldoError::Validation(
                "Amount must be greater than 0".into(),
            ));
        }

        let current = self
            .store
            .latest_by_id()?
            .map(|txn| txn.balance)
            .unwrap_or_else(Money::zero);
        let new_balance = kind.apply(current, amount);

        self.store.append(NewTransaction {
            kind: kind.transaction_kind(),
            amount,
            date: at.date(),
            time: at.time(),
            balance: new_balance,
        })
    }

    /// Prompt for a movement amount and record it
    ///
    /// Drives the full request/validate/append cycle behind a prompter;
    /// validation failures become warnings, not errors. Returns the new row
    /// if one was written.
    pub fn record_movement_prompted(
        &self,
        kind: MovementKind,
        prompter: &mut dyn Prompter,
    ) -> SaldoResult<Option<Transaction>> {
        let Some(amount) = prompter.request_amount(kind)? else {
            return Ok(None);
        };

        match self.record_movement(kind, amount) {
            Ok(txn) => Ok(Some(txn)),
            Err(SaldoError::Validation(msg)) => {
                prompter.warn(&msg);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// The current account balance (0 for an empty ledger)
    pub fn current_balance(&self) -> SaldoResult<Money> {
        Ok(self
            .store
            .latest_by_id()?
            .map(|txn| txn.balance)
            .unwrap_or_else(Money::zero))
    }

    /// The full transaction history, ordered by `(date, time)` ascending
    pub fn history(&self) -> SaldoResult<Vec<Transaction>> {
        self.store.all()
    }

    /// The balance-over-time sequence for the chart view
    ///
    /// Anchored at the first-by-id row's balance (0 when empty) under the
    /// label "Start", followed by one point per transaction in display
    /// order.
    pub fn balance_history(&self) -> SaldoResult<Vec<BalancePoint>> {
        let anchor = self
            .store
            .first_by_id()?
            .map(|txn| txn.balance)
            .unwrap_or_else(Money::zero);

        let mut points = vec![BalancePoint {
            label: "Start".to_string(),
            balance: anchor,
        }];

        for txn in self.store.all()? {
            points.push(BalancePoint {
                label: format!("{} {}", txn.date_str(), txn.time_str()),
                balance: txn.balance,
            });
        }

        Ok(points)
    }
}
