//! Service layer for saldo
//!
//! The balance engine sits between the presentation layer and the ledger
//! store: it validates requested movements, derives the new running balance
//! from the previous row, and appends the result.

pub mod ledger;

pub use ledger::{BalancePoint, LedgerService, Prompter};
