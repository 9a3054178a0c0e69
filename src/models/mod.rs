//! Core data models for saldo
//!
//! Contains the money type and the ledger transaction model.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{MovementKind, Transaction, TransactionKind, DATE_FORMAT, TIME_FORMAT};
