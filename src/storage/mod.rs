//! Storage layer for saldo
//!
//! The entire durable state of the application is one SQLite table of
//! ledger rows. The store is append-only: rows are inserted once and never
//! updated or deleted.

pub mod ledger;

pub use ledger::{LedgerStore, NewTransaction};
