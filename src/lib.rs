//! saldo - Terminal-based single-user personal finance ledger
//!
//! This library provides the core functionality for the saldo ledger
//! application. It records deposits and withdrawals in a local SQLite
//! database, keeps a running balance, and renders the history as a table
//! and a balance-over-time chart in the terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions)
//! - `storage`: SQLite ledger store
//! - `services`: Balance engine (business logic layer)
//! - `display`: Terminal table formatting
//! - `cli`: Subcommand handlers
//! - `tui`: Interactive terminal interface

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{SaldoError, SaldoResult};
