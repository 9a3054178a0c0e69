//! Display formatting for terminal output
//!
//! Formats the ledger history and balance summary for the CLI commands.
//! The TUI has its own ratatui rendering under `crate::tui`.

pub mod history;

pub use history::{format_balance_summary, format_history_table};
