//! Terminal User Interface module
//!
//! Interactive interface for the ledger using ratatui: a history table
//! view, a balance-over-time chart view, and modal dialogs for amount
//! entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
