//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling
//! events. Ledger data is cached here and refreshed from the store after
//! every write, so the table and chart always reflect the persisted
//! ledger.

use crate::config::Settings;
use crate::error::SaldoResult;
use crate::models::{Money, MovementKind, Transaction};
use crate::services::{BalancePoint, LedgerService};

use super::widgets::input::TextInput;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    History,
    Chart,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// First-run opening balance entry
    OpeningBalance,
    /// Deposit/withdrawal amount entry
    Amount(MovementKind),
}

/// Main application state
pub struct App<'a> {
    /// The balance engine
    pub service: &'a LedgerService<'a>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Amount entry field for the active dialog
    pub amount_input: TextInput,

    /// Status message to display (warnings and confirmations)
    pub status_message: Option<String>,

    /// Cached transaction history, display order
    pub transactions: Vec<Transaction>,

    /// Cached chart points
    pub chart_points: Vec<BalancePoint>,

    /// Cached current balance
    pub balance: Money,
}

impl<'a> App<'a> {
    /// Create the app state, loading the ledger
    ///
    /// On an empty ledger the opening balance dialog is opened immediately,
    /// mirroring the first-run prompt of the CLI path.
    pub fn new(service: &'a LedgerService<'a>, settings: &'a Settings) -> SaldoResult<Self> {
        let mut app = Self {
            service,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::None,
            amount_input: TextInput::new(),
            status_message: None,
            transactions: Vec::new(),
            chart_points: Vec::new(),
            balance: Money::zero(),
        };
        app.refresh()?;

        if app.transactions.is_empty() {
            app.open_dialog(ActiveDialog::OpeningBalance);
        }

        Ok(app)
    }

    /// Re-read history, chart points and balance from the store
    pub fn refresh(&mut self) -> SaldoResult<()> {
        self.transactions = self.service.history()?;
        self.chart_points = self.service.balance_history()?;
        self.balance = self.service.current_balance()?;
        Ok(())
    }

    /// Open a dialog with a cleared input field
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.amount_input.clear();
        self.status_message = None;
        self.active_dialog = dialog;
    }

    /// Close the active dialog without recording anything
    pub fn close_dialog(&mut self) {
        self.amount_input.clear();
        self.active_dialog = ActiveDialog::None;
    }

    /// Whether a dialog is currently open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
