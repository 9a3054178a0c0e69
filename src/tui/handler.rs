//! Key event handling for the TUI
//!
//! Keys either drive the active dialog or switch views and open dialogs.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::error::SaldoError;
use crate::models::{Money, MovementKind};

use super::app::{ActiveDialog, ActiveView, App};

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows sends both press and release events
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key)?;
    } else {
        handle_normal_key(app, key)?;
    }

    Ok(())
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('h') | KeyCode::Char('1') => {
            app.active_view = ActiveView::History;
        }
        KeyCode::Char('g') | KeyCode::Char('2') => {
            app.active_view = ActiveView::Chart;
        }
        KeyCode::Tab => {
            app.active_view = match app.active_view {
                ActiveView::History => ActiveView::Chart,
                ActiveView::Chart => ActiveView::History,
            };
        }
        KeyCode::Char('d') => {
            app.open_dialog(ActiveDialog::Amount(MovementKind::Deposit));
        }
        KeyCode::Char('w') => {
            app.open_dialog(ActiveDialog::Amount(MovementKind::Withdrawal));
        }
        KeyCode::Char('r') => {
            app.refresh()?;
            app.set_status("Reloaded");
        }
        _ => {}
    }
    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            // Declining the opening balance leaves the ledger empty
            app.close_dialog();
        }
        KeyCode::Enter => {
            submit_dialog(app)?;
        }
        KeyCode::Backspace => {
            app.amount_input.backspace();
        }
        KeyCode::Left => {
            app.amount_input.move_left();
        }
        KeyCode::Right => {
            app.amount_input.move_right();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.amount_input.insert(c);
        }
        _ => {}
    }
    Ok(())
}

/// Parse the entered amount and record it through the balance engine
///
/// Validation failures close the dialog and surface as status-bar warnings;
/// storage failures propagate.
fn submit_dialog(app: &mut App) -> Result<()> {
    let dialog = app.active_dialog;
    let raw = app.amount_input.value().trim().to_string();

    if raw.is_empty() {
        app.close_dialog();
        return Ok(());
    }

    let amount = match Money::parse(&raw) {
        Ok(amount) => amount,
        Err(e) => {
            app.close_dialog();
            app.set_status(format!("Warning: {}", e));
            return Ok(());
        }
    };

    let result = match dialog {
        ActiveDialog::OpeningBalance => app.service.record_opening_balance(amount),
        ActiveDialog::Amount(kind) => app.service.record_movement(kind, amount),
        ActiveDialog::None => return Ok(()),
    };

    app.close_dialog();
    match result {
        Ok(txn) => {
            app.refresh()?;
            app.set_status(format!(
                "{} recorded. Balance: {}",
                txn.kind,
                txn.balance.format_with_symbol(&app.settings.currency_symbol)
            ));
        }
        Err(SaldoError::Validation(msg)) => {
            app.set_status(format!("Warning: {}", msg));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::LedgerService;
    use crate::storage::LedgerStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
    }

    fn type_amount(app: &mut App, amount: &str) {
        for c in amount.chars() {
            handle_key(app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(app, press(KeyCode::Enter)).unwrap();
    }

    #[test]
    fn test_opening_dialog_shown_on_empty_ledger() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();

        let app = App::new(&service, &settings).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::OpeningBalance);
    }

    #[test]
    fn test_full_session_flow() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();
        let mut app = App::new(&service, &settings).unwrap();

        // Opening balance 1000.00
        type_amount(&mut app, "1000.00");
        assert_eq!(app.balance, Money::from_cents(100_000));
        assert_eq!(app.transactions.len(), 1);

        // Deposit 250.00
        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Amount(MovementKind::Deposit)
        );
        type_amount(&mut app, "250.00");
        assert_eq!(app.balance, Money::from_cents(125_000));

        // Withdrawal 300.00
        handle_key(&mut app, press(KeyCode::Char('w'))).unwrap();
        type_amount(&mut app, "300.00");
        assert_eq!(app.balance, Money::from_cents(95_000));
        assert_eq!(app.transactions.len(), 3);
        assert_eq!(app.chart_points.len(), 4);
    }

    #[test]
    fn test_zero_amount_warns_and_writes_nothing() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();
        let mut app = App::new(&service, &settings).unwrap();

        type_amount(&mut app, "1000");

        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        type_amount(&mut app, "0");

        assert_eq!(app.transactions.len(), 1);
        assert_eq!(app.balance, Money::from_cents(100_000));
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Warning"));
    }

    #[test]
    fn test_escape_declines_opening_dialog() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();
        let mut app = App::new(&service, &settings).unwrap();

        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(!app.has_dialog());
        assert!(store.is_empty().unwrap());

        // Esc with no dialog quits
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_switching() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();
        let mut app = App::new(&service, &settings).unwrap();
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        handle_key(&mut app, press(KeyCode::Char('g'))).unwrap();
        assert_eq!(app.active_view, ActiveView::Chart);
        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_view, ActiveView::History);
    }

    #[test]
    fn test_non_numeric_keys_ignored_in_dialog() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();
        let mut app = App::new(&service, &settings).unwrap();

        handle_key(&mut app, press(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('-'))).unwrap();
        assert_eq!(app.amount_input.value(), "");
    }
}
