//! CLI command handlers
//!
//! Non-interactive entry points into the balance engine, plus the console
//! prompter used for first-run initialization.

pub mod prompt;

pub use prompt::ConsolePrompter;

use crate::config::Settings;
use crate::display::{format_balance_summary, format_history_table};
use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, MovementKind};
use crate::services::{LedgerService, Prompter};

/// Handle `saldo init`: create the database and prompt for an opening balance
pub fn handle_init(service: &LedgerService) -> SaldoResult<()> {
    let mut prompter = ConsolePrompter::new();
    service.initialize(&mut prompter)?;

    let balance = service.current_balance()?;
    println!("Ledger initialized. Current balance: {}", balance);
    Ok(())
}

/// Handle `saldo deposit <amount>` / `saldo withdraw <amount>`
///
/// With an explicit amount the movement is recorded directly; without one
/// the user is prompted. Invalid amounts surface as warnings, not crashes.
pub fn handle_movement(
    service: &LedgerService,
    settings: &Settings,
    kind: MovementKind,
    amount: Option<String>,
) -> SaldoResult<()> {
    let mut prompter = ConsolePrompter::new();

    // Unparseable and non-positive amounts alike are recovered locally as
    // warnings; only storage failures propagate.
    let recorded = match amount {
        Some(raw) => match Money::parse(&raw) {
            Ok(amount) => match service.record_movement(kind, amount) {
                Ok(txn) => Some(txn),
                Err(SaldoError::Validation(msg)) => {
                    prompter.warn(&msg);
                    None
                }
                Err(e) => return Err(e),
            },
            Err(e) => {
                prompter.warn(&e.to_string());
                None
            }
        },
        None => service.record_movement_prompted(kind, &mut prompter)?,
    };

    if let Some(txn) = recorded {
        println!(
            "{} of {} recorded. New balance: {}",
            txn.kind,
            txn.amount.format_with_symbol(&settings.currency_symbol),
            txn.balance.format_with_symbol(&settings.currency_symbol),
        );
    }
    Ok(())
}

/// Handle `saldo history`: print the full ledger as a table
pub fn handle_history(service: &LedgerService, settings: &Settings) -> SaldoResult<()> {
    let history = service.history()?;
    println!(
        "{}",
        format_history_table(&history, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `saldo balance`: print the current balance
pub fn handle_balance(service: &LedgerService, settings: &Settings) -> SaldoResult<()> {
    let balance = service.current_balance()?;
    println!(
        "{}",
        format_balance_summary(balance, &settings.currency_symbol)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LedgerStore;

    #[test]
    fn test_explicit_amount_recorded() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();

        handle_movement(
            &service,
            &settings,
            MovementKind::Deposit,
            Some("250.00".into()),
        )
        .unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(
            service.current_balance().unwrap(),
            Money::from_cents(25_000)
        );
    }

    #[test]
    fn test_invalid_explicit_amount_warns_without_write() {
        let store = LedgerStore::open_in_memory().unwrap();
        let service = LedgerService::new(&store);
        let settings = Settings::default();

        // Unparseable, multi-byte, and non-positive amounts all recover as
        // warnings: Ok result, no row written
        for raw in ["abc", "1.5€", "0", "-5"] {
            handle_movement(
                &service,
                &settings,
                MovementKind::Deposit,
                Some(raw.into()),
            )
            .unwrap();
        }

        assert!(store.is_empty().unwrap());
    }
}
