//! Console prompter
//!
//! Implements the balance engine's `Prompter` capability over stdin/stdout
//! for the non-TUI commands. An empty line declines the prompt.

use std::io::{self, BufRead, Write};

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, MovementKind};
use crate::services::Prompter;

/// Prompter reading amounts from standard input
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_amount(&self, prompt: &str) -> SaldoResult<Option<Money>> {
        print!("{} (blank to skip): ", prompt);
        io::stdout()
            .flush()
            .map_err(|e| SaldoError::Io(e.to_string()))?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| SaldoError::Io(e.to_string()))?;

        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        Money::parse(line)
            .map(Some)
            .map_err(|e| SaldoError::Validation(e.to_string()))
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ConsolePrompter {
    fn request_opening_balance(&mut self) -> SaldoResult<Option<Money>> {
        self.read_amount("Enter the opening balance")
    }

    fn request_amount(&mut self, kind: MovementKind) -> SaldoResult<Option<Money>> {
        self.read_amount(&format!("Enter {} amount", kind.to_string().to_lowercase()))
    }

    fn warn(&mut self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}
