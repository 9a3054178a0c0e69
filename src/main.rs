use anyhow::Result;
use clap::{Parser, Subcommand};

use saldo::cli::{handle_balance, handle_history, handle_init, handle_movement};
use saldo::config::{paths::SaldoPaths, settings::Settings};
use saldo::models::MovementKind;
use saldo::services::LedgerService;
use saldo::storage::LedgerStore;
use saldo::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "saldo",
    version,
    about = "Terminal-based single-user personal finance ledger",
    long_about = "saldo records deposits and withdrawals in a local SQLite \
                  ledger, keeps a running balance, and renders the history \
                  as a table and a balance-over-time chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Initialize the ledger and prompt for an opening balance
    Init,

    /// Record a deposit
    Deposit {
        /// Amount, e.g. 250.00 (prompted for if omitted)
        amount: Option<String>,
    },

    /// Record a withdrawal
    Withdraw {
        /// Amount, e.g. 300.00 (prompted for if omitted)
        amount: Option<String>,
    },

    /// Print the transaction history
    History,

    /// Print the current balance
    Balance,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SaldoPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Open the ledger store
    let store = LedgerStore::open(paths.ledger_file())?;
    let service = LedgerService::new(&store);

    match cli.command {
        Some(Commands::Init) => {
            handle_init(&service)?;
        }
        Some(Commands::Deposit { amount }) => {
            handle_movement(&service, &settings, MovementKind::Deposit, amount)?;
        }
        Some(Commands::Withdraw { amount }) => {
            handle_movement(&service, &settings, MovementKind::Withdrawal, amount)?;
        }
        Some(Commands::History) => {
            handle_history(&service, &settings)?;
        }
        Some(Commands::Balance) => {
            handle_balance(&service, &settings)?;
        }
        Some(Commands::Config) => {
            println!("saldo configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Currency symbol: {}", settings.currency_symbol);
        }
        Some(Commands::Tui) | None => {
            run_tui(&service, &settings)?;
        }
    }

    Ok(())
}
