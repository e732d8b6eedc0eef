use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::config::{init_tracing, Settings};
use expense_tracker::manager::FinanceManager;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Interactive weekly expense tracker",
    long_about = "Enter a weekly budget and your expenses; the tracker reports \
                  the remaining balance, any overspend, and a timestamped \
                  transaction log. Nothing is saved between runs."
)]
struct Cli {
    /// Label printed in front of amounts
    #[arg(long)]
    currency: Option<String>,

    /// Expenses to enter before you may stop
    #[arg(long)]
    min_transactions: Option<usize>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(currency) = cli.currency {
        settings.currency_label = currency;
    }
    if let Some(min) = cli.min_transactions {
        settings.min_transactions = min;
    }

    let stdin = io::stdin();
    let manager = FinanceManager::new(settings, stdin.lock(), io::stdout().lock())?;
    manager.run()?;

    Ok(())
}
