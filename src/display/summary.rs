//! Summary display formatting
//!
//! Renders the end-of-session report: budget figures followed by the
//! numbered transaction log.

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::{Ledger, Transaction};

/// Format one numbered transaction log line
///
/// `index` is 1-based.
fn format_transaction_line(index: usize, txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{}. {} - {} [{}]",
        index,
        txn.description(),
        txn.amount().format_with_label(&settings.currency_label),
        txn.timestamp().format(&settings.timestamp_format)
    )
}

/// Format the final financial summary
///
/// Fails if the settings are invalid or if the transaction log and the
/// budget disagree on the total spent.
pub fn format_summary(ledger: &Ledger, settings: &Settings) -> TrackerResult<String> {
    settings.validate()?;

    let label = settings.currency_label.as_str();
    let budget = ledger.budget();
    let total_expenses = ledger.checked_total()?;

    let mut output = String::new();
    output.push('\n');
    output.push_str("========== FINAL FINANCIAL SUMMARY ==========\n");
    output.push_str(&format!(
        "Initial Budget: {}\n",
        budget.total_budget().format_with_label(label)
    ));
    output.push_str(&format!(
        "Total Expenses: {}\n",
        total_expenses.format_with_label(label)
    ));

    if budget.is_exceeded() {
        output.push_str(&format!(
            "Deficit: {}\n",
            budget.deficit().format_with_label(label)
        ));
    } else {
        output.push_str(&format!(
            "Remaining Balance: {}\n",
            budget.remaining().format_with_label(label)
        ));
    }

    output.push_str("\n--- TRANSACTION LOG ---\n");
    for (i, txn) in ledger.log().iter().enumerate() {
        output.push_str(&format_transaction_line(i + 1, txn, settings));
        output.push('\n');
    }

    Ok(output)
}
