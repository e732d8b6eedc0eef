use std::io::Write;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "expense-tracker";

const FIVE_EXPENSES: &str = "Rent share\n150000\n\
                             Food\n50000\n\
                             Transport\n20000\n\
                             Airtime\n5000\n\
                             Water\n2500\n";

fn tracker() -> Command {
    Command::cargo_bin(BIN_NAME).expect("binary exists")
}

#[test]
fn cli_full_session_prints_summary() {
    tracker()
        .write_stdin(format!("500000\n{}no\n", FIVE_EXPENSES))
        .assert()
        .success()
        .stdout(contains("Welcome to the Personal Finance Manager"))
        .stdout(contains("========== FINAL FINANCIAL SUMMARY =========="))
        .stdout(contains("Initial Budget: UGX 500000.00"))
        .stdout(contains("Total Expenses: UGX 227500.00"))
        .stdout(contains("Remaining Balance: UGX 272500.00"))
        .stdout(contains("--- TRANSACTION LOG ---"))
        .stdout(contains("1. Rent share - UGX 150000.00 ["))
        .stdout(contains("5. Water - UGX 2500.00 ["));
}

#[test]
fn cli_overspend_reports_deficit() {
    tracker()
        .write_stdin(format!("100000\n{}\n", FIVE_EXPENSES))
        .assert()
        .success()
        .stdout(contains("WARNING: You have exceeded your budget!"))
        .stdout(contains("Deficit: UGX 127500.00"))
        .stdout(contains("Remaining Balance").not());
}

#[test]
fn cli_end_of_input_fails_without_summary() {
    tracker()
        .write_stdin("500\nLunch\n10\n")
        .assert()
        .failure()
        .stdout(contains("FINAL FINANCIAL SUMMARY").not())
        .stderr(contains("Input stream closed"));
}

#[test]
fn cli_flags_override_defaults() {
    tracker()
        .args(["--currency", "KES", "--min-transactions", "1"])
        .write_stdin("20\nTea\n1.5\nno\n")
        .assert()
        .success()
        .stdout(contains("Enter at least 1 transactions."))
        .stdout(contains("Remaining Balance: KES 18.50"))
        .stdout(contains("1. Tea - KES 1.50 ["));
}

#[test]
fn cli_reads_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "currency_label": "USD", "min_transactions": 1, "timestamp_format": "%H:%M" }}"#
    )
    .unwrap();

    tracker()
        .arg("--config")
        .arg(file.path())
        .write_stdin("10\nBus\n2\n\n")
        .assert()
        .success()
        .stdout(contains("Initial Budget: USD 10.00"))
        .stdout(contains("1. Bus - USD 2.00 ["));
}

#[test]
fn cli_rejects_bad_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    tracker()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
