//! Finance session orchestration
//!
//! Drives one interactive session: read a budget, collect expenses until the
//! user stops (after a minimum count), then print the summary. Validation
//! failures re-issue the prompt; end of input aborts without a summary.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::prompt::Prompter;
use super::state::SessionState;
use crate::config::Settings;
use crate::display::format_summary;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Ledger, Money};

/// Coordinates prompts, the budget and the transaction log for one session
pub struct FinanceManager<R, W> {
    settings: Settings,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> FinanceManager<R, W> {
    /// Create a manager reading answers from `input` and writing to `output`
    pub fn new(settings: Settings, input: R, output: W) -> TrackerResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            prompter: Prompter::new(input, output),
        })
    }

    /// Run the session to completion and return the finished ledger
    pub fn run(mut self) -> TrackerResult<Ledger> {
        let mut state = SessionState::AwaitingBudget;

        loop {
            debug!(state = %state, "Entering session state");

            state = match state {
                SessionState::AwaitingBudget => {
                    self.prompter.say("Welcome to the Personal Finance Manager")?;
                    self.prompter.say("")?;
                    let budget = self.read_budget()?;
                    SessionState::CollectingTransactions(Ledger::new(budget))
                }
                SessionState::CollectingTransactions(mut ledger) => {
                    self.collect_transactions(&mut ledger)?;
                    SessionState::Summarizing(ledger)
                }
                SessionState::Summarizing(ledger) => {
                    let summary = format_summary(&ledger, &self.settings)?;
                    self.prompter.write_block(&summary)?;
                    SessionState::Done(ledger)
                }
                SessionState::Done(ledger) => {
                    info!(
                        transactions = ledger.log().len(),
                        spent = %ledger.budget().total_spent(),
                        "Session finished"
                    );
                    return Ok(ledger);
                }
            };
        }
    }

    fn read_budget(&mut self) -> TrackerResult<Budget> {
        loop {
            let input = self.prompter.prompt_string("Enter your weekly budget: ")?;
            match parse_budget(&input) {
                Ok(budget) => {
                    info!(budget = %budget.total_budget(), "Budget set");
                    return Ok(budget);
                }
                Err(err) if err.is_recoverable() => self.reject(&err)?,
                Err(err) => return Err(err),
            }
        }
    }

    fn collect_transactions(&mut self, ledger: &mut Ledger) -> TrackerResult<()> {
        let min = self.settings.min_transactions;
        self.prompter.say("")?;
        self.prompter
            .say(format_args!("Enter at least {} transactions.", min))?;

        loop {
            if ledger.log().len() >= min {
                self.prompter.say("")?;
                let more = self
                    .prompter
                    .confirm("Add another transaction? (yes/no) [no]: ", false)?;
                if !more {
                    return Ok(());
                }
            }

            self.prompter.say("")?;
            self.prompter
                .say(format_args!("Transaction {}", ledger.log().len() + 1))?;
            self.read_transaction(ledger)?;
            self.check_budget_status(ledger.budget())?;
        }
    }

    /// Read one description/amount pair and record it
    ///
    /// A bad amount re-prompts for the amount only.
    fn read_transaction(&mut self, ledger: &mut Ledger) -> TrackerResult<()> {
        let description = loop {
            let input = self.prompter.prompt_string("Enter expense description: ")?;
            if input.is_empty() {
                self.reject(&TrackerError::EmptyDescription)?;
            } else {
                break input;
            }
        };

        loop {
            let input = self.prompter.prompt_string("Enter expense amount: ")?;
            let recorded = Money::parse(&input)
                .map_err(|_| TrackerError::unparseable_amount(&input))
                .and_then(|amount| {
                    ledger
                        .record_expense(description.as_str(), amount)
                        .map(|_| ())
                });

            match recorded {
                Ok(()) => return Ok(()),
                Err(err) if err.is_recoverable() => self.reject(&err)?,
                Err(err) => return Err(err),
            }
        }
    }

    fn check_budget_status(&mut self, budget: &Budget) -> TrackerResult<()> {
        if budget.is_exceeded() {
            warn!(deficit = %budget.deficit(), "Budget exceeded");
            self.prompter.say("WARNING: You have exceeded your budget!")?;
        }
        Ok(())
    }

    fn reject(&mut self, err: &TrackerError) -> TrackerResult<()> {
        debug!(error = %err, "Rejected input");
        self.prompter
            .say(format_args!("Invalid input: {}. Please try again.", err))
    }
}

/// Parse budget input; unparseable text counts as an invalid budget
fn parse_budget(input: &str) -> TrackerResult<Budget> {
    let amount = Money::parse(input).map_err(|_| TrackerError::unparseable_budget(input))?;
    Budget::new(amount)
}
