//! The finance simulation: process, apply and record a batch of transactions.

use chrono::NaiveDate;

use recordkeep_core::{DomainError, DomainResult, Entity, Presenter, Report, Repository};

use crate::account::Account;
use crate::money::Money;
use crate::processor::{Processor, TransactionProcessor};
use crate::transaction::{Transaction, TransactionId, TransactionState};

/// Runs transactions through processors against one account and keeps a
/// history of every transaction it has seen.
#[derive(Debug)]
pub struct FinanceApp {
    account: Account,
    history: Repository<Transaction>,
    outcomes: Vec<(TransactionId, TransactionState)>,
}

impl FinanceApp {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            history: Repository::new(),
            outcomes: Vec::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn history(&self) -> &Repository<Transaction> {
        &self.history
    }

    /// Final state of every recorded transaction, in processing order.
    pub fn outcomes(&self) -> &[(TransactionId, TransactionState)] {
        &self.outcomes
    }

    /// Hand one transaction to a processor, apply it and record it.
    ///
    /// A transaction id that was already recorded is reported and skipped
    /// before any money moves.
    pub fn submit(
        &mut self,
        processor: &dyn TransactionProcessor,
        tx: Transaction,
        out: &mut dyn Presenter,
    ) -> Report {
        let target = format!("transaction #{}", tx.id());
        if self.history.contains(tx.id()) {
            let err = DomainError::duplicate_key(Transaction::KIND, tx.id());
            return Report::failed("submit", target, err).publish(out);
        }

        out.section(&format!("Processing Transaction #{}: {}", tx.id(), tx.category()));
        out.line(&processor.process(&tx));

        let state = self.account.apply(&tx);
        let detail = match state {
            TransactionState::Applied { new_balance } => {
                format!("{} applied, new balance {new_balance}", tx.amount())
            }
            TransactionState::Rejected(reason) => format!("rejected: {reason}"),
            TransactionState::Pending => "pending".to_string(),
        };

        self.outcomes.push((tx.id(), state));
        let report = match self.history.add(tx) {
            Ok(()) => Report::completed("submit", target, detail),
            Err(err) => Report::failed("submit", target, err),
        };
        report.publish(out)
    }

    pub fn show_balance(&self, out: &mut dyn Presenter) {
        out.section(&format!("Current Balance: {}", self.account.balance()));
    }

    pub fn print_transaction_history(&self, out: &mut dyn Presenter) {
        out.section("Transaction History:");
        for tx in self.history.iter() {
            out.line(&format!(
                " - [{}] {} for {}",
                tx.date().format("%Y-%m-%d"),
                tx.amount(),
                tx.category()
            ));
        }
    }

    /// The scripted simulation: savings account ACC001 opened with $1000 and
    /// three transactions, each on a different channel.
    pub fn run(today: NaiveDate, out: &mut dyn Presenter) -> DomainResult<Self> {
        let mut app = Self::new(Account::savings("ACC001", Money::from_dollars(1000)));

        let transactions = [
            Transaction::new(TransactionId::new(1), today, Money::from_dollars(150), "Groceries")?,
            Transaction::new(TransactionId::new(2), today, Money::from_dollars(500), "Rent")?,
            Transaction::new(TransactionId::new(3), today, Money::from_dollars(400), "Online Courses")?,
        ];

        for (processor, tx) in Processor::ALL.iter().zip(transactions) {
            app.submit(processor, tx, out);
        }

        app.show_balance(out);
        app.print_transaction_history(out);
        Ok(app)
    }
}
