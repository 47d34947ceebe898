//! Finance transaction simulator.
//!
//! Transactions are handed to one of a fixed set of payment processors and
//! then applied to an account. Savings accounts refuse any debit larger than
//! the current balance.

pub mod account;
pub mod app;
pub mod money;
pub mod processor;
pub mod transaction;

pub use account::{Account, AccountKind, SharedAccount};
pub use app::FinanceApp;
pub use money::Money;
pub use processor::{Processor, TransactionProcessor};
pub use transaction::{Rejection, Transaction, TransactionId, TransactionState};
