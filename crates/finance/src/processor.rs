use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// A payment channel that can carry a transaction.
pub trait TransactionProcessor {
    /// Short channel name used in logs.
    fn channel(&self) -> &'static str;

    /// Hand the transaction to the channel and describe what happened.
    fn process(&self, transaction: &Transaction) -> String;
}

/// The supported payment channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Processor {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl Processor {
    pub const ALL: [Processor; 3] = [
        Processor::BankTransfer,
        Processor::MobileMoney,
        Processor::CryptoWallet,
    ];
}

impl TransactionProcessor for Processor {
    fn channel(&self) -> &'static str {
        match self {
            Processor::BankTransfer => "BankTransfer",
            Processor::MobileMoney => "MobileMoney",
            Processor::CryptoWallet => "CryptoWallet",
        }
    }

    fn process(&self, tx: &Transaction) -> String {
        let line = match self {
            Processor::BankTransfer => format!(
                "[BankTransfer] Processing {} for '{}' on {}",
                tx.amount(),
                tx.category(),
                tx.date().format("%Y-%m-%d")
            ),
            Processor::MobileMoney => {
                format!("[MobileMoney] Paid {} - Category: {}", tx.amount(), tx.category())
            }
            Processor::CryptoWallet => format!(
                "[CryptoWallet] Sent {} in crypto for '{}'",
                tx.amount(),
                tx.category()
            ),
        };
        tracing::debug!(channel = self.channel(), amount = %tx.amount(), "transaction processed");
        line
    }
}
