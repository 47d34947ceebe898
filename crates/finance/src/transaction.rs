use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordkeep_core::{DomainError, DomainResult, Entity, numeric_id};

use crate::money::Money;

numeric_id! {
    pub struct TransactionId;
}

/// An immutable debit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    amount: Money,
    category: String,
}

impl Transaction {
    /// Create a transaction. The amount must be strictly positive.
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
    ) -> DomainResult<Self> {
        if !amount.is_positive() {
            return Err(DomainError::invalid_value(format!(
                "transaction amount must be positive (got {amount})"
            )));
        }
        Ok(Self {
            id,
            date,
            amount,
            category: category.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Entity for Transaction {
    type Id = TransactionId;
    const KIND: &'static str = "transaction";

    fn id(&self) -> TransactionId {
        self.id
    }
}

/// Why a transaction was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    InsufficientFunds { balance: Money, requested: Money },
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Rejection::InsufficientFunds { balance, requested } => {
                write!(f, "insufficient funds for {requested} (balance {balance})")
            }
        }
    }
}

/// Lifecycle of one transaction against an account.
///
/// `Pending` moves to exactly one of `Applied` or `Rejected`; both are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    Pending,
    Applied { new_balance: Money },
    Rejected(Rejection),
}

impl TransactionState {
    pub fn is_final(&self) -> bool {
        !matches!(self, TransactionState::Pending)
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, TransactionState::Applied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let err = Transaction::new(TransactionId::new(1), day(), Money::ZERO, "Rent").unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
        assert!(Transaction::new(TransactionId::new(1), day(), Money::from_cents(-1), "Rent").is_err());
    }

    #[test]
    fn pending_is_the_only_non_final_state() {
        assert!(!TransactionState::Pending.is_final());
        assert!(TransactionState::Applied { new_balance: Money::ZERO }.is_final());
        assert!(
            TransactionState::Rejected(Rejection::InsufficientFunds {
                balance: Money::ZERO,
                requested: Money::from_cents(1),
            })
            .is_final()
        );
    }
}
