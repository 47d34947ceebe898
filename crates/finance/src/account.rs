use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use recordkeep_core::{DomainError, DomainResult};

use crate::money::Money;
use crate::transaction::{Rejection, Transaction, TransactionState};

/// Determines how debits are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Every debit is applied, even past zero.
    Standard,
    /// A debit is applied only if the balance covers it.
    Savings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    balance: Money,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: impl Into<String>, opening_balance: Money, kind: AccountKind) -> Self {
        Self {
            number: number.into(),
            balance: opening_balance,
            kind,
        }
    }

    pub fn savings(number: impl Into<String>, opening_balance: Money) -> Self {
        Self::new(number, opening_balance, AccountKind::Savings)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Debit the account by the transaction amount.
    ///
    /// Returns the final state of the transaction. A rejected transaction
    /// leaves the balance untouched.
    pub fn apply(&mut self, tx: &Transaction) -> TransactionState {
        let requested = tx.amount();
        if self.kind == AccountKind::Savings && self.balance < requested {
            tracing::info!(
                account = %self.number,
                balance = %self.balance,
                %requested,
                "transaction rejected"
            );
            return TransactionState::Rejected(Rejection::InsufficientFunds {
                balance: self.balance,
                requested,
            });
        }

        self.balance -= requested;
        tracing::info!(account = %self.number, balance = %self.balance, "transaction applied");
        TransactionState::Applied {
            new_balance: self.balance,
        }
    }
}

/// Account handle safe to share between threads.
///
/// The balance check and the debit happen under one lock, so concurrent
/// callers can never push a savings account below zero.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn apply(&self, tx: &Transaction) -> DomainResult<TransactionState> {
        let mut account = self
            .inner
            .lock()
            .map_err(|_| DomainError::unavailable("account lock poisoned"))?;
        Ok(account.apply(tx))
    }

    pub fn balance(&self) -> DomainResult<Money> {
        let account = self
            .inner
            .lock()
            .map_err(|_| DomainError::unavailable("account lock poisoned"))?;
        Ok(account.balance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionId;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::thread;

    fn tx(id: u32, dollars: i64) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            Money::from_dollars(dollars),
            "Test",
        )
        .unwrap()
    }

    #[test]
    fn savings_rejects_debit_larger_than_balance() {
        let mut account = Account::savings("ACC001", Money::from_dollars(1000));
        let state = account.apply(&tx(1, 1500));

        assert_eq!(
            state,
            TransactionState::Rejected(Rejection::InsufficientFunds {
                balance: Money::from_dollars(1000),
                requested: Money::from_dollars(1500),
            })
        );
        assert_eq!(account.balance(), Money::from_dollars(1000));
    }

    #[test]
    fn savings_applies_covered_debit() {
        let mut account = Account::savings("ACC001", Money::from_dollars(1000));
        let state = account.apply(&tx(1, 500));

        assert_eq!(
            state,
            TransactionState::Applied {
                new_balance: Money::from_dollars(500)
            }
        );
        assert_eq!(account.balance(), Money::from_dollars(500));
    }

    #[test]
    fn savings_allows_debit_equal_to_balance() {
        let mut account = Account::savings("ACC001", Money::from_dollars(100));
        assert!(account.apply(&tx(1, 100)).is_applied());
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn standard_account_can_go_negative() {
        let mut account = Account::new("ACC002", Money::from_dollars(100), AccountKind::Standard);
        assert!(account.apply(&tx(1, 150)).is_applied());
        assert_eq!(account.balance(), Money::from_dollars(-50));
    }

    #[test]
    fn shared_savings_never_goes_negative_under_contention() {
        let shared = SharedAccount::new(Account::savings("ACC001", Money::from_dollars(1000)));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let account = shared.clone();
                thread::spawn(move || {
                    let mut applied: i64 = 0;
                    for i in 0..50 {
                        let state = account.apply(&tx(worker * 100 + i, 7)).unwrap();
                        if state.is_applied() {
                            applied += 1;
                        }
                    }
                    applied
                })
            })
            .collect();
        let applied: i64 = handles.into_iter().map(|h| h.join().unwrap()).sum();

        // 1000 / 7 = 142 debits fit; everything after is rejected.
        assert_eq!(applied, 142);
        assert_eq!(shared.balance().unwrap(), Money::from_dollars(1000 - 142 * 7));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a savings balance equals the opening balance minus the
        /// applied debits and is never negative.
        #[test]
        fn savings_balance_never_negative(
            opening in 0i64..5_000,
            amounts in prop::collection::vec(1i64..2_000, 0..30)
        ) {
            let mut account = Account::savings("ACC", Money::from_dollars(opening));
            let mut applied_total = 0;

            for (i, amount) in amounts.into_iter().enumerate() {
                let state = account.apply(&tx(i as u32, amount));
                if state.is_applied() {
                    applied_total += amount;
                }
                prop_assert!(!account.balance().is_negative());
            }

            prop_assert_eq!(account.balance(), Money::from_dollars(opening - applied_total));
        }
    }
}
