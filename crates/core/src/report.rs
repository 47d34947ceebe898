//! Outcome reports for best-effort operations.
//!
//! Operations such as seeding, stock increases and removals never propagate
//! their errors. They return a [`Report`] instead, which names the operation,
//! the target it touched and what happened.

use crate::error::DomainError;
use crate::presenter::Presenter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<E = DomainError> {
    Completed(String),
    Failed(E),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<E = DomainError> {
    pub operation: &'static str,
    pub target: String,
    pub outcome: Outcome<E>,
}

impl<E> Report<E> {
    pub fn completed(operation: &'static str, target: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation,
            target: target.into(),
            outcome: Outcome::Completed(detail.into()),
        }
    }

    pub fn failed(operation: &'static str, target: impl Into<String>, error: E) -> Self {
        Self {
            operation,
            target: target.into(),
            outcome: Outcome::Failed(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Completed(_))
    }

    pub fn error(&self) -> Option<&E> {
        match &self.outcome {
            Outcome::Failed(e) => Some(e),
            Outcome::Completed(_) => None,
        }
    }
}

impl<E: core::fmt::Display> Report<E> {
    /// Log the report and write it to the presenter, then hand it back.
    pub fn publish(self, out: &mut dyn Presenter) -> Self {
        match &self.outcome {
            Outcome::Completed(detail) => {
                tracing::info!(operation = self.operation, subject = %self.target, %detail, "completed");
            }
            Outcome::Failed(err) => {
                tracing::warn!(operation = self.operation, subject = %self.target, error = %err, "failed");
            }
        }
        out.line(&self.to_string());
        self
    }
}

impl<E: core::fmt::Display> core::fmt::Display for Report<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.outcome {
            Outcome::Completed(detail) => {
                write!(f, "[{}] {}: {}", self.operation, self.target, detail)
            }
            Outcome::Failed(err) => {
                write!(f, "[{}] {}: failed: {}", self.operation, self.target, err)
            }
        }
    }
}
