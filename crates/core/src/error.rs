//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (duplicates,
/// missing records, rejected values). File and parse failures belong to the
/// crates that own those formats.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity with the same identifier is already stored.
    #[error("{entity} with id {id} already exists")]
    DuplicateKey { entity: &'static str, id: String },

    /// No entity is stored under the identifier.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A new value violates a domain constraint (e.g. negative quantity).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Shared state could not be accessed (poisoned lock).
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    pub fn duplicate_key(entity: &'static str, id: impl core::fmt::Display) -> Self {
        Self::DuplicateKey {
            entity,
            id: id.to_string(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl core::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
