//! Core error types for goal board operations.
//!
//! Every failure is a value. Nothing here is fatal: the worst case is a
//! single rejected action reported back to the user.

use thiserror::Error;

use crate::goal::{GoalField, GoalId};

/// Core error type for goal board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Input errors
    #[error("{field} must not be empty")]
    Validation { field: GoalField },

    // Lookup errors
    #[error("goal {id} not found")]
    NotFound { id: GoalId },

    #[error("there are no goals to clear")]
    Empty,

    // Persistence errors
    #[error("persisted goals are unreadable: {reason}")]
    CorruptData { reason: String },

    #[error("storage operation on '{key}' failed: {reason}")]
    Storage { key: String, reason: String },

    #[error("failed to serialize goals: {reason}")]
    Serialization { reason: String },

    // Configuration errors
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl Error {
    /// Create a validation error for an empty field.
    #[must_use]
    pub const fn validation(field: GoalField) -> Self {
        Self::Validation { field }
    }

    /// Create a not-found error.
    #[must_use]
    pub const fn not_found(id: GoalId) -> Self {
        Self::NotFound { id }
    }

    /// Create a corrupt data error.
    pub fn corrupt_data(reason: impl Into<String>) -> Self {
        Self::CorruptData {
            reason: reason.into(),
        }
    }

    /// Create a storage backend error.
    pub fn storage(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Whether the error comes from the persistence layer rather than user input.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::CorruptData { .. } | Self::Storage { .. } | Self::Serialization { .. }
        )
    }
}
