//! Subscription lifecycle error types.
//!
//! # Retry semantics
//!
//! | Error | Retryable | Caller action |
//! |-------|-----------|---------------|
//! | ValidationFailed | no | fix input |
//! | NotFound | no | re-fetch the list |
//! | Storage | yes | retry, state is unchanged |

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, ValidationError};

/// Which of the two durable collections an operation looked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Active,
    Deleted,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Active => f.write_str("active"),
            Collection::Deleted => f.write_str("deleted"),
        }
    }
}

/// Errors raised by the subscription store and its handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Input breaks a business rule.
    ValidationFailed { field: String, message: String },

    /// Target is not present in the expected collection.
    NotFound {
        id: SubscriptionId,
        collection: Collection,
    },

    /// Durable read or write failed. Nothing was changed.
    Storage(String),
}

impl SubscriptionError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubscriptionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: SubscriptionId) -> Self {
        SubscriptionError::NotFound {
            id,
            collection: Collection::Active,
        }
    }

    pub fn deleted_not_found(id: SubscriptionId) -> Self {
        SubscriptionError::NotFound {
            id,
            collection: Collection::Deleted,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        SubscriptionError::Storage(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SubscriptionError::NotFound {
                collection: Collection::Active,
                ..
            } => ErrorCode::SubscriptionNotFound,
            SubscriptionError::NotFound {
                collection: Collection::Deleted,
                ..
            } => ErrorCode::DeletedSubscriptionNotFound,
            SubscriptionError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::ValidationFailed { field, message } => {
                format!("Invalid {}: {}", field, message)
            }
            SubscriptionError::NotFound {
                id,
                collection: Collection::Active,
            } => format!("Subscription {} not found", id),
            SubscriptionError::NotFound {
                id,
                collection: Collection::Deleted,
            } => format!("Deleted subscription {} not found", id),
            SubscriptionError::Storage(msg) => format!("Could not save changes: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubscriptionError::Storage(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SubscriptionError::NotFound { .. })
    }
}

impl fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<ValidationError> for SubscriptionError {
    fn from(err: ValidationError) -> Self {
        SubscriptionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::ProductNotFound => SubscriptionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => SubscriptionError::Storage(err.to_string()),
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            SubscriptionError::ValidationFailed { field, .. } => domain.with_detail("field", field),
            SubscriptionError::NotFound { id, .. } => domain.with_detail("id", id.to_string()),
            SubscriptionError::Storage(_) => domain,
        }
    }
}
