//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use thiserror::Error;

use todo_domain::errors::DomainError;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Lock acquisition failed
    #[error("Failed to acquire lock: {0}")]
    LockError(String),
}

impl PersistenceError {
    /// Create a database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        DomainError::StorageFailure {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error() {
        let err = PersistenceError::database("disk full");
        assert_eq!(err.to_string(), "Database error: disk full");
    }

    #[test]
    fn test_error_conversion() {
        let err = PersistenceError::LockError("poisoned".into());
        let domain_err: DomainError = err.into();
        match domain_err {
            DomainError::StorageFailure { reason } => {
                assert_eq!(reason, "Failed to acquire lock: poisoned")
            }
            other => panic!("Expected StorageFailure, got {:?}", other),
        }
    }
}
