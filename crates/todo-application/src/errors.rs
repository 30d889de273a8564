//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API/UI consumption. They wrap domain errors with additional context.

use thiserror::Error;

use todo_domain::errors::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    // === Validation Errors ===

    /// Input validation failed, or a progression rule was broken
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    // === Not Found Errors ===

    /// No todo item with this id
    #[error("TodoItem not found: {0}")]
    TodoItemNotFound(String),

    // === Business Rule Violations ===

    /// Operation not allowed in the item's current state
    #[error("Operation not allowed: {0}")]
    OperationNotAllowed(String),

    // === Infrastructure Errors ===

    /// Repository operation failed
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// Message meant for the caller, without the variant prefix
    pub fn message(&self) -> String {
        match self {
            ApplicationError::ValidationFailed(msg)
            | ApplicationError::OperationNotAllowed(msg)
            | ApplicationError::RepositoryError(msg) => msg.clone(),
            ApplicationError::TodoItemNotFound(id) => format!("TodoItem with id {} not found", id),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError { reason, .. } => ApplicationError::ValidationFailed(reason),
            DomainError::InvalidState { reason } => ApplicationError::OperationNotAllowed(reason),
            DomainError::EntityNotFound { id, .. } => ApplicationError::TodoItemNotFound(id),
            DomainError::StorageFailure { reason } => ApplicationError::RepositoryError(reason),
        }
    }
}
