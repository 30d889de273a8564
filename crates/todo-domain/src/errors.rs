//! Domain errors for the todo list

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    /// The aggregate's current state forbids the operation
    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound { entity_type: String, id: String },

    /// The storage collaborator could not complete the call
    #[error("Storage failure: {reason}")]
    StorageFailure { reason: String },
}

impl DomainError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Human-readable reason without the variant prefix
    pub fn reason(&self) -> String {
        match self {
            DomainError::ValidationError { reason, .. } => reason.clone(),
            DomainError::InvalidState { reason } => reason.clone(),
            DomainError::StorageFailure { reason } => reason.clone(),
            DomainError::EntityNotFound { entity_type, id } => {
                format!("{} with id {} not found", entity_type, id)
            }
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = DomainError::validation("title", "Title is required");
        assert_eq!(err.to_string(), "Validation error: title - Title is required");
        assert_eq!(err.reason(), "Title is required");
    }

    #[test]
    fn test_not_found_reason() {
        let err = DomainError::EntityNotFound {
            entity_type: "TodoItem".to_string(),
            id: "7".to_string(),
        };
        assert_eq!(err.reason(), "TodoItem with id 7 not found");
    }
}
