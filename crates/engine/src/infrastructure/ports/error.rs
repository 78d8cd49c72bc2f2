//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Ownership or ordering constraint violated (e.g. a child saved before its parent).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Unit of work could not begin, commit or roll back.
    #[error("Transaction error: {0}")]
    Transaction(String),
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a ConstraintViolation error.
    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }

    pub fn transaction(message: impl ToString) -> Self {
        Self::Transaction(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = RepoError::not_found("Galaxy", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Galaxy not found: abc");

        let err = RepoError::database("save_star", "disk full");
        assert_eq!(err.to_string(), "Database error in save_star: disk full");
        assert!(!err.is_not_found());
    }
}
