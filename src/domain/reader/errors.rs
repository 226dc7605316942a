//! Reader-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors surfaced by reader operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    /// Caller-supplied input failed a precondition.
    ValidationFailed { field: String, message: String },
    /// The persistence layer failed to read or write.
    Storage(String),
}

impl ReaderError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReaderError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        ReaderError::Storage(message.into())
    }

    /// The "name is required" rejection for create requests.
    pub fn name_required() -> Self {
        Self::validation("name", "Name is required")
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReaderError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReaderError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReaderError::ValidationFailed { message, .. } => message.clone(),
            ReaderError::Storage(msg) => msg.clone(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, ReaderError::ValidationFailed { .. })
    }
}

impl std::fmt::Display for ReaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReaderError {}

impl From<DomainError> for ReaderError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ReaderError::validation("request", err.message),
            ErrorCode::DatabaseError => ReaderError::storage(err.message),
        }
    }
}
