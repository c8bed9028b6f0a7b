//! Domain error taxonomy.
//!
//! Every failure a handler can surface is either `NotFound` (the id matched
//! no row) or `InternalError` (store or serialization failure). Store detail
//! is logged server-side when the repository error is converted; clients only
//! ever see the generic message.

use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::RepositoryError;

/// Stable machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    InternalError,
}

/// Domain failure carried from handlers to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Failure for an id with no matching row.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Unhandled store or serialization failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: message.into(),
        }
    }

    /// Error category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        error!(error = %err, "repository operation failed");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_carries_code_and_message() {
        let err = Error::not_found("Subject not found");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Subject not found");
    }

    #[rstest]
    fn repository_error_degrades_to_internal() {
        let err = Error::from(RepositoryError::query("UNIQUE constraint failed"));
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Internal server error");
    }

    #[rstest]
    fn display_uses_message() {
        assert_eq!(Error::internal("boom").to_string(), "boom");
    }
}
