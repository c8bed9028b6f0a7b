//! Repository ports for the persistence layer.
//!
//! Handlers depend on these traits rather than on Diesel so they stay
//! testable without a database. Implementations are blocking; HTTP handlers
//! move calls onto the blocking pool via `web::block`.

use crate::domain::{NewQuestion, NewSubject, Question, QuestionPatch, Subject, SubjectPatch};

/// Errors surfaced by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Failed to obtain or keep a store connection.
    #[error("database connection error: {message}")]
    Connection { message: String },

    /// A statement failed: constraint violation, bad query, or store fault.
    #[error("database query error: {message}")]
    Query { message: String },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for subjects.
pub trait SubjectRepository: Send + Sync {
    /// Every subject, storage order unspecified.
    fn list(&self) -> Result<Vec<Subject>, RepositoryError>;

    /// One subject by id, `None` when no row matches.
    fn find(&self, id: i32) -> Result<Option<Subject>, RepositoryError>;

    /// Insert and return the stored row; timestamps come from the store.
    fn create(&self, subject: NewSubject) -> Result<Subject, RepositoryError>;

    /// Overwrite only the supplied fields; `None` when no row matches.
    fn update(&self, id: i32, patch: SubjectPatch) -> Result<Option<Subject>, RepositoryError>;

    /// Remove by id; false when no row matched.
    fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

/// Persistence port for questions.
pub trait QuestionRepository: Send + Sync {
    /// Every question, storage order unspecified.
    fn list(&self) -> Result<Vec<Question>, RepositoryError>;

    /// Questions whose `subject_id` equals the given value.
    fn list_by_subject(&self, subject_id: i32) -> Result<Vec<Question>, RepositoryError>;

    /// One question by id, `None` when no row matches.
    fn find(&self, id: i32) -> Result<Option<Question>, RepositoryError>;

    /// Insert with the caller-supplied id and return the stored row.
    fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError>;

    /// Overwrite only the supplied fields; `None` when no row matches.
    fn update(&self, id: i32, patch: QuestionPatch) -> Result<Option<Question>, RepositoryError>;

    /// Remove by id; false when no row matched.
    fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
