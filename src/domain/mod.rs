//! Domain types for the question bank.
//!
//! Entities, the error taxonomy, and the repository ports live here, free of
//! transport and persistence concerns.

mod error;
pub mod ports;
mod question;
mod subject;

pub use error::{Error, ErrorCode};

/// Deserialize a present field (even an explicit `null`) as `Some(..)`, so a
/// doubly nested option can distinguish `null` from an absent field.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}
pub use question::{NewQuestion, Question, QuestionPatch};
pub use subject::{NewSubject, Subject, SubjectPatch};
