//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the repository ports and remain testable without a real store. One
//! bundle is constructed per process start and cloned into each worker.

use std::sync::Arc;

use crate::domain::ports::{QuestionRepository, SubjectRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub subjects: Arc<dyn SubjectRepository>,
    pub questions: Arc<dyn QuestionRepository>,
}

impl HttpState {
    /// Construct state from the two repository ports.
    pub fn new(
        subjects: Arc<dyn SubjectRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            subjects,
            questions,
        }
    }
}
