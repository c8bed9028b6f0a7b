//! SQLite-backed `QuestionRepository` implementation using Diesel.
//!
//! `subject_id` is written as given; the adapter never checks that the
//! referenced subject exists, and deleting a subject leaves its questions in
//! place.

use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{QuestionRepository, RepositoryError};
use crate::domain::{NewQuestion, Question, QuestionPatch};

use super::models::{NewQuestionRow, QuestionChangeset, QuestionRow};
use super::pool::DbPool;
use super::schema::questions;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl QuestionRepository for DieselQuestionRepository {
    fn list(&self) -> Result<Vec<Question>, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    fn list_by_subject(&self, subject_id: i32) -> Result<Vec<Question>, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::subject_id.eq(subject_id))
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    fn find(&self, id: i32) -> Result<Option<Question>, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let row: Option<QuestionRow> = questions::table
            .find(id)
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Question::from))
    }

    fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let row: QuestionRow = diesel::insert_into(questions::table)
            .values(NewQuestionRow::from(question))
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .map_err(map_diesel_error)?;

        debug!(id = row.id, "question created");
        Ok(Question::from(row))
    }

    fn update(&self, id: i32, patch: QuestionPatch) -> Result<Option<Question>, RepositoryError> {
        if patch.is_empty() {
            return self.find(id);
        }

        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let row: Option<QuestionRow> = diesel::update(questions::table.find(id))
            .set(QuestionChangeset::from(patch))
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Question::from))
    }

    fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let removed = diesel::delete(questions::table.find(id))
            .execute(&mut conn)
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
