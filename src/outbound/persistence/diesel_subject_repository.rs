//! SQLite-backed `SubjectRepository` implementation using Diesel.

use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{RepositoryError, SubjectRepository};
use crate::domain::{NewSubject, Subject, SubjectPatch};

use super::models::{NewSubjectRow, SubjectChangeset, SubjectRow};
use super::pool::DbPool;
use super::schema::subjects;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the `SubjectRepository` port.
#[derive(Clone)]
pub struct DieselSubjectRepository {
    pool: DbPool,
}

impl DieselSubjectRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SubjectRepository for DieselSubjectRepository {
    fn list(&self) -> Result<Vec<Subject>, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let rows: Vec<SubjectRow> = subjects::table
            .select(SubjectRow::as_select())
            .load(&mut conn)
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Subject::from).collect())
    }

    fn find(&self, id: i32) -> Result<Option<Subject>, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let row: Option<SubjectRow> = subjects::table
            .find(id)
            .select(SubjectRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Subject::from))
    }

    fn create(&self, subject: NewSubject) -> Result<Subject, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let row: SubjectRow = diesel::insert_into(subjects::table)
            .values(NewSubjectRow::from(subject))
            .returning(SubjectRow::as_returning())
            .get_result(&mut conn)
            .map_err(map_diesel_error)?;

        debug!(id = row.id, "subject created");
        Ok(Subject::from(row))
    }

    fn update(&self, id: i32, patch: SubjectPatch) -> Result<Option<Subject>, RepositoryError> {
        if patch.is_empty() {
            // Nothing to write; report the current row so an empty body still
            // distinguishes found from not-found.
            return self.find(id);
        }

        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let row: Option<SubjectRow> = diesel::update(subjects::table.find(id))
            .set(SubjectChangeset::from(patch))
            .returning(SubjectRow::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Subject::from))
    }

    fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().map_err(map_pool_error)?;

        let removed = diesel::delete(subjects::table.find(id))
            .execute(&mut conn)
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
