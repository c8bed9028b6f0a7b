//! SQLite persistence adapters built on Diesel.

mod diesel_question_repository;
mod diesel_subject_repository;
pub mod models;
mod pool;
pub mod schema;

pub use diesel_question_repository::DieselQuestionRepository;
pub use diesel_subject_repository::DieselSubjectRepository;
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};

use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::debug;

use crate::domain::ports::RepositoryError;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure while applying embedded migrations.
#[derive(Debug, thiserror::Error)]
#[error("failed to run database migrations: {message}")]
pub struct MigrationError {
    message: String,
}

/// Bring the schema up to date on the given connection.
///
/// # Errors
///
/// Returns [`MigrationError`] when a migration statement fails.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), MigrationError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| MigrationError {
            message: err.to_string(),
        })
}

/// Map pool errors to repository errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to repository errors.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::query(format!("unique constraint violated: {}", info.message()))
        }
        DieselError::DatabaseError(_, info) => {
            RepositoryError::query(format!("database error: {}", info.message()))
        }
        other => RepositoryError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("pool exhausted"));

        assert!(matches!(repo_err, RepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("pool exhausted"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, RepositoryError::Query { .. }));
    }

    #[rstest]
    fn migrations_apply_on_fresh_database() {
        use diesel::Connection;

        let mut conn = SqliteConnection::establish(":memory:").expect("open in-memory database");
        run_migrations(&mut conn).expect("apply migrations");

        // Second run is a no-op rather than an error.
        run_migrations(&mut conn).expect("re-apply migrations");
    }
}
