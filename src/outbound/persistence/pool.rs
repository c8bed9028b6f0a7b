//! Connection pool for Diesel SQLite connections.
//!
//! Wraps `diesel::r2d2` behind a small configuration object. SQLite has no
//! async driver in Diesel, so connections are blocking and callers are
//! expected to hop onto the blocking pool before touching them.

use std::time::Duration;

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration with the given database URL (a SQLite file
    /// path or `:memory:`).
    ///
    /// Defaults: `max_size` 10 connections, `connection_timeout` 30 seconds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Pooled SQLite connection handle.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// The `ConnectionManager` turns `PRAGMA foreign_keys` on for every pooled
/// connection, which would make the declared `REFERENCES` clauses reject
/// deletes of still-referenced rows. References here are soft: deletes
/// neither cascade nor fail, so the pragma goes back off on acquire.
#[derive(Debug, Clone, Copy)]
struct SoftReferences;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SoftReferences {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = OFF;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Connection pool for SQLite via Diesel.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g. the
    /// database file cannot be opened).
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url());

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(SoftReferences))
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained
    /// within the configured timeout.
    pub fn get(&self) -> Result<DbConnection, PoolError> {
        self.inner
            .get()
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_config_default_values() {
        let config = PoolConfig::new("quizbank.db");

        assert_eq!(config.database_url(), "quizbank.db");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn pool_config_builder_pattern() {
        let config = PoolConfig::new(":memory:")
            .with_max_size(2)
            .with_connection_timeout(Duration::from_secs(5));

        assert_eq!(config.max_size, 2);
        assert_eq!(config.connection_timeout, Duration::from_secs(5));
    }

    #[rstest]
    fn pooled_connections_leave_foreign_keys_off() {
        use diesel::prelude::*;

        #[derive(QueryableByName)]
        struct PragmaRow {
            #[diesel(sql_type = diesel::sql_types::Integer)]
            foreign_keys: i32,
        }

        let pool = DbPool::new(PoolConfig::new(":memory:").with_max_size(1)).expect("pool");
        let mut conn = pool.get().expect("connection");

        let row: PragmaRow = diesel::sql_query("PRAGMA foreign_keys")
            .get_result(&mut conn)
            .expect("read pragma");
        assert_eq!(row.foreign_keys, 0);
    }

    #[rstest]
    fn pool_error_display() {
        let checkout_err = PoolError::checkout("pool exhausted");
        let build_err = PoolError::build("bad path");

        assert!(checkout_err.to_string().contains("pool exhausted"));
        assert!(build_err.to_string().contains("bad path"));
    }
}
