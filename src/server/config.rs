//! Server configuration object and environment loading.

use std::env;
use std::net::SocketAddr;

/// Failure while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `QUIZBANK_BIND_ADDR` did not parse as a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Builder-style configuration for creating the HTTP server.
///
/// Question support is a toggle rather than a separate entrypoint: with it
/// off, the server only mounts the subject router.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    database_url: String,
    enable_questions: bool,
}

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
    8080,
);
const DEFAULT_DATABASE_URL: &str = "quizbank.db";

impl ServerConfig {
    /// Construct a configuration with question support enabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, database_url: impl Into<String>) -> Self {
        Self {
            bind_addr,
            database_url: database_url.into(),
            enable_questions: true,
        }
    }

    /// Toggle the question router.
    #[must_use]
    pub fn with_questions(mut self, enabled: bool) -> Self {
        self.enable_questions = enabled;
        self
    }

    /// Read configuration from the environment.
    ///
    /// - `QUIZBANK_BIND_ADDR` (default `0.0.0.0:8080`)
    /// - `QUIZBANK_DATABASE_URL` (default `quizbank.db`)
    /// - `QUIZBANK_ENABLE_QUESTIONS` (default on; `0` or `false` turns the
    ///   question router off)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddr`] when the bind address does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match env::var("QUIZBANK_BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|err: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                    value: raw.clone(),
                    message: err.to_string(),
                })?,
            Err(_) => DEFAULT_BIND_ADDR,
        };

        let database_url =
            env::var("QUIZBANK_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let enable_questions = env::var("QUIZBANK_ENABLE_QUESTIONS")
            .map(|v| parse_toggle(&v))
            .unwrap_or(true);

        Ok(Self {
            bind_addr,
            database_url,
            enable_questions,
        })
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// SQLite database path.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Whether the question router is mounted.
    #[must_use]
    pub fn questions_enabled(&self) -> bool {
        self.enable_questions
    }
}

fn parse_toggle(raw: &str) -> bool {
    !matches!(raw.trim(), "0" | "false" | "off" | "no")
}
