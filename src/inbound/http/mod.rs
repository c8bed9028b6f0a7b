//! Inbound HTTP adapters: resource handlers, envelope, and error mapping.

pub mod envelope;
pub mod error;
pub mod health;
pub mod questions;
pub mod state;
pub mod subjects;

pub use error::ApiResult;

use actix_web::{HttpResponse, web};
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::RepositoryError;
use crate::inbound::http::envelope::Envelope;

/// Fallback for unmatched routes: the 404 envelope with no resource hint.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(Envelope::<()>::error(404, "Not Found"))
}

/// Parse a path id. Anything non-numeric matches no row, so callers treat
/// `None` as not-found rather than as a malformed request.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Run a blocking repository call on the blocking pool and fold both failure
/// layers (cancelled task, repository error) into the domain error.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, RepositoryError> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|err| {
            error!(error = %err, "blocking repository task failed");
            Error::internal("blocking task failed")
        })?
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(1))]
    #[case(" 42 ", Some(42))]
    #[case("-7", Some(-7))]
    #[case("abc", None)]
    #[case("1.5", None)]
    #[case("", None)]
    fn parse_id_accepts_integers_only(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(parse_id(raw), expected);
    }
}
