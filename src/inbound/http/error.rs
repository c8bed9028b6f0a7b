//! Transport mapping from domain errors to envelope responses.
//!
//! Keep the domain free of transport concerns by translating [`Error`] into
//! Actix responses here. Internal failures are rendered with a generic
//! message; the detail only ever reaches the logs.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::Envelope;

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let msg = match self.code() {
            ErrorCode::NotFound => self.message().to_owned(),
            ErrorCode::InternalError => {
                error!(detail = self.message(), "request failed");
                "Internal server error".to_owned()
            }
        };

        HttpResponse::build(status).json(Envelope::<()>::error(status.as_u16(), msg))
    }
}

/// Render malformed request bodies as the 500 envelope: deserialization is a
/// serialization failure in this API's taxonomy, not a 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    error!(error = %err, "failed to read request payload");
    Error::internal(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_renders_404_envelope() {
        let response = Error::not_found("Subject not found").error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["status"], 404);
        assert_eq!(value["msg"], "Subject not found");
        assert_eq!(value["data"], serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn internal_error_is_redacted() {
        let response = Error::internal("UNIQUE constraint failed: questions.id").error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["status"], 500);
        assert_eq!(value["msg"], "Internal server error");
    }
}
