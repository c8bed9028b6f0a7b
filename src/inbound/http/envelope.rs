//! Uniform `{status, msg, data}` response envelope.
//!
//! Every endpoint wraps its payload in this envelope. `status` is the
//! application status, decoupled from the HTTP status: `0` means success
//! regardless of transport, `404`/`500` mirror the HTTP code on failure.
//! Clients unwrap `data` uniformly and reject on non-zero `status`, so the
//! shape must stay stable.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application status of a successful response.
pub const STATUS_OK: u16 = 0;

/// Response wrapper shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// `0` on success; mirrors the HTTP status on failure.
    pub status: u16,
    /// Human-readable outcome, `"ok"` on success.
    pub msg: String,
    /// Payload; `null` on failure and for delete acknowledgements.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK,
            msg: "ok".to_owned(),
            data: Some(data),
        }
    }

    /// Successful response without a payload (deletes).
    pub fn ok_empty() -> Self {
        Self {
            status: STATUS_OK,
            msg: "ok".to_owned(),
            data: None,
        }
    }

    /// Failure envelope; `status` mirrors the HTTP status code.
    pub fn error(status: u16, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn ok_envelope_serialises_expected_shape() {
        let envelope = Envelope::ok(vec![1, 2, 3]);
        let value = serde_json::to_value(&envelope).expect("serialise envelope");

        assert_eq!(value, json!({"status": 0, "msg": "ok", "data": [1, 2, 3]}));
    }

    #[rstest]
    fn empty_ok_envelope_has_null_data() {
        let envelope = Envelope::<i32>::ok_empty();
        let value = serde_json::to_value(&envelope).expect("serialise envelope");

        assert_eq!(value, json!({"status": 0, "msg": "ok", "data": null}));
    }

    #[rstest]
    fn error_envelope_mirrors_status() {
        let envelope = Envelope::<i32>::error(404, "Subject not found");
        let value = serde_json::to_value(&envelope).expect("serialise envelope");

        assert_eq!(
            value,
            json!({"status": 404, "msg": "Subject not found", "data": null})
        );
    }

    #[rstest]
    fn envelope_round_trips_through_json() {
        let envelope = Envelope::ok("pong".to_owned());
        let text = serde_json::to_string(&envelope).expect("serialise");
        let back: Envelope<String> = serde_json::from_str(&text).expect("deserialise");

        assert_eq!(back, envelope);
    }
}
