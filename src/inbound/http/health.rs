//! Liveness endpoint.

use actix_web::{HttpResponse, get};

/// Liveness probe; returns plain-text `pong` while the process serves
/// traffic. Lives outside the `/v1` scope, so no CORS headers apply.
#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Service is alive", body = String)),
    tags = ["health"],
    operation_id = "ping"
)]
#[get("/ping")]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("pong")
}
