//! Subject resource handlers.
//!
//! ```text
//! GET    /v1/subject
//! GET    /v1/subject/{id}
//! POST   /v1/subject
//! PUT    /v1/subject/{id}
//! DELETE /v1/subject/{id}
//! ```

use actix_web::{delete, get, post, put, web};

use crate::domain::{Error, NewSubject, Subject, SubjectPatch};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, parse_id, run_blocking};

fn subject_not_found() -> Error {
    Error::not_found("Subject not found")
}

/// List every subject.
#[utoipa::path(
    get,
    path = "/v1/subject",
    responses((status = 200, description = "All subjects", body = Envelope<Vec<Subject>>)),
    tags = ["subject"],
    operation_id = "listSubjects"
)]
#[get("")]
pub async fn list_subjects(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Envelope<Vec<Subject>>>> {
    let repo = state.subjects.clone();
    let subjects = run_blocking(move || repo.list()).await?;
    Ok(web::Json(Envelope::ok(subjects)))
}

/// Fetch one subject by id.
#[utoipa::path(
    get,
    path = "/v1/subject/{id}",
    params(("id" = String, Path, description = "Subject id; non-numeric values match nothing")),
    responses(
        (status = 200, description = "Subject", body = Envelope<Subject>),
        (status = 404, description = "No such subject")
    ),
    tags = ["subject"],
    operation_id = "getSubject"
)]
#[get("/{id}")]
pub async fn get_subject(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<Subject>>> {
    let Some(id) = parse_id(&path) else {
        return Err(subject_not_found());
    };

    let repo = state.subjects.clone();
    let subject = run_blocking(move || repo.find(id))
        .await?
        .ok_or_else(subject_not_found)?;
    Ok(web::Json(Envelope::ok(subject)))
}

/// Create a subject. Body fields are forwarded verbatim; missing required
/// fields surface as store errors, not 400s.
#[utoipa::path(
    post,
    path = "/v1/subject",
    request_body = NewSubject,
    responses(
        (status = 200, description = "Created subject", body = Envelope<Subject>),
        (status = 500, description = "Store rejected the write")
    ),
    tags = ["subject"],
    operation_id = "createSubject"
)]
#[post("")]
pub async fn create_subject(
    state: web::Data<HttpState>,
    payload: web::Json<NewSubject>,
) -> ApiResult<web::Json<Envelope<Subject>>> {
    let repo = state.subjects.clone();
    let payload = payload.into_inner();
    let subject = run_blocking(move || repo.create(payload)).await?;
    Ok(web::Json(Envelope::ok(subject)))
}

/// Update a subject; only supplied fields are overwritten.
#[utoipa::path(
    put,
    path = "/v1/subject/{id}",
    params(("id" = String, Path, description = "Subject id")),
    request_body = SubjectPatch,
    responses(
        (status = 200, description = "Updated subject", body = Envelope<Subject>),
        (status = 404, description = "No such subject")
    ),
    tags = ["subject"],
    operation_id = "updateSubject"
)]
#[put("/{id}")]
pub async fn update_subject(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SubjectPatch>,
) -> ApiResult<web::Json<Envelope<Subject>>> {
    let Some(id) = parse_id(&path) else {
        return Err(subject_not_found());
    };

    let repo = state.subjects.clone();
    let patch = payload.into_inner();
    let subject = run_blocking(move || repo.update(id, patch))
        .await?
        .ok_or_else(subject_not_found)?;
    Ok(web::Json(Envelope::ok(subject)))
}

/// Delete a subject. Questions referencing it are left untouched.
#[utoipa::path(
    delete,
    path = "/v1/subject/{id}",
    params(("id" = String, Path, description = "Subject id")),
    responses(
        (status = 200, description = "Deleted", body = Envelope<Subject>),
        (status = 404, description = "No such subject")
    ),
    tags = ["subject"],
    operation_id = "deleteSubject"
)]
#[delete("/{id}")]
pub async fn delete_subject(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<Subject>>> {
    let Some(id) = parse_id(&path) else {
        return Err(subject_not_found());
    };

    let repo = state.subjects.clone();
    let removed = run_blocking(move || repo.delete(id)).await?;
    if !removed {
        return Err(subject_not_found());
    }
    Ok(web::Json(Envelope::ok_empty()))
}
