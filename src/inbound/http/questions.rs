//! Question resource handlers.
//!
//! ```text
//! GET    /v1/question?subjectId=
//! GET    /v1/question/{id}
//! POST   /v1/question
//! PUT    /v1/question/{id}
//! DELETE /v1/question/{id}
//! ```
//!
//! The whole router is optional: the entrypoint only mounts it when question
//! support is enabled in configuration.

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, NewQuestion, Question, QuestionPatch};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, parse_id, run_blocking};

fn question_not_found() -> Error {
    Error::not_found("Question not found")
}

/// Equality filter for the list endpoint. The raw string is kept so a
/// non-numeric value matches no rows instead of failing extraction; a blank
/// value is treated as no filter.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
    pub subject_id: Option<String>,
}

/// List questions, optionally narrowed to one subject.
#[utoipa::path(
    get,
    path = "/v1/question",
    params(QuestionFilter),
    responses((status = 200, description = "Matching questions", body = Envelope<Vec<Question>>)),
    tags = ["question"],
    operation_id = "listQuestions"
)]
#[get("")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    filter: web::Query<QuestionFilter>,
) -> ApiResult<web::Json<Envelope<Vec<Question>>>> {
    let repo = state.questions.clone();
    let subject_id = filter.into_inner().subject_id;

    let questions = run_blocking(move || match subject_id.as_deref().map(str::trim) {
        // A blank value is as good as no filter at all.
        None | Some("") => repo.list(),
        Some(raw) => match raw.parse::<i32>() {
            Ok(subject_id) => repo.list_by_subject(subject_id),
            // Numeric coercion: a garbage filter equals nothing.
            Err(_) => Ok(Vec::new()),
        },
    })
    .await?;

    Ok(web::Json(Envelope::ok(questions)))
}

/// Fetch one question by id.
#[utoipa::path(
    get,
    path = "/v1/question/{id}",
    params(("id" = String, Path, description = "Question id; non-numeric values match nothing")),
    responses(
        (status = 200, description = "Question", body = Envelope<Question>),
        (status = 404, description = "No such question")
    ),
    tags = ["question"],
    operation_id = "getQuestion"
)]
#[get("/{id}")]
pub async fn get_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<Question>>> {
    let Some(id) = parse_id(&path) else {
        return Err(question_not_found());
    };

    let repo = state.questions.clone();
    let question = run_blocking(move || repo.find(id))
        .await?
        .ok_or_else(question_not_found)?;
    Ok(web::Json(Envelope::ok(question)))
}

/// Create a question with a caller-supplied id. Colliding with an existing id
/// is a store error (500), never a silent overwrite. The referenced subject
/// is not checked for existence.
#[utoipa::path(
    post,
    path = "/v1/question",
    request_body = NewQuestion,
    responses(
        (status = 200, description = "Created question", body = Envelope<Question>),
        (status = 500, description = "Store rejected the write")
    ),
    tags = ["question"],
    operation_id = "createQuestion"
)]
#[post("")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<NewQuestion>,
) -> ApiResult<web::Json<Envelope<Question>>> {
    let repo = state.questions.clone();
    let payload = payload.into_inner();
    let question = run_blocking(move || repo.create(payload)).await?;
    Ok(web::Json(Envelope::ok(question)))
}

/// Update a question; only supplied fields are overwritten.
#[utoipa::path(
    put,
    path = "/v1/question/{id}",
    params(("id" = String, Path, description = "Question id")),
    request_body = QuestionPatch,
    responses(
        (status = 200, description = "Updated question", body = Envelope<Question>),
        (status = 404, description = "No such question")
    ),
    tags = ["question"],
    operation_id = "updateQuestion"
)]
#[put("/{id}")]
pub async fn update_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<QuestionPatch>,
) -> ApiResult<web::Json<Envelope<Question>>> {
    let Some(id) = parse_id(&path) else {
        return Err(question_not_found());
    };

    let repo = state.questions.clone();
    let patch = payload.into_inner();
    let question = run_blocking(move || repo.update(id, patch))
        .await?
        .ok_or_else(question_not_found)?;
    Ok(web::Json(Envelope::ok(question)))
}

/// Delete a question by id.
#[utoipa::path(
    delete,
    path = "/v1/question/{id}",
    params(("id" = String, Path, description = "Question id")),
    responses(
        (status = 200, description = "Deleted", body = Envelope<Question>),
        (status = 404, description = "No such question")
    ),
    tags = ["question"],
    operation_id = "deleteQuestion"
)]
#[delete("/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<Question>>> {
    let Some(id) = parse_id(&path) else {
        return Err(question_not_found());
    };

    let repo = state.questions.clone();
    let removed = run_blocking(move || repo.delete(id)).await?;
    if !removed {
        return Err(question_not_found());
    }
    Ok(web::Json(Envelope::ok_empty()))
}
