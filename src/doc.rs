//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. The
//! generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{NewQuestion, NewSubject, Question, QuestionPatch, Subject, SubjectPatch};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quizbank API",
        description = "CRUD over subjects and questions with a uniform {status, msg, data} envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::subjects::list_subjects,
        crate::inbound::http::subjects::get_subject,
        crate::inbound::http::subjects::create_subject,
        crate::inbound::http::subjects::update_subject,
        crate::inbound::http::subjects::delete_subject,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::get_question,
        crate::inbound::http::questions::create_question,
        crate::inbound::http::questions::update_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::health::ping,
    ),
    components(schemas(
        Subject,
        NewSubject,
        SubjectPatch,
        Question,
        NewQuestion,
        QuestionPatch,
    )),
    tags(
        (name = "subject", description = "Subject CRUD"),
        (name = "question", description = "Question CRUD"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
