//! Server construction and route wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::ping;
use crate::inbound::http::not_found;
use crate::inbound::http::questions::{
    create_question, delete_question, get_question, list_questions, update_question,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::subjects::{
    create_subject, delete_subject, get_subject, list_subjects, update_subject,
};
use crate::middleware::Cors;
use crate::outbound::persistence::{
    DbPool, DieselQuestionRepository, DieselSubjectRepository, PoolConfig, run_migrations,
};

/// Assemble the application: `/v1` resource routers behind CORS, the liveness
/// endpoint, and the enveloped 404 fallback.
///
/// The question router is mounted only when `enable_questions` is set,
/// replacing the original pair of alternate entrypoints with one
/// configuration flag.
pub fn build_app(
    state: web::Data<HttpState>,
    enable_questions: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let subject = web::scope("/subject")
        .service(list_subjects)
        .service(create_subject)
        .service(get_subject)
        .service(update_subject)
        .service(delete_subject);

    let mut api = web::scope("/v1").wrap(Cors).service(subject);
    if enable_questions {
        let question = web::scope("/question")
            .service(list_questions)
            .service(create_question)
            .service(get_question)
            .service(update_question)
            .service(delete_question);
        api = api.service(question);
    }

    let app = App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(api)
        .service(ping)
        .default_service(web::route().to(not_found));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Open the database, apply migrations, and construct the HTTP server.
///
/// Repositories are built once per process start and injected into every
/// worker through [`HttpState`]; there is no module-level router state.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when the pool, migrations, or socket
/// binding fail.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let pool =
        DbPool::new(PoolConfig::new(config.database_url())).map_err(std::io::Error::other)?;

    let mut conn = pool.get().map_err(std::io::Error::other)?;
    run_migrations(&mut conn).map_err(std::io::Error::other)?;
    drop(conn);

    let state = web::Data::new(HttpState::new(
        Arc::new(DieselSubjectRepository::new(pool.clone())),
        Arc::new(DieselQuestionRepository::new(pool)),
    ));

    let enable_questions = config.questions_enabled();
    let server = HttpServer::new(move || build_app(state.clone(), enable_questions))
        .bind(config.bind_addr())?
        .run();

    info!(
        addr = %config.bind_addr(),
        questions = enable_questions,
        "server listening"
    );
    Ok(server)
}
