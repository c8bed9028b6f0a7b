//! Cross-origin middleware for the `/v1` scope.
//!
//! The policy is permissive but credential-aware: the request origin is
//! echoed back rather than answered with a wildcard, so browsers accept
//! credentialed requests. Preflights are answered directly with a 600-second
//! cache; other requests pass through and pick up the response headers.

use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::Method;
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, Accept, Accept-Language, \
     Access-Control-Request-Headers, Access-Control-Request-Method, Cache-Control, \
     Connection, Origin, Pragma, Referer, Sec-Fetch-Mode, User-Agent";
const EXPOSE_HEADERS: &str = "Content-Length, X-Kuma-Revision";
const MAX_AGE_SECONDS: &str = "600";

/// Cross-origin middleware echoing the request origin.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use quizbank::middleware::Cors;
///
/// let app = App::new().service(web::scope("/v1").wrap(Cors));
/// ```
#[derive(Clone)]
pub struct Cors;

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware { service }))
    }
}

/// Service wrapper produced by [`Cors`].
pub struct CorsMiddleware<S> {
    service: S,
}

fn is_preflight(req: &ServiceRequest) -> bool {
    req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let origin = req.headers().get(header::ORIGIN).cloned();

        if is_preflight(&req) {
            let mut builder = HttpResponse::NoContent();
            if let Some(origin) = origin {
                builder.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin));
                builder.insert_header((header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"));
            }
            builder.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS));
            builder.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS));
            builder.insert_header((header::ACCESS_CONTROL_MAX_AGE, MAX_AGE_SECONDS));
            builder.insert_header((header::VARY, "Origin"));

            let res = req.into_response(builder.finish()).map_into_right_body();
            return Box::pin(ready(Ok(res)));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?.map_into_left_body();
            if let Some(origin) = origin {
                let headers = res.response_mut().headers_mut();
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                );
                headers.insert(
                    header::ACCESS_CONTROL_EXPOSE_HEADERS,
                    HeaderValue::from_static(EXPOSE_HEADERS),
                );
                headers.append(header::VARY, HeaderValue::from_static("Origin"));
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new().service(
            web::scope("/v1")
                .wrap(Cors)
                .route("/echo", web::get().to(|| async { HttpResponse::Ok().body("hi") })),
        )
    }

    #[actix_web::test]
    async fn echoes_request_origin() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::get()
            .uri("/v1/echo")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[actix_web::test]
    async fn skips_headers_without_origin() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::get().uri("/v1/echo").to_request();
        let res = test::call_service(&app, req).await;

        assert!(
            !res.headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[actix_web::test]
    async fn answers_preflight_directly() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::with_uri("/v1/echo")
            .method(Method::OPTIONS)
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::NO_CONTENT);
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_METHODS)
                .and_then(|v| v.to_str().ok()),
            Some(ALLOW_METHODS)
        );
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_MAX_AGE)
                .and_then(|v| v.to_str().ok()),
            Some("600")
        );
    }
}
