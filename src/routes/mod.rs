//! HTTP handlers and helpers shared between them.

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod tag;

/// Registers every page handler.
///
/// A query string that does not deserialize (e.g. a repeated `page`) is an
/// invalid page value like any other and gets the not-found page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(tag::show_tag);
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejecting query string '{}': {err}", req.query_string());
    let response = match req.app_data::<web::Data<Tera>>() {
        Some(tera) => not_found(tera),
        None => HttpResponse::NotFound().finish(),
    };
    InternalError::from_response(err, response).into()
}

fn render_with_status(
    tera: &Tera,
    status: StatusCode,
    template: &str,
    context: &Context,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Renders `template` with a `200 OK` status.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, StatusCode::OK, template, context)
}

/// Renders the generic not-found page.
pub fn not_found(tera: &Tera) -> HttpResponse {
    let mut context = Context::new();
    context.insert("title", "页面未找到");
    render_with_status(tera, StatusCode::NOT_FOUND, "errors/404.html", &context)
}

/// Maps a service failure onto the response the visitor sees.
pub fn service_error_response(tera: &Tera, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => not_found(tera),
        ServiceError::Repository(err) => {
            log::error!("Backend request failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
