use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::dto::tag::TagPageQuery;
use crate::repository::{MemoizedPoemReader, PoemReader};
use crate::routes::{render_template, service_error_response};
use crate::services::tag as tag_service;

#[derive(Deserialize)]
struct TagPageQueryParams {
    page: Option<String>,
}

#[get("/tag/{id}")]
pub async fn show_tag(
    id: web::Path<String>,
    params: web::Query<TagPageQueryParams>,
    reader: web::Data<dyn PoemReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // Metadata and body validate on their own but share one backend read.
    let reader = MemoizedPoemReader::new(reader.get_ref());
    let query = TagPageQuery {
        id: id.into_inner(),
        page: params.into_inner().page,
    };

    let metadata = match tag_service::load_tag_metadata(&reader, &query).await {
        Ok(metadata) => metadata,
        Err(err) => return service_error_response(&tera, err),
    };

    let page = match tag_service::load_tag_page(&reader, &query).await {
        Ok(page) => page,
        Err(err) => return service_error_response(&tera, err),
    };

    let mut context = Context::new();
    context.insert("title", &metadata.title);
    context.insert("page", &page);

    render_template(&tera, "tag/index.html", &context)
}
