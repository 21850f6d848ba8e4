//! Miscellaneous API endpoints
//!
//! Collection artwork and service version.

use actix_web::{get, http::header, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    assets::{collection_views, find_collection, ImageSource},
    error::Error,
};

// =============================================================================
// Collections
// =============================================================================

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[get("/collections")]
pub async fn collections() -> Result<impl Responder, Error> {
    Ok(web::Json(collection_views()))
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    attempt: Option<usize>,
}

/// Next image to try after `attempt` failed loads: a redirect to the
/// candidate URL, or the inline placeholder.
#[get("/collections/{id}/image")]
pub async fn collection_image(
    path: web::Path<String>,
    query: web::Query<ImageQuery>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();
    let Some(collection) = find_collection(&id) else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Unknown collection {}", id),
        })));
    };

    let response = match collection.image_source(query.attempt.unwrap_or(0)) {
        ImageSource::Candidate(url) => HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .finish(),
        ImageSource::Placeholder(svg) => HttpResponse::Ok()
            .content_type(SVG_CONTENT_TYPE)
            .body(svg),
    };

    Ok(response)
}

// =============================================================================
// Version
// =============================================================================

#[get("/version")]
pub async fn version() -> Result<impl Responder, Error> {
    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

    Ok(web::Json(VersionResponse { version: VERSION }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse<'a> {
    pub version: Option<&'a str>,
}
