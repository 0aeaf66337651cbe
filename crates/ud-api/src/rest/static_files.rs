use axum::http::Uri;

use crate::error::ApiErrorResponse;

/// No static assets are shipped yet; every request under `/static/` is a 404.
pub async fn static_file(uri: Uri) -> ApiErrorResponse {
    tracing::debug!("static asset requested: {}", uri.path());
    ApiErrorResponse::not_found("Static file")
}
