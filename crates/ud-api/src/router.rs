use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiErrorResponse};
use crate::rest::{dashboard, static_files, usage};
use crate::state::AppState;

async fn not_found() -> ApiErrorResponse {
    ApiErrorResponse {
        status: axum::http::StatusCode::NOT_FOUND,
        error: ApiError::new("NOT_FOUND", "Not Found"),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // `get` also answers HEAD; only GET is served.
        .route("/", get(dashboard::dashboard).head(not_found))
        .route("/dashboard", get(dashboard::dashboard).head(not_found))
        .route("/api/model-usage", get(usage::model_usage).head(not_found))
        .route("/static/", get(static_files::static_file).head(not_found))
        .route(
            "/static/{*path}",
            get(static_files::static_file).head(not_found),
        )
        // Unknown paths and unsupported methods on known paths are both 404.
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
