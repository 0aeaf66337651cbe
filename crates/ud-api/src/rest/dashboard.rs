use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::{ApiError, ApiErrorResponse};
use crate::state::AppState;

/// Serve the dashboard HTML byte-for-byte.
pub async fn dashboard(State(state): State<AppState>) -> Result<Response, ApiErrorResponse> {
    let path = &state.config.dashboard_path;
    match ud_report::read_asset(path, state.config.max_file_bytes).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "text/html")], bytes).into_response()),
        Err(e) if e.is_not_found() => {
            tracing::debug!("dashboard file missing: {}", path.display());
            Err(ApiErrorResponse::not_found("Dashboard"))
        }
        Err(e) => {
            let (status, error) = ApiError::report_error(&e);
            tracing::warn!(
                "failed to read dashboard {} [{}]: {}",
                path.display(),
                error.code,
                error.message
            );
            Err((status, error).into())
        }
    }
}
