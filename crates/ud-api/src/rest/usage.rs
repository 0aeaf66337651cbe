use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ud_report::UsageReport;

use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// Parse the report fresh on every call and return the usage envelope.
pub async fn model_usage(State(state): State<AppState>) -> Result<Response, ApiErrorResponse> {
    let path = &state.config.report_path;
    let agents = ud_report::load_report(path, state.config.max_file_bytes)
        .await
        .map_err(|e| {
            tracing::warn!(
                "failed to load report {} [{}]: {}",
                path.display(),
                e.error_code(),
                e
            );
            ApiErrorResponse::internal(format!("Error parsing dashboard data: {}", e))
        })?;

    let report = UsageReport::new(agents);
    Ok((
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(report),
    )
        .into_response())
}
