use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    domains: usize,
    loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_error: Option<String>,
}

/// Health check endpoint
///
/// Feed failures are reported under `last_error`; the service itself stays
/// healthy and keeps serving an empty view.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: "CT Domain Catalog".to_string(),
            domains: state.catalog.snapshot().total(),
            loading: state.catalog.is_loading(),
            last_error: state.catalog.last_error().map(|e| e.message),
        }),
    )
}
