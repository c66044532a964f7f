//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use catalog::{CatalogStore, FeedSource};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{catalog_handler, health_handler, refresh_handler};

/// Catalog store over any feed, shared by all handlers.
pub type SharedCatalog = Arc<CatalogStore<Arc<dyn FeedSource>>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
}

/// Build the Axum application router
pub fn build_app(catalog: SharedCatalog, allowed_origins: &[String]) -> Router {
    let app_state = AppState { catalog };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/catalog", get(catalog_handler))
        .route("/api/catalog/refresh", post(refresh_handler))
        .route("/api/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Any origin when no list is configured.
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.is_empty() {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
