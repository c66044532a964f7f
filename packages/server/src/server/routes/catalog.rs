//! Catalog endpoints.
//!
//! GET  /api/catalog?search=&suffix=&count=&tag=
//! POST /api/catalog/refresh

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use catalog::{CatalogView, FetchOutcome, QueryState};

use crate::server::app::AppState;

/// Filtered domains, both vocabularies and summary counts.
///
/// Missing query keys mean "no filter"; an unknown `count` bucket is
/// rejected with 400 by the `Query` extractor.
pub async fn catalog_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<QueryState>,
) -> Json<CatalogView> {
    let view = state.catalog.view(&query);
    tracing::debug!(
        total = view.total,
        filtered = view.filtered,
        search = %query.search_term,
        "Catalog view"
    );
    Json(view)
}

/// Re-fetch the feed and replace the snapshot.
///
/// Returns 502 when the feed failed; the catalog is then empty until the
/// next successful refresh.
pub async fn refresh_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<FetchOutcome>) {
    let outcome = state.catalog.refresh().await;
    let status = match outcome {
        FetchOutcome::Loaded { .. } => StatusCode::OK,
        FetchOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    };
    (status, Json(outcome))
}
