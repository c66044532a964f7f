//! Holder of the current snapshot and the fetch boundary.
//!
//! Readers clone an `Arc<Snapshot>` and keep using it even while a refresh
//! swaps in a new one, so they never observe a half-built collection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::snapshot::{CatalogView, Snapshot};
use crate::source::FeedSource;
use crate::types::QueryState;

/// Result of one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Loaded { total: usize },
    Failed { error: CatalogError },
}

impl FetchOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded { .. })
    }
}

#[derive(Clone, Default)]
struct Current {
    snapshot: Arc<Snapshot>,
    error: Option<CatalogError>,
}

/// Catalog state shared by all readers.
pub struct CatalogStore<F> {
    source: F,
    current: RwLock<Current>,
    loading: AtomicBool,
    // At most one outstanding fetch.
    refresh_gate: Mutex<()>,
}

impl<F: FeedSource> CatalogStore<F> {
    /// Create a store with an empty snapshot. Nothing is fetched yet.
    pub fn new(source: F) -> Self {
        Self {
            source,
            current: RwLock::new(Current::default()),
            loading: AtomicBool::new(false),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Fetch the feed and replace the snapshot wholesale.
    ///
    /// On failure the snapshot is reset to empty and the error is kept as
    /// the last error; on success the last error is cleared.
    pub async fn refresh(&self) -> FetchOutcome {
        let _gate = self.refresh_gate.lock().await;
        let _loading = LoadingFlag::raise(&self.loading);

        info!("Refreshing domain catalog");
        match self.source.fetch_records().await {
            Ok(records) => {
                let snapshot = Snapshot::from_records(&records);
                let total = snapshot.total();
                info!(records = records.len(), domains = total, "Catalog snapshot loaded");

                self.replace(Arc::new(snapshot), None);
                FetchOutcome::Loaded { total }
            }
            Err(e) => {
                let error = CatalogError::from(&e);
                warn!(kind = ?error.kind, error = %e, "Catalog refresh failed");

                self.replace(Arc::new(Snapshot::empty()), Some(error.clone()));
                FetchOutcome::Failed { error }
            }
        }
    }

    pub fn source(&self) -> &F {
        &self.source
    }
}

impl<F> CatalogStore<F> {
    /// The current snapshot. Stays valid after later refreshes.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.read().snapshot
    }

    pub fn last_error(&self) -> Option<CatalogError> {
        self.read().error
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Filtered view of the current snapshot with loading and error state.
    pub fn view(&self, query: &QueryState) -> CatalogView {
        let current = self.read();
        let mut view = current.snapshot.view(query);
        view.loading = self.is_loading();
        view.error = current.error;
        view
    }

    fn read(&self) -> Current {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, snapshot: Arc<Snapshot>, error: Option<CatalogError>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Current { snapshot, error };
    }
}

/// Sets the loading flag for its lifetime, including when the refresh
/// future is dropped mid-fetch.
struct LoadingFlag<'a>(&'a AtomicBool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
