//! Immutable, fully derived view of one feed load.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::facets::Facets;
use crate::filter::filter;
use crate::normalize::normalize;
use crate::types::{Domain, QueryState, RawCertRecord};

/// Domains of one successful fetch plus their vocabularies.
///
/// Never mutated after construction; a new fetch builds a new snapshot.
/// The facets are computed once here, so they can't go stale.
#[derive(Debug, Clone)]
pub struct Snapshot {
    domains: Vec<Domain>,
    facets: Facets,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Snapshot {
    /// Snapshot with no domains, used before the first load and after failures.
    pub fn empty() -> Self {
        Self {
            domains: Vec::new(),
            facets: Facets::default(),
            loaded_at: None,
        }
    }

    /// Normalize and tag every record, one domain per record.
    pub fn from_records(records: &[RawCertRecord]) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.cert_id.as_str()) {
                warn!(
                    cert_id = %record.cert_id,
                    domain = %record.domain,
                    "Duplicate certificate id in feed"
                );
            }
        }

        let domains: Vec<Domain> = records.iter().map(normalize).collect();
        debug!(domains = domains.len(), "Normalized feed records");

        Self::from_domains(domains)
    }

    pub fn from_domains(domains: Vec<Domain>) -> Self {
        let facets = Facets::from_domains(&domains);
        Self {
            domains,
            facets,
            loaded_at: Some(Utc::now()),
        }
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn total(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn filter(&self, query: &QueryState) -> Vec<&Domain> {
        filter(&self.domains, query)
    }

    /// Presentation payload for `query`.
    pub fn view(&self, query: &QueryState) -> CatalogView {
        let domains: Vec<Domain> = self.filter(query).into_iter().cloned().collect();

        CatalogView {
            total: self.total(),
            filtered: domains.len(),
            domains,
            tags: self.facets.tags.clone(),
            suffixes: self.facets.suffixes.clone(),
            loading: false,
            error: None,
            loaded_at: self.loaded_at,
        }
    }
}

/// What the display layer receives for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub domains: Vec<Domain>,
    pub tags: Vec<String>,
    pub suffixes: Vec<String>,
    pub total: usize,
    pub filtered: usize,
    pub loading: bool,
    pub error: Option<CatalogError>,
    pub loaded_at: Option<DateTime<Utc>>,
}
