use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Canonical catalog entry derived from one [`RawCertRecord`].
///
/// Built once per record by [`crate::normalize`] and never mutated.
///
/// [`RawCertRecord`]: crate::RawCertRecord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Certificate id of the source record.
    pub id: String,

    /// Apex name, case as received.
    pub name: String,

    /// SAN entries verbatim, for full-detail display.
    pub full_subdomains: Vec<String>,

    /// SAN entries with the apex stripped; empty results and bare `www`
    /// are dropped. Never longer than `full_subdomains`.
    pub subdomains: Vec<String>,

    /// Classification labels. Ordering carries no meaning.
    pub tags: BTreeSet<String>,

    /// `last_seen` of the source record.
    pub timestamp: String,
}

impl Domain {
    pub fn subdomain_count(&self) -> usize {
        self.subdomains.len()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
