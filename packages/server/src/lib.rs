// CT Domain Catalog - API Core
//
// Serves the certificate-transparency domain catalog over HTTP: a filtered
// view with its facet vocabularies, an explicit refresh, and a health check.
// All catalog semantics live in the `catalog` crate; this crate wires it to
// the feed client, configuration and axum.

pub mod config;
pub mod server;

pub use config::*;
