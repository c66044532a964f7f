//! Certificate-transparency domain catalog.
//!
//! Turns the raw CT feed into a searchable, faceted collection of domains.
//!
//! # Usage
//!
//! ```rust,ignore
//! use catalog::{CatalogStore, CountBucket, QueryState};
//!
//! let store = CatalogStore::new(feed);
//! store.refresh().await;
//!
//! let query = QueryState::new()
//!     .with_suffix(".co.il")
//!     .with_count(CountBucket::FourPlus);
//! let view = store.view(&query);
//! println!("{} of {} domains", view.filtered, view.total);
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - raw record to [`Domain`], short subdomain derivation
//! - [`tagger`] - keyword table classification
//! - [`facets`] - tag and suffix vocabularies
//! - [`filter`] - the four query predicates
//! - [`snapshot`] - immutable derived state of one load
//! - [`store`] - current snapshot, last error, refresh
//! - [`feed`] - response body decoding
//! - [`testing`] - scriptable feed for tests

pub mod error;
pub mod facets;
pub mod feed;
pub mod filter;
pub mod normalize;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod tagger;
pub mod testing;
pub mod types;

pub use error::{CatalogError, FailureKind, FeedError, FeedResult};
pub use facets::{suffix_vocabulary, tag_vocabulary, Facets};
pub use feed::{parse_feed_body, parse_feed_value};
pub use filter::filter;
pub use normalize::normalize;
pub use snapshot::{CatalogView, Snapshot};
pub use source::FeedSource;
pub use store::{CatalogStore, FetchOutcome};
pub use tagger::{tag, KEYWORD_TAGS};
pub use types::{
    CountBucket, Domain, QueryState, RawCertRecord, Selection, UnknownBucket, ALL_SUFFIXES,
    ALL_TAGS,
};
