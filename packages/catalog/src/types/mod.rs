pub mod domain;
pub mod query;
pub mod record;

pub use domain::Domain;
pub use query::{CountBucket, QueryState, Selection, UnknownBucket, ALL_SUFFIXES, ALL_TAGS};
pub use record::RawCertRecord;
