use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FeedResult;
use crate::types::RawCertRecord;

/// Anything that can deliver the full raw feed in one call.
///
/// Implemented by `feed_client::FeedClient` for HTTP and by
/// [`crate::testing::MockFeed`] for tests.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_records(&self) -> FeedResult<Vec<RawCertRecord>>;
}

#[async_trait]
impl<T: FeedSource + ?Sized> FeedSource for Arc<T> {
    async fn fetch_records(&self) -> FeedResult<Vec<RawCertRecord>> {
        (**self).fetch_records().await
    }
}
