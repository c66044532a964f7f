//! Decoding of the `GET /api/domains` response body.
//!
//! Envelope: `{ "success": bool, "count": int, "data": [RawCertRecord] }`.
//! A malformed record rejects the whole batch; nothing is skipped.

use serde_json::Value;
use tracing::warn;

use crate::error::{FeedError, FeedResult};
use crate::types::RawCertRecord;

/// Decode a raw response body into records.
pub fn parse_feed_body(body: &[u8]) -> FeedResult<Vec<RawCertRecord>> {
    let value: Value = serde_json::from_slice(body).map_err(FeedError::InvalidJson)?;
    parse_feed_value(value)
}

/// Decode an already parsed envelope into records.
pub fn parse_feed_value(mut envelope: Value) -> FeedResult<Vec<RawCertRecord>> {
    if envelope.get("success").and_then(Value::as_bool) != Some(true) {
        let message = envelope
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(FeedError::Unsuccessful { message });
    }

    let items = match envelope.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => return Err(FeedError::DataNotArray),
    };

    if let Some(count) = envelope.get("count").and_then(Value::as_u64) {
        if count != items.len() as u64 {
            warn!(count, received = items.len(), "Feed count does not match data length");
        }
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_record(index, item))
        .collect()
}

fn decode_record(index: usize, item: Value) -> FeedResult<RawCertRecord> {
    let record: RawCertRecord =
        serde_json::from_value(item).map_err(|e| FeedError::MalformedRecord {
            index,
            reason: e.to_string(),
        })?;

    if record.domain.trim().is_empty() {
        return Err(FeedError::MalformedRecord {
            index,
            reason: "domain is empty".to_string(),
        });
    }

    Ok(record)
}
