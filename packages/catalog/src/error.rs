//! Typed errors for the feed boundary.
//!
//! The engine itself is total over well-formed input. Everything that can go
//! wrong happens while fetching and decoding the raw feed, and is reported
//! through [`FeedError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fetching or decoding the raw feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure, timeout, or an unreadable response body
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Feed answered with a non-2xx status
    #[error("feed returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Envelope did not report `success: true`
    #[error("feed reported failure: {message}")]
    Unsuccessful { message: String },

    /// Envelope `data` field is missing or not an array
    #[error("feed payload has no data array")]
    DataNotArray,

    /// Body is not JSON
    #[error("feed payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A single record violated the data contract; the batch is rejected
    #[error("record {index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Coarse failure class shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The feed could not be reached or refused the request.
    Transport,
    /// The feed answered but the payload could not be used.
    Shape,
}

impl FeedError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FeedError::Transport(_) | FeedError::Status { .. } => FailureKind::Transport,
            FeedError::Unsuccessful { .. }
            | FeedError::DataNotArray
            | FeedError::InvalidJson(_)
            | FeedError::MalformedRecord { .. } => FailureKind::Shape,
        }
    }

    /// Human-readable sentence for display next to an empty result view.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::Transport(e) => format!("Could not reach the domain feed: {}", e),
            FeedError::Status { status, .. } => {
                format!("The domain feed responded with HTTP {}", status)
            }
            FeedError::Unsuccessful { message } if message.is_empty() => {
                "The domain feed reported an error".to_string()
            }
            FeedError::Unsuccessful { message } => {
                format!("The domain feed reported an error: {}", message)
            }
            FeedError::DataNotArray => "The domain feed returned no domain list".to_string(),
            FeedError::InvalidJson(_) => "The domain feed returned an unreadable payload".to_string(),
            FeedError::MalformedRecord { index, reason } => {
                format!("The domain feed contained a malformed record (#{}): {}", index, reason)
            }
        }
    }
}

/// The "last error" value kept alongside the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogError {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&FeedError> for CatalogError {
    fn from(err: &FeedError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

impl From<FeedError> for CatalogError {
    fn from(err: FeedError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for feed operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;
