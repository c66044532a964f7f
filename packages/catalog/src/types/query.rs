//! Query state driving the filter engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinel shown first in the suffix vocabulary.
pub const ALL_SUFFIXES: &str = "all";

/// Sentinel shown first in the tag vocabulary.
pub const ALL_TAGS: &str = "all tags";

/// A single-choice facet selection: either no filter or one value.
///
/// Parses from the vocabulary strings. Both sentinels (`all`, `all tags`)
/// and the empty string mean [`Selection::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | ALL_SUFFIXES | ALL_TAGS => Selection::All,
            _ => Selection::Only(value),
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL_SUFFIXES.to_string(),
            Selection::Only(v) => v,
        }
    }
}

/// Bucket over the length of a domain's short subdomain list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountBucket {
    #[default]
    All,
    Zero,
    OneToThree,
    FourPlus,
}

impl CountBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountBucket::All => "all",
            CountBucket::Zero => "zero",
            CountBucket::OneToThree => "one-to-three",
            CountBucket::FourPlus => "four-plus",
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        match self {
            CountBucket::All => true,
            CountBucket::Zero => count == 0,
            CountBucket::OneToThree => (1..=3).contains(&count),
            CountBucket::FourPlus => count >= 4,
        }
    }
}

impl fmt::Display for CountBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown subdomain-count bucket name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subdomain count bucket: {0:?}")]
pub struct UnknownBucket(pub String);

impl FromStr for CountBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(CountBucket::All),
            "zero" | "0" => Ok(CountBucket::Zero),
            "one-to-three" | "1-3" => Ok(CountBucket::OneToThree),
            "four-plus" | "4+" => Ok(CountBucket::FourPlus),
            other => Err(UnknownBucket(other.to_string())),
        }
    }
}

impl TryFrom<String> for CountBucket {
    type Error = UnknownBucket;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountBucket> for String {
    fn from(bucket: CountBucket) -> Self {
        bucket.as_str().to_string()
    }
}

/// The four independent filter inputs.
///
/// Changing one field never resets the others. Deserializes from the
/// query-string keys `search`, `suffix`, `count` and `tag`; missing keys
/// fall back to "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    #[serde(rename = "search", alias = "searchTerm")]
    pub search_term: String,

    #[serde(rename = "suffix", alias = "suffixFilter")]
    pub suffix_filter: Selection,

    #[serde(rename = "count", alias = "subdomainCountBucket")]
    pub count_bucket: CountBucket,

    #[serde(rename = "tag", alias = "tagFilter")]
    pub tag_filter: Selection,
}

impl QueryState {
    /// Query that matches every domain.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<Selection>) -> Self {
        self.suffix_filter = suffix.into();
        self
    }

    pub fn with_count(mut self, bucket: CountBucket) -> Self {
        self.count_bucket = bucket;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<Selection>) -> Self {
        self.tag_filter = tag.into();
        self
    }

    /// True when no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.suffix_filter.is_all()
            && self.count_bucket == CountBucket::All
            && self.tag_filter.is_all()
    }
}
