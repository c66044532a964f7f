//! Wire types of the inbound `GET /api/domains` contract.

use serde::{Deserialize, Deserializer, Serialize};

/// One observed certificate as delivered by the ingestion feed.
///
/// `domain` and `subdomains` are required. The remaining fields are carried
/// through for display only and default to empty strings when absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCertRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cert_id: String,

    /// Primary registered name of the certificate (the apex).
    pub domain: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub issuer_cn: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub log_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub time_issued: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_seen: String,

    /// SAN entries as observed. May include the apex, `www` variants and
    /// duplicates, in no particular order.
    pub subdomains: Vec<String>,
}

impl RawCertRecord {
    /// Minimal record for a certificate id, apex and SAN list.
    pub fn new(
        cert_id: impl Into<String>,
        domain: impl Into<String>,
        subdomains: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            cert_id: cert_id.into(),
            domain: domain.into(),
            issuer_cn: String::new(),
            log_name: String::new(),
            time_issued: String::new(),
            last_seen: String::new(),
            subdomains: subdomains.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_issuer(mut self, issuer_cn: impl Into<String>) -> Self {
        self.issuer_cn = issuer_cn.into();
        self
    }

    pub fn with_log_name(mut self, log_name: impl Into<String>) -> Self {
        self.log_name = log_name.into();
        self
    }

    pub fn with_time_issued(mut self, time_issued: impl Into<String>) -> Self {
        self.time_issued = time_issued.into();
        self
    }

    pub fn with_last_seen(mut self, last_seen: impl Into<String>) -> Self {
        self.last_seen = last_seen.into();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
