//! Raw record to [`Domain`] conversion.

use crate::tagger::tag;
use crate::types::{Domain, RawCertRecord};

/// Build the canonical [`Domain`] for one certificate observation.
///
/// Tags are computed from the apex and the full SAN list.
pub fn normalize(record: &RawCertRecord) -> Domain {
    let subdomains = record
        .subdomains
        .iter()
        .filter_map(|s| short_subdomain(s, &record.domain))
        .collect();

    Domain {
        id: record.cert_id.clone(),
        name: record.domain.clone(),
        full_subdomains: record.subdomains.clone(),
        subdomains,
        tags: tag(&record.domain, record.subdomains.as_slice()),
        timestamp: record.last_seen.clone(),
    }
}

/// Short display form of a SAN entry, or `None` if nothing useful remains.
///
/// Drops a trailing `apex` (ASCII case-insensitive, optionally preceded by
/// one `.`), trims whitespace, and discards empty results and bare `www`.
pub fn short_subdomain(name: &str, apex: &str) -> Option<String> {
    let short = strip_apex(name, apex).trim();
    if short.is_empty() || short == "www" {
        return None;
    }
    Some(short.to_string())
}

fn strip_apex<'a>(name: &'a str, apex: &str) -> &'a str {
    if apex.is_empty() || name.len() < apex.len() {
        return name;
    }
    let cut = name.len() - apex.len();
    if !name.is_char_boundary(cut) || !name[cut..].eq_ignore_ascii_case(apex) {
        return name;
    }
    let rest = &name[..cut];
    rest.strip_suffix('.').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(domain: &str, subdomains: &[&str]) -> RawCertRecord {
        RawCertRecord::new("cert-1", domain, subdomains.iter().copied())
            .with_last_seen("2024-05-01T10:00:00")
    }

    #[test]
    fn test_strips_apex_case_insensitively() {
        assert_eq!(short_subdomain("api.example.com", "Example.COM"), Some("api".to_string()));
        assert_eq!(short_subdomain("API.EXAMPLE.COM", "example.com"), Some("API".to_string()));
    }

    #[test]
    fn test_apex_itself_is_dropped() {
        assert_eq!(short_subdomain("example.com", "example.com"), None);
    }

    #[test]
    fn test_www_is_dropped_but_deeper_www_is_kept() {
        assert_eq!(short_subdomain("www.example.com", "example.com"), None);
        assert_eq!(
            short_subdomain("www.shop.example.com", "example.com"),
            Some("www.shop".to_string())
        );
    }

    #[test]
    fn test_unrelated_names_are_kept_verbatim() {
        assert_eq!(
            short_subdomain("mail.other.org", "example.com"),
            Some("mail.other.org".to_string())
        );
    }

    #[test]
    fn test_remainder_is_trimmed() {
        assert_eq!(short_subdomain(" dev .example.com", "example.com"), Some("dev".to_string()));
        assert_eq!(short_subdomain("   .example.com", "example.com"), None);
    }

    #[test]
    fn test_only_a_single_separator_is_removed() {
        assert_eq!(short_subdomain("a..example.com", "example.com"), Some("a.".to_string()));
    }

    #[test]
    fn test_non_ascii_names_do_not_panic() {
        assert_eq!(short_subdomain("ü", "example.com"), Some("ü".to_string()));
        assert_eq!(short_subdomain("ééé.com", "é.com"), Some("éé".to_string()));
    }

    #[test]
    fn test_normalize_assigns_fields() {
        let domain = normalize(&record(
            "example.co.il",
            &["example.co.il", "www.example.co.il", "api.example.co.il", "api.example.co.il"],
        ));

        assert_eq!(domain.id, "cert-1");
        assert_eq!(domain.name, "example.co.il");
        assert_eq!(domain.full_subdomains.len(), 4);
        // duplicates survive normalization
        assert_eq!(domain.subdomains, vec!["api", "api"]);
        assert_eq!(domain.timestamp, "2024-05-01T10:00:00");
        assert!(domain.tags.contains("api"));
    }

    #[test]
    fn test_normalize_preserves_order() {
        let domain = normalize(&record("x.com", &["b.x.com", "x.com", "a.x.com", "c.x.com"]));
        assert_eq!(domain.subdomains, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_normalize_empty_subdomains() {
        let domain = normalize(&record("example.com", &[]));
        assert!(domain.subdomains.is_empty());
        assert!(domain.full_subdomains.is_empty());
    }
}
