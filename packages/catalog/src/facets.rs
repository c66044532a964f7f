//! Filter vocabularies derived from the loaded domains.
//!
//! Both vocabularies are pure functions of the collection, so a control
//! built from them only ever offers values that match at least one domain.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Domain, ALL_SUFFIXES, ALL_TAGS};

/// Tag and suffix vocabularies, each sorted with its sentinel first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub tags: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Facets {
    pub fn from_domains(domains: &[Domain]) -> Self {
        Self {
            tags: tag_vocabulary(domains),
            suffixes: suffix_vocabulary(domains),
        }
    }
}

impl Default for Facets {
    fn default() -> Self {
        Self::from_domains(&[])
    }
}

/// Union of all tags in use, prefixed by [`ALL_TAGS`].
pub fn tag_vocabulary(domains: &[Domain]) -> Vec<String> {
    let tags: BTreeSet<&str> = domains
        .iter()
        .flat_map(|d| d.tags.iter().map(String::as_str))
        .collect();

    with_sentinel(ALL_TAGS, tags)
}

/// Union of all suffixes in use, prefixed by [`ALL_SUFFIXES`].
pub fn suffix_vocabulary(domains: &[Domain]) -> Vec<String> {
    let mut suffixes = BTreeSet::new();
    for domain in domains {
        suffixes.extend(suffixes_of(&domain.name));
    }

    with_sentinel(ALL_SUFFIXES, suffixes.iter().map(String::as_str))
}

/// `.tld` for names with at least two labels, plus `.sld.tld` for names
/// with at least three. Lower-cased.
pub fn suffixes_of(name: &str) -> Vec<String> {
    // lower-case the whole name, the way the suffix filter sees it
    let name = name.to_lowercase();
    let labels: Vec<&str> = name.split('.').collect();
    let n = labels.len();

    let mut out = Vec::with_capacity(2);
    if n >= 2 {
        out.push(format!(".{}", labels[n - 1]));
    }
    if n >= 3 {
        out.push(format!(".{}.{}", labels[n - 2], labels[n - 1]));
    }
    out
}

fn with_sentinel<'a>(
    sentinel: &'a str,
    values: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    std::iter::once(sentinel)
        .chain(values.into_iter().filter(|v| *v != sentinel))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(name: &str, tags: &[&str]) -> Domain {
        Domain {
            id: name.to_string(),
            name: name.to_string(),
            full_subdomains: vec![],
            subdomains: vec![],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn test_empty_collection_has_only_sentinels() {
        let facets = Facets::from_domains(&[]);
        assert_eq!(facets.tags, vec!["all tags"]);
        assert_eq!(facets.suffixes, vec!["all"]);
        assert_eq!(Facets::default(), facets);
    }

    #[test]
    fn test_suffixes_for_label_counts() {
        assert!(suffixes_of("localhost").is_empty());
        assert_eq!(suffixes_of("example.com"), vec![".com"]);
        assert_eq!(suffixes_of("example.co.il"), vec![".il", ".co.il"]);
        assert_eq!(suffixes_of("a.b.example.org"), vec![".org", ".example.org"]);
    }

    #[test]
    fn test_suffixes_are_lower_cased() {
        assert_eq!(suffixes_of("Example.CO.IL"), vec![".il", ".co.il"]);
    }

    #[test]
    fn test_context_sensitive_casing_offers_live_suffix() {
        // final sigma lower-cases differently inside a word than alone
        let domains = vec![domain("a.Σ", &[]), domain("shop.ΟΔΟΣ.gr", &[])];

        for suffix in suffix_vocabulary(&domains).iter().skip(1) {
            assert!(
                domains
                    .iter()
                    .any(|d| crate::filter::matches_suffix(d, suffix)),
                "dead suffix {}",
                suffix
            );
        }
        assert_eq!(suffixes_of("a.Σ"), vec![".ς"]);
    }

    #[test]
    fn test_suffix_vocabulary_is_sorted_union() {
        let domains = vec![
            domain("shop.co.il", &[]),
            domain("example.com", &[]),
            domain("gov.il", &[]),
        ];

        assert_eq!(
            suffix_vocabulary(&domains),
            vec!["all", ".co.il", ".com", ".il"]
        );
    }

    #[test]
    fn test_tag_vocabulary_is_sorted_union() {
        let domains = vec![
            domain("a.com", &["prod", "api"]),
            domain("b.com", &["api", "dev"]),
            domain("c.com", &[]),
        ];

        assert_eq!(tag_vocabulary(&domains), vec!["all tags", "api", "dev", "prod"]);
    }
}
