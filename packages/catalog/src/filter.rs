//! Conjunctive filtering of the domain collection.
//!
//! Predicates run in a fixed order: search, suffix, subdomain count, tag.
//! The result keeps the input order and never deduplicates.

use crate::types::{CountBucket, Domain, QueryState, Selection};

/// Domains matching every active predicate of `query`, in input order.
pub fn filter<'a>(domains: &'a [Domain], query: &QueryState) -> Vec<&'a Domain> {
    let term = query.search_term.to_lowercase();
    let suffix = query.suffix_filter.value().map(str::to_lowercase);

    domains
        .iter()
        .filter(|d| matches_search(d, &term))
        .filter(|d| suffix.as_deref().map_or(true, |s| matches_suffix(d, s)))
        .filter(|d| matches_count(d, query.count_bucket))
        .filter(|d| matches_tag(d, &query.tag_filter))
        .collect()
}

/// Owned variant of [`filter`].
pub fn filter_owned(domains: &[Domain], query: &QueryState) -> Vec<Domain> {
    filter(domains, query).into_iter().cloned().collect()
}

/// Substring match of an already lower-cased term against the name, the
/// short subdomains and the tags. An empty term matches everything.
pub fn matches_search(domain: &Domain, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    domain.name.to_lowercase().contains(term)
        || domain.subdomains.iter().any(|s| s.to_lowercase().contains(term))
        || domain.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Case-insensitive `ends_with` against an already lower-cased suffix.
pub fn matches_suffix(domain: &Domain, suffix: &str) -> bool {
    domain.name.to_lowercase().ends_with(suffix)
}

pub fn matches_count(domain: &Domain, bucket: CountBucket) -> bool {
    bucket.contains(domain.subdomain_count())
}

/// Exact tag membership.
pub fn matches_tag(domain: &Domain, tag: &Selection) -> bool {
    match tag {
        Selection::All => true,
        Selection::Only(t) => domain.has_tag(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(name: &str, subdomains: &[&str], tags: &[&str]) -> Domain {
        Domain {
            id: name.to_string(),
            name: name.to_string(),
            full_subdomains: subdomains.iter().map(|s| format!("{}.{}", s, name)).collect(),
            subdomains: subdomains.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            timestamp: String::new(),
        }
    }

    fn names(result: &[&Domain]) -> Vec<String> {
        result.iter().map(|d| d.name.clone()).collect()
    }

    fn sample() -> Vec<Domain> {
        vec![
            domain("a.com", &[], &["dev"]),
            domain("b.il", &["x", "y", "z", "w"], &["prod"]),
        ]
    }

    #[test]
    fn test_suffix_and_bucket_compose() {
        let domains = sample();
        let query = QueryState::new()
            .with_suffix(".il")
            .with_count(CountBucket::FourPlus);

        assert_eq!(names(&filter(&domains, &query)), vec!["b.il"]);
    }

    #[test]
    fn test_tag_filter_alone() {
        let domains = sample();
        let query = QueryState::new().with_tag("dev");
        assert_eq!(names(&filter(&domains, &query)), vec!["a.com"]);
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let domains = sample();
        let query = QueryState::new().with_tag("de");
        assert!(filter(&domains, &query).is_empty());
    }

    #[test]
    fn test_search_reaches_tags() {
        let domains = vec![domain("pay.example.com", &[], &["finance"])];
        let query = QueryState::new().with_search("fin");
        assert_eq!(filter(&domains, &query).len(), 1);
    }

    #[test]
    fn test_search_reaches_short_subdomains_only() {
        let mut d = domain("example.com", &["api"], &[]);
        d.full_subdomains.push("legacy.example.com".to_string());
        let domains = vec![d];

        assert_eq!(filter(&domains, &QueryState::new().with_search("API")).len(), 1);
        assert!(filter(&domains, &QueryState::new().with_search("legacy")).is_empty());
    }

    #[test]
    fn test_suffix_is_case_insensitive_and_anchored() {
        let domains = vec![domain("Shop.CO.IL", &[], &[]), domain("il.example.com", &[], &[])];
        let query = QueryState::new().with_suffix(".co.il");
        assert_eq!(names(&filter(&domains, &query)), vec!["Shop.CO.IL"]);
    }

    #[test]
    fn test_buckets() {
        let domains = vec![
            domain("zero.com", &[], &[]),
            domain("one.com", &["a"], &[]),
            domain("three.com", &["a", "b", "c"], &[]),
            domain("four.com", &["a", "b", "c", "d"], &[]),
        ];

        let by = |bucket: CountBucket| {
            names(&filter(&domains, &QueryState::new().with_count(bucket)))
        };
        assert_eq!(by(CountBucket::Zero), vec!["zero.com"]);
        assert_eq!(by(CountBucket::OneToThree), vec!["one.com", "three.com"]);
        assert_eq!(by(CountBucket::FourPlus), vec!["four.com"]);
        assert_eq!(by(CountBucket::All).len(), 4);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let domains = sample();
        let query = QueryState::new().with_search("nothing-matches");
        assert!(filter(&domains, &query).is_empty());
        assert!(filter(&[], &QueryState::new()).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let domains = vec![domain("a.com", &[], &[]), domain("a.com", &[], &[])];
        assert_eq!(filter_owned(&domains, &QueryState::new()).len(), 2);
    }
}
