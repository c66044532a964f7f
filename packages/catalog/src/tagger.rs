//! Keyword classification of domains.
//!
//! Matching is plain substring containment on lower-cased names, so `admin`
//! also fires inside `administrator`. The table is the only place to extend
//! the taxonomy.

use std::collections::BTreeSet;

/// Lower-case keyword to tag label.
pub const KEYWORD_TAGS: &[(&str, &str)] = &[
    ("admin", "admin"),
    ("dev", "dev"),
    ("staging", "staging"),
    ("prod", "prod"),
    ("test", "test"),
    ("api", "api"),
    ("auth", "security"),
    ("vpn", "security"),
    ("db", "db"),
    ("mail", "email"),
    ("beta", "beta"),
    ("billing", "finance"),
    ("checkout", "ecom"),
    ("shop", "ecom"),
    ("cdn", "network"),
    ("internal", "internal"),
    ("hr", "internal"),
    ("docs", "docs"),
];

/// Tag a domain using [`KEYWORD_TAGS`].
pub fn tag<S: AsRef<str>>(domain_name: &str, subdomains: &[S]) -> BTreeSet<String> {
    tag_with_table(KEYWORD_TAGS, domain_name, subdomains)
}

/// Tag a domain against an explicit keyword table.
///
/// Every lower-cased name (the apex plus each full SAN entry) is checked
/// against every keyword; each hit adds its label once.
pub fn tag_with_table<S: AsRef<str>>(
    table: &[(&str, &str)],
    domain_name: &str,
    subdomains: &[S],
) -> BTreeSet<String> {
    let names: Vec<String> = std::iter::once(domain_name)
        .chain(subdomains.iter().map(AsRef::as_ref))
        .map(str::to_lowercase)
        .collect();

    table
        .iter()
        .filter(|(keyword, label)| {
            !keyword.is_empty() && !label.is_empty() && names.iter().any(|n| n.contains(keyword))
        })
        .map(|(_, label)| label.to_string())
        .collect()
}
