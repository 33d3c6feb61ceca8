use crate::domain::tag::TagPattern;
use semver::Version;
use std::collections::BTreeMap;

/// Upstream versions with no downstream counterpart.
///
/// Keyed by version in semver precedence order, so iteration and the
/// dry-run report are deterministic. Values are the canonical tag names
/// produced by the configured pattern. Created fresh per reconciliation
/// run and consumed immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTagSet {
    tags: BTreeMap<Version, String>,
}

impl NewTagSet {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.tags.contains_key(version)
    }

    /// Iterate (version, tag name) pairs in semver precedence order
    pub fn iter(&self) -> impl Iterator<Item = (&Version, &str)> {
        self.tags.iter().map(|(v, name)| (v, name.as_str()))
    }

    /// Canonical tag names, sorted by version precedence
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.values().cloned().collect()
    }
}

/// Compute the candidates with no structurally equal member of `existing`.
///
/// Exact version equality is the matching rule: an existing tag one patch
/// ahead or behind does not satisfy "already exists". Both inputs are
/// expected to have passed the floor filter already; `existing` is
/// compared tag by tag, not minor-line-reduced. The O(n*m) scan is fine
/// at the tens-of-tags scale this runs at.
pub fn missing_tags(
    candidates: &[Version],
    existing: &[Version],
    pattern: &TagPattern,
) -> NewTagSet {
    let mut tags = BTreeMap::new();

    for candidate in candidates {
        let found = existing.iter().any(|tag| tag == candidate);
        if !found {
            tags.insert(candidate.clone(), pattern.format(candidate));
        }
    }

    NewTagSet { tags }
}
