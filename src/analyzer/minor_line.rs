use semver::Version;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Collapse a version list to the highest known patch per minor line.
///
/// A minor line is the set of versions sharing (major, minor). The
/// upstream catalog may list several patches of one minor release; only
/// the newest matters for tag creation. Pre-release versions are never
/// candidates for stable tagging and are dropped up front.
///
/// Runs before any floor filtering, so a line's latest patch is computed
/// from the complete catalog.
pub fn reduce_minor_lines(versions: impl IntoIterator<Item = Version>) -> Vec<Version> {
    let mut latest: HashMap<(u64, u64), Version> = HashMap::new();

    for version in versions {
        if !version.pre.is_empty() {
            continue;
        }

        match latest.entry((version.major, version.minor)) {
            Entry::Occupied(mut slot) => {
                // Equal patch duplicates are idempotent; last one wins
                if slot.get().patch <= version.patch {
                    slot.insert(version);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(version);
            }
        }
    }

    latest.into_values().collect()
}
