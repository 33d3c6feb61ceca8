//! Release reconciliation workflow
//!
//! Sequences the version pipeline over both release streams and hands the
//! result to the repository collaborator. Kept free of clap and terminal
//! concerns so the workflow can be driven programmatically and tested
//! against a mock repository.

use semver::Version;

use crate::analyzer::{missing_tags, reduce_minor_lines, NewTagSet};
use crate::domain::tag::TagPattern;
use crate::domain::version::{parse_catalog, parse_lenient, VersionFloor};
use crate::error::{ReleaseSyncError, Result};
use crate::git::Repository;

/// Result of a reconciliation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Every upstream candidate already has a downstream tag
    UpToDate,
    /// Dry run: these tags would be created
    Planned(Vec<String>),
    /// Live run: these tags were created
    Created(Vec<String>),
}

/// Drives one reconciliation of upstream releases against downstream tags.
///
/// Holds the pieces that are fixed for a run: the minimum-version floor,
/// the tag naming pattern, and whether this is a dry run. Dry-run is an
/// explicit constructor argument, never ambient state.
pub struct ReleaseOrchestrator {
    floor: VersionFloor,
    pattern: TagPattern,
    dry_run: bool,
}

impl ReleaseOrchestrator {
    /// Build an orchestrator, parsing the floor string once.
    ///
    /// An unparseable non-empty floor is fatal: without a floor the whole
    /// run is meaningless. An empty floor means no lower bound.
    pub fn new(minimal_version: &str, pattern: TagPattern, dry_run: bool) -> Result<Self> {
        pattern.validate()?;
        let floor = VersionFloor::parse(minimal_version)?;

        Ok(ReleaseOrchestrator {
            floor,
            pattern,
            dry_run,
        })
    }

    /// Run the full reconciliation against a downstream repository.
    ///
    /// Parses both streams, reduces and filters the upstream catalog,
    /// filters the downstream tags, diffs the two, and either reports or
    /// creates the missing tags. Tag creation is fail-fast: the first
    /// collaborator error aborts the batch and names the failing tag.
    pub fn run<R: Repository>(&self, repo: &R, upstream_catalog: &str) -> Result<SyncOutcome> {
        let candidates = self.upstream_candidates(upstream_catalog);
        let existing = self.downstream_versions(repo)?;

        let new_tags = missing_tags(&candidates, &existing, &self.pattern);
        if new_tags.is_empty() {
            return Ok(SyncOutcome::UpToDate);
        }

        if self.dry_run {
            return Ok(SyncOutcome::Planned(new_tags.tag_names()));
        }

        self.create_tags(repo, &new_tags)?;
        Ok(SyncOutcome::Created(new_tags.tag_names()))
    }

    /// Upstream path: parse, reduce to one representative per minor line,
    /// then apply the floor.
    ///
    /// Reduction runs before the floor on purpose: a line's latest patch
    /// must be computed from the complete catalog, with the floor applied
    /// only to the representative.
    fn upstream_candidates(&self, catalog: &str) -> Vec<Version> {
        let parsed = parse_catalog(catalog);

        reduce_minor_lines(parsed)
            .into_iter()
            .filter(|version| self.floor.check(version))
            .collect()
    }

    /// Downstream path: parse each tag when possible, apply the floor.
    ///
    /// No minor-line reduction here; every existing tag is compared
    /// individually. Unparseable tags are not versions and are skipped.
    fn downstream_versions<R: Repository>(&self, repo: &R) -> Result<Vec<Version>> {
        let versions = repo
            .list_tags()?
            .iter()
            .filter_map(|tag| parse_lenient(tag))
            .filter(|version| self.floor.check(version))
            .collect();

        Ok(versions)
    }

    /// Create one tag per member at the repository HEAD, stopping at the
    /// first failure.
    fn create_tags<R: Repository>(&self, repo: &R, new_tags: &NewTagSet) -> Result<()> {
        let target = repo.head_oid()?;

        for (_, name) in new_tags.iter() {
            repo.create_tag(name, target).map_err(|e| {
                ReleaseSyncError::tag(format!("Failed to create tag '{}': {}", name, e))
            })?;
        }

        Ok(())
    }
}
