use crate::error::{ReleaseSyncError, Result};
use semver::Version;

/// Parse a raw version or tag string into a semantic version.
///
/// Removes common prefixes ('v' or 'V') and accepts partial versions
/// ("1" or "1.2"), which are padded with zeros to a full X.Y.Z form.
/// Partial forms with a pre-release or build suffix are rejected.
///
/// Returns `None` for anything that is not a version; callers processing
/// batches skip such entries and continue.
pub fn parse_lenient(raw: &str) -> Option<Version> {
    let clean = raw.trim().trim_start_matches('v').trim_start_matches('V');
    if clean.is_empty() {
        return None;
    }

    if let Ok(version) = Version::parse(clean) {
        return Some(version);
    }

    // Padding a suffixed partial like "1.2-rc1" would mangle it
    if clean.contains('-') || clean.contains('+') {
        return None;
    }

    let padded = match clean.matches('.').count() {
        0 => format!("{}.0.0", clean),
        1 => format!("{}.0", clean),
        _ => return None,
    };

    Version::parse(&padded).ok()
}

/// Parse a comma-separated version catalog, skipping malformed entries.
///
/// A malformed entry never aborts the batch; it is simply absent from
/// the result.
pub fn parse_catalog(catalog: &str) -> Vec<Version> {
    catalog.split(',').filter_map(parse_lenient).collect()
}

/// Minimum-version floor: "version >= floor" under semver precedence.
///
/// Built once from a configured floor string like "v1.2". An empty floor
/// means no lower bound. Comparison uses `semver::Version` ordering
/// directly, so a pre-release compares as less than its corresponding
/// release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFloor {
    floor: Option<Version>,
}

impl VersionFloor {
    /// Parse a floor string ("vX.Y", "X.Y.Z", or empty for unbounded).
    ///
    /// A non-empty string that is not a version is a fatal configuration
    /// error, unlike per-entry parse failures elsewhere.
    pub fn parse(raw: &str) -> Result<Self> {
        let clean = raw.trim().trim_start_matches('v').trim_start_matches('V');
        if clean.is_empty() {
            return Ok(VersionFloor::unbounded());
        }

        let floor = parse_lenient(raw).ok_or_else(|| {
            ReleaseSyncError::config(format!(
                "Invalid minimal version '{}' - expected format vX.Y",
                raw
            ))
        })?;

        Ok(VersionFloor { floor: Some(floor) })
    }

    /// A floor that admits every version
    pub fn unbounded() -> Self {
        VersionFloor { floor: None }
    }

    /// True iff the version is at or above the floor
    pub fn check(&self, version: &Version) -> bool {
        match &self.floor {
            Some(floor) => version >= floor,
            None => true,
        }
    }
}
