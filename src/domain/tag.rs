use crate::error::{ReleaseSyncError, Result};
use semver::Version;

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Ensure the pattern contains the {version} placeholder
    pub fn validate(&self) -> Result<()> {
        if !self.pattern.contains("{version}") {
            return Err(ReleaseSyncError::tag(
                "Pattern must contain {version} placeholder",
            ));
        }
        Ok(())
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace("{version}", &version.to_string())
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> Result<bool> {
        self.validate()?;

        // Escape everything, then replace {version} with a semver matcher
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(
            r"\{version\}",
            r"(\d+\.\d+\.\d+(?:-[0-9A-Za-z][0-9A-Za-z.\-]*)?)",
        );

        if let Ok(re) = regex::Regex::new(&format!("^{}$", regex_pattern)) {
            Ok(re.is_match(tag))
        } else {
            Err(ReleaseSyncError::tag("Invalid pattern"))
        }
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("v{version}")
    }
}
