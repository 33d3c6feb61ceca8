use crate::domain::tag::TagPattern;
use crate::error::{ReleaseSyncError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for release-sync.
///
/// Everything here has a sensible default, so the tool runs without any
/// config file at all; the file only overrides the tagger identity and
/// the tag naming pattern.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tagger: TaggerConfig,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

/// Identity recorded on annotated tags created by release-sync.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaggerConfig {
    #[serde(default = "default_tagger_name")]
    pub name: String,

    #[serde(default = "default_tagger_email")]
    pub email: String,
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_tagger_name() -> String {
    "Release Sync".to_string()
}

fn default_tagger_email() -> String {
    "release-sync@localhost".to_string()
}

impl Default for TaggerConfig {
    fn default() -> Self {
        TaggerConfig {
            name: default_tagger_name(),
            email: default_tagger_email(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tagger: TaggerConfig::default(),
            tag_pattern: default_tag_pattern(),
        }
    }
}

impl Config {
    /// The tag naming pattern as a validated TagPattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        let pattern = TagPattern::new(self.tag_pattern.clone());
        pattern.validate()?;
        Ok(pattern)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasesync.toml` in current directory
/// 3. `.releasesync.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error; the tag
/// pattern is validated as part of loading.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasesync.toml").exists() {
        fs::read_to_string("./releasesync.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasesync.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| ReleaseSyncError::config(e.to_string()))?;

    config.tag_pattern()?;
    Ok(config)
}
