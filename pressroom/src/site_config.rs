//! Workspace configuration from pressroom.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file expected at the content root.
pub const CONFIG_FILE_NAME: &str = "pressroom.toml";

/// Site-level defaults applied when assembling records.
///
/// Every field is optional; a missing configuration file behaves like an
/// empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site title, shown in build output
    #[serde(default)]
    pub site_title: Option<String>,

    /// Base URL prepended to relative media references
    #[serde(default)]
    pub media_base_url: Option<String>,

    /// Tags applied to posts that declare none
    #[serde(default)]
    pub default_tags: Vec<String>,
}

impl SiteConfig {
    /// Load configuration from a pressroom.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the pressroom.toml configuration file
    ///
    /// # Returns
    /// * `Ok(SiteConfig)` - Successfully loaded configuration
    /// * `Err(SiteConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        let content = fs::read_to_string(&path).map_err(SiteConfigError::IoError)?;

        let config: SiteConfig = toml::from_str(&content).map_err(SiteConfigError::ParseError)?;

        Ok(config)
    }

    /// Load the configuration next to a content root, defaulting when absent.
    pub fn load_or_default(root: &Path) -> Result<Self, SiteConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a pressroom.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SiteConfigError> {
        let content = toml::to_string_pretty(self).map_err(SiteConfigError::SerializeError)?;

        fs::write(&path, content).map_err(SiteConfigError::IoError)?;

        Ok(())
    }

    /// Resolve a media reference against the configured base URL.
    ///
    /// Absolute URLs and data URLs pass through unchanged; relative paths
    /// are joined onto `media_base_url` when one is configured.
    pub fn resolve_media_url(&self, url: &str) -> String {
        let is_absolute = url.starts_with("http://")
            || url.starts_with("https://")
            || url.starts_with("data:");

        match &self.media_base_url {
            Some(base) if !is_absolute && !url.is_empty() => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url.to_string(),
        }
    }
}

/// Errors that can occur when loading or saving site configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SiteConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for SiteConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteConfigError::IoError(e) => write!(f, "IO error: {}", e),
            SiteConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            SiteConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for SiteConfigError {}
