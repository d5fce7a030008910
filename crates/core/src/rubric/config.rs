use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::archive::IndexLimits;
use crate::scan::ScanOptions;

/// Error type for loading rubric configuration files.
#[derive(Debug, Error)]
pub enum RubricConfigError {
    #[error("Failed to read rubric config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rubric config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse rubric config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported rubric config format for {0}; expected .yaml, .yml or .json")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid rubric config: {0}")]
    Invalid(String),
}

/// Minimum values for each pass/fail check. A check passes when its value is
/// greater than or equal to the minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// HTML documents in the archive.
    pub html_pages: u64,
    /// Internal links, used as the navigation-menu check.
    pub internal_links: u64,
    /// CSS rule blocks.
    pub css_rules: u64,
    pub external_links: u64,
    /// Images plus distinct media types plus distinct iframe sites.
    pub visual_media: u64,
    pub head_meta: u64,
    pub alt_attributes: u64,
    /// Richness: script lines needed for the script bonus point.
    pub richness_js_lines: u64,
    /// Richness: CSS rule blocks needed for the style bonus point.
    pub richness_css_rules: u64,
    /// Richness: most points awarded for distinct media types.
    pub richness_media_cap: u32,
    /// Richness: most points awarded for distinct iframe sites.
    pub richness_iframe_cap: u32,
}

impl Thresholds {
    /// Minimum of each pass/fail check, keyed by config field name.
    pub fn check_minima(&self) -> [(&'static str, u64); 7] {
        [
            ("html_pages", self.html_pages),
            ("internal_links", self.internal_links),
            ("css_rules", self.css_rules),
            ("external_links", self.external_links),
            ("visual_media", self.visual_media),
            ("head_meta", self.head_meta),
            ("alt_attributes", self.alt_attributes),
        ]
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            html_pages: 7,
            internal_links: 8,
            css_rules: 5,
            external_links: 4,
            visual_media: 4,
            head_meta: 1,
            alt_attributes: 1,
            richness_js_lines: 6,
            richness_css_rules: 7,
            richness_media_cap: 2,
            richness_iframe_cap: 2,
        }
    }
}

/// Full grading configuration: thresholds, scanner behaviour, and read limits.
///
/// Every field is defaulted, so a file only needs the values it overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    pub thresholds: Thresholds,
    pub scan: ScanOptions,
    pub limits: IndexLimits,
}

impl RubricConfig {
    /// Load a configuration from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RubricConfigError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .map_err(|source| RubricConfigError::Read { path: path.to_path_buf(), source })?;

        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let config: RubricConfig = match ext.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&body)?,
            Some("json") => serde_json::from_str(&body)?,
            _ => return Err(RubricConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot describe the rubric.
    pub fn validate(&self) -> Result<(), RubricConfigError> {
        let t = &self.thresholds;
        if let Some((name, _)) = t.check_minima().into_iter().find(|(_, min)| *min == 0) {
            return Err(RubricConfigError::Invalid(format!(
                "thresholds.{name} must be at least 1"
            )));
        }
        if t.richness_media_cap > 2 || t.richness_iframe_cap > 2 {
            return Err(RubricConfigError::Invalid(
                "richness caps for media and iframe sites are at most 2".to_string(),
            ));
        }
        if self.limits.max_entry_bytes == Some(0) {
            return Err(RubricConfigError::Invalid(
                "limits.max_entry_bytes must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, RubricConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String, RubricConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
