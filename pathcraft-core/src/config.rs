//! Configuration system for the converter

use crate::error::ConfigError;
use crate::locale::{LocaleMap, is_locale_code};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default affirmative markers for locale flag cells
pub const DEFAULT_FLAG_MARKERS: &[&str] = &["x", "yes", "✓", "✔"];
/// Default title markers used to recognise the header row
pub const DEFAULT_TITLE_MARKERS: &[&str] = &["page title"];
/// Default URL markers used to recognise the header row
pub const DEFAULT_URL_MARKERS: &[&str] = &["url in aem", "url in "];

/// How a locale flag cell is judged affirmative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagPolicyKind {
    /// Only the configured marker set counts
    #[default]
    Markers,
    /// Anything non-empty other than "no" counts
    NonEmpty,
}

/// Main converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub flag_policy: FlagPolicyKind,
    pub flag_markers: Vec<String>,
    /// Force the header row (0-based) instead of detecting it
    pub header_row: Option<usize>,
    pub title_markers: Vec<String>,
    pub url_markers: Vec<String>,
    pub marketing_sheet: Option<String>,
    pub product_sheet: Option<String>,
    /// Locale prefix overrides and additions
    pub locales: BTreeMap<String, String>,
}

impl ConverterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate locale overrides and marker sets
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (code, prefix) in &self.locales {
            if !is_locale_code(code) {
                return Err(ConfigError::InvalidLocaleCode(code.clone()));
            }
            if !prefix.starts_with('/') || prefix.ends_with('/') {
                return Err(ConfigError::InvalidPrefix {
                    locale: code.clone(),
                    prefix: prefix.clone(),
                });
            }
        }

        if self.flag_policy == FlagPolicyKind::Markers
            && self.flag_markers.iter().all(|m| m.trim().is_empty())
        {
            return Err(ConfigError::EmptyMarkerSet);
        }

        if self.title_markers.iter().all(|m| m.trim().is_empty()) {
            return Err(ConfigError::EmptyHeaderMarkers("title_markers"));
        }
        if self.url_markers.iter().all(|m| m.trim().is_empty()) {
            return Err(ConfigError::EmptyHeaderMarkers("url_markers"));
        }

        Ok(())
    }

    /// Locale map for this configuration: defaults plus overrides
    pub fn locale_map(&self) -> LocaleMap {
        LocaleMap::with_overrides(&self.locales)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            flag_policy: FlagPolicyKind::default(),
            flag_markers: to_strings(DEFAULT_FLAG_MARKERS),
            header_row: None,
            title_markers: to_strings(DEFAULT_TITLE_MARKERS),
            url_markers: to_strings(DEFAULT_URL_MARKERS),
            marketing_sheet: None,
            product_sheet: None,
            locales: BTreeMap::new(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
