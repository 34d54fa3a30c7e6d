//! Error types

use thiserror::Error;

/// Configuration problems detected while loading or validating a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("'{0}' is not a locale code (expected xx-XX or xx-LATAM)")]
    InvalidLocaleCode(String),

    #[error("path prefix '{prefix}' for locale '{locale}' must start with '/' and not end with '/'")]
    InvalidPrefix { locale: String, prefix: String },

    #[error("flag_policy \"markers\" requires at least one entry in flag_markers")]
    EmptyMarkerSet,

    #[error("{0} must contain at least one non-blank marker")]
    EmptyHeaderMarkers(&'static str),
}

/// Problems building an export plan
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("project code must not be empty")]
    EmptyProjectCode,
}
