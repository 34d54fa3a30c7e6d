//! Locale flag cell evaluation

use crate::config::{ConverterConfig, DEFAULT_FLAG_MARKERS, FlagPolicyKind};
use crate::reader::CellValue;
use std::collections::HashSet;

/// Decides whether a locale column cell opts the row in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagPolicy {
    /// Trimmed, lowercased text must be one of the markers
    Markers(HashSet<String>),
    /// Any non-empty text other than "no"
    NonEmpty,
}

impl FlagPolicy {
    pub fn markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FlagPolicy::Markers(
            markers
                .into_iter()
                .map(|m| m.as_ref().trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        )
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        match config.flag_policy {
            FlagPolicyKind::Markers => Self::markers(&config.flag_markers),
            FlagPolicyKind::NonEmpty => FlagPolicy::NonEmpty,
        }
    }

    pub fn is_flagged(&self, cell: &CellValue) -> bool {
        let text = cell.as_text().trim().to_lowercase();
        match self {
            FlagPolicy::Markers(markers) => markers.contains(&text),
            FlagPolicy::NonEmpty => !text.is_empty() && text != "no",
        }
    }
}

impl Default for FlagPolicy {
    fn default() -> Self {
        Self::markers(DEFAULT_FLAG_MARKERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn test_default_markers() {
        let policy = FlagPolicy::default();
        for value in ["x", " X ", "yes", "YES", "✓", "✔"] {
            assert!(policy.is_flagged(&text(value)), "{value:?} should be flagged");
        }
        for value in ["", "no", "y", "1", "include", "x x"] {
            assert!(!policy.is_flagged(&text(value)), "{value:?} should not be flagged");
        }
        assert!(!policy.is_flagged(&CellValue::Empty));
        assert!(!policy.is_flagged(&CellValue::Number(1.0)));
    }

    #[test]
    fn test_non_empty_policy() {
        let policy = FlagPolicy::NonEmpty;
        assert!(policy.is_flagged(&text("include")));
        assert!(policy.is_flagged(&CellValue::Number(1.0)));
        assert!(policy.is_flagged(&CellValue::Boolean(true)));
        assert!(!policy.is_flagged(&text(" No ")));
        assert!(!policy.is_flagged(&text("   ")));
        assert!(!policy.is_flagged(&CellValue::Empty));
    }

    #[test]
    fn test_from_config() {
        let config = ConverterConfig {
            flag_markers: vec!["Oui".to_string()],
            ..Default::default()
        };
        let policy = FlagPolicy::from_config(&config);
        assert!(policy.is_flagged(&text("oui")));
        assert!(!policy.is_flagged(&text("x")));

        let config = ConverterConfig {
            flag_policy: FlagPolicyKind::NonEmpty,
            ..Default::default()
        };
        assert_eq!(FlagPolicy::from_config(&config), FlagPolicy::NonEmpty);
    }
}
