//! Locale codes and their fixed path prefixes

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Default locale → path prefix table
pub const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("de-DE", "/content/lifetech/europe/en-de"),
    ("es-ES", "/content/lifetech/europe/en-es"),
    ("fr-FR", "/content/lifetech/europe/en-fr"),
    ("ja-JP", "/content/lifetech/japan/en-jp"),
    ("ko-KR", "/content/lifetech/ipac/en-kr"),
    ("zh-CN", "/content/lifetech/greater-china/en-cn"),
    ("zh-TW", "/content/lifetech/ipac/en-tw"),
    ("pt-BR", "/content/lifetech/latin-america/en-br"),
    ("es-LATAM", "/content/lifetech/latin-america/en-mx"),
];

fn leading_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([a-z]{2}-[A-Z]{2,})\b").unwrap())
}

/// Extract the leading `xx-XX` / `xx-LATAM` token of a string, if any
pub fn leading_locale_token(text: &str) -> Option<&str> {
    leading_code_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check that a string is exactly one locale code
pub fn is_locale_code(code: &str) -> bool {
    leading_locale_token(code) == Some(code)
}

/// Immutable mapping from locale code to path prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMap {
    entries: BTreeMap<String, String>,
}

impl LocaleMap {
    /// Build a map from explicit entries
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Default table with the given overrides applied on top
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut map = Self::default();
        for (code, prefix) in overrides {
            map.entries.insert(code.clone(), prefix.clone());
        }
        map
    }

    pub fn prefix(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// All locale codes in sorted order
    pub fn codes(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the locale a column name designates
    pub fn match_column(&self, column_name: &str) -> Option<&str> {
        let token = leading_locale_token(column_name)?;
        self.entries.get_key_value(token).map(|(k, _)| k.as_str())
    }
}

impl Default for LocaleMap {
    fn default() -> Self {
        Self::from_entries(DEFAULT_LOCALES.iter().copied())
    }
}
