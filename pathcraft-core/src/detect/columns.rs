//! Locale column identification

use crate::locale::LocaleMap;
use serde::Serialize;

/// A header column that designates a target locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleColumn {
    /// 0-based column index
    pub index: usize,
    /// Normalized column name
    pub name: String,
    pub locale: String,
}

/// Collapse whitespace runs (newlines included) to one space and trim
pub fn normalize_column_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Identify the locale columns of a header row, in column order
pub fn detect_locale_columns(headers: &[String], locales: &LocaleMap) -> Vec<LocaleColumn> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let name = normalize_column_name(raw);
            let locale = locales.match_column(&name)?.to_string();
            Some(LocaleColumn {
                index,
                name,
                locale,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  de-DE\n(include)  "), "de-DE (include)");
        assert_eq!(normalize_column_name("a \t\r\n b"), "a b");
        assert_eq!(normalize_column_name(""), "");
    }

    #[test]
    fn test_detects_known_locales_only() {
        let columns = detect_locale_columns(
            &headers(&["Page Title", "URL in AEM", "de-DE (include)", "xx-YY", "es-LATAM"]),
            &LocaleMap::default(),
        );

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].index, 2);
        assert_eq!(columns[0].locale, "de-DE");
        assert_eq!(columns[0].name, "de-DE (include)");
        assert_eq!(columns[1].index, 4);
        assert_eq!(columns[1].locale, "es-LATAM");
    }

    #[test]
    fn test_unknown_locale_yields_nothing() {
        let columns = detect_locale_columns(&headers(&["xx-YY"]), &LocaleMap::default());
        assert!(columns.is_empty());
    }

    #[test]
    fn test_leading_whitespace_and_newlines() {
        let columns =
            detect_locale_columns(&headers(&["\n fr-FR\n"]), &LocaleMap::default());
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].locale, "fr-FR");
    }
}
