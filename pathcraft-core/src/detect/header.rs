//! Header row detection strategies

use super::HeaderDetector;
use super::columns::normalize_column_name;
use crate::locale::LocaleMap;

/// First row carrying both a page-title marker and a URL marker
pub struct MarkerHeaderDetector {
    title_markers: Vec<String>,
    url_markers: Vec<String>,
}

impl MarkerHeaderDetector {
    pub fn new(title_markers: Vec<String>, url_markers: Vec<String>) -> Self {
        // Markers are matched against lowercased cells but not trimmed
        let lower = |markers: Vec<String>| -> Vec<String> {
            markers
                .into_iter()
                .filter(|m| !m.trim().is_empty())
                .map(|m| m.to_lowercase())
                .collect()
        };
        Self {
            title_markers: lower(title_markers),
            url_markers: lower(url_markers),
        }
    }

    fn row_matches(&self, row: &[String]) -> bool {
        let cells: Vec<String> = row
            .iter()
            .map(|c| normalize_column_name(c).to_lowercase())
            .collect();
        let has = |markers: &[String]| {
            cells
                .iter()
                .any(|cell| markers.iter().any(|m| cell.contains(m.as_str())))
        };
        has(&self.title_markers) && has(&self.url_markers)
    }
}

impl HeaderDetector for MarkerHeaderDetector {
    fn name(&self) -> &str {
        "marker"
    }

    fn detect(&self, rows: &[Vec<String>], _locales: &LocaleMap) -> Option<usize> {
        rows.iter().position(|row| self.row_matches(row))
    }
}

/// First row where at least one cell names a known locale
pub struct LocaleHeaderDetector;

impl HeaderDetector for LocaleHeaderDetector {
    fn name(&self) -> &str {
        "locale"
    }

    fn detect(&self, rows: &[Vec<String>], locales: &LocaleMap) -> Option<usize> {
        rows.iter().position(|row| {
            row.iter()
                .any(|cell| locales.match_column(&normalize_column_name(cell)).is_some())
        })
    }
}

/// Always the configured row, provided the sheet is that long
pub struct FixedHeaderDetector {
    row: usize,
}

impl FixedHeaderDetector {
    pub fn new(row: usize) -> Self {
        Self { row }
    }
}

impl HeaderDetector for FixedHeaderDetector {
    fn name(&self) -> &str {
        "fixed"
    }

    fn detect(&self, rows: &[Vec<String>], _locales: &LocaleMap) -> Option<usize> {
        (self.row < rows.len()).then_some(self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_TITLE_MARKERS, DEFAULT_URL_MARKERS};

    fn marker_detector() -> MarkerHeaderDetector {
        MarkerHeaderDetector::new(
            DEFAULT_TITLE_MARKERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_URL_MARKERS.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_marker_detection_is_case_insensitive() {
        let sheet = rows(&[
            &["Localization request"],
            &[""],
            &["Owner: web team"],
            &["PAGE TITLE", "Url In AEM", "de-DE"],
        ]);
        assert_eq!(marker_detector().detect(&sheet, &LocaleMap::default()), Some(3));
    }

    #[test]
    fn test_marker_detection_needs_both_markers() {
        let sheet = rows(&[&["Page title", "Notes"], &["Name", "URL in production"]]);
        assert_eq!(marker_detector().detect(&sheet, &LocaleMap::default()), None);
    }

    #[test]
    fn test_marker_across_newlines() {
        let sheet = rows(&[&["Page\ntitle", "URL in\nAEM"]]);
        assert_eq!(marker_detector().detect(&sheet, &LocaleMap::default()), Some(0));
    }

    #[test]
    fn test_locale_detection() {
        let locales = LocaleMap::default();
        let sheet = rows(&[&["Products"], &["ID", "xx-YY"], &["ID", "ko-KR\n(include)"]]);
        assert_eq!(LocaleHeaderDetector.detect(&sheet, &locales), Some(2));
    }

    #[test]
    fn test_fixed_detection_bounds() {
        let sheet = rows(&[&["a"], &["b"]]);
        let locales = LocaleMap::default();
        assert_eq!(FixedHeaderDetector::new(1).detect(&sheet, &locales), Some(1));
        assert_eq!(FixedHeaderDetector::new(3).detect(&sheet, &locales), None);
    }
}
