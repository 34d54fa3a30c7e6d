//! Header row and locale column detection

pub mod columns;
pub mod header;

pub use columns::{LocaleColumn, detect_locale_columns, normalize_column_name};
pub use header::{FixedHeaderDetector, LocaleHeaderDetector, MarkerHeaderDetector};

use crate::config::ConverterConfig;
use crate::locale::LocaleMap;
use tracing::debug;

/// Strategy locating the row that holds column titles
pub trait HeaderDetector: Send + Sync {
    /// Strategy name used in diagnostics
    fn name(&self) -> &str;

    /// Return the header row index, or `None` if this strategy does not apply
    fn detect(&self, rows: &[Vec<String>], locales: &LocaleMap) -> Option<usize>;
}

/// Ordered header detectors; the first hit wins, row 0 otherwise
pub struct HeaderDetectorChain {
    detectors: Vec<Box<dyn HeaderDetector>>,
}

impl HeaderDetectorChain {
    pub fn new(detectors: Vec<Box<dyn HeaderDetector>>) -> Self {
        Self { detectors }
    }

    /// Build the chain for a configuration
    ///
    /// A configured header row takes precedence over the marker and locale
    /// heuristics.
    pub fn from_config(config: &ConverterConfig) -> Self {
        let mut detectors: Vec<Box<dyn HeaderDetector>> = Vec::new();
        if let Some(row) = config.header_row {
            detectors.push(Box::new(FixedHeaderDetector::new(row)));
        }
        detectors.push(Box::new(MarkerHeaderDetector::new(
            config.title_markers.clone(),
            config.url_markers.clone(),
        )));
        detectors.push(Box::new(LocaleHeaderDetector));
        Self::new(detectors)
    }

    pub fn detector_names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Header row index for a string-coerced sheet
    pub fn detect(&self, rows: &[Vec<String>], locales: &LocaleMap) -> usize {
        for detector in &self.detectors {
            if let Some(index) = detector.detect(rows, locales) {
                debug!(detector = detector.name(), row = index, "header row detected");
                return index;
            }
        }
        debug!("no header row detected, falling back to row 0");
        0
    }
}

impl Default for HeaderDetectorChain {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}
