//! Marketing page URL detection

use super::{Classification, RowClassifier};
use crate::normalize::{normalize_path, parse_web_url};
use crate::reader::CellValue;
use tracing::debug;

/// Classifies rows carrying a web URL with a `/home/` path
pub struct MarketingUrlClassifier;

impl RowClassifier for MarketingUrlClassifier {
    fn name(&self) -> &str {
        "marketing-url"
    }

    fn classify(&self, row: &[CellValue]) -> Classification {
        for text in row.iter().filter_map(CellValue::as_str) {
            let text = text.trim();
            if !text.contains("/home/") {
                continue;
            }

            if parse_web_url(text).is_none() {
                debug!(cell = text, "skipping malformed URL");
                continue;
            }

            match normalize_path(text) {
                Some(path) => {
                    return Classification::Marketing {
                        url: text.to_string(),
                        path,
                    };
                }
                None => debug!(cell = text, "URL path has no /home/ segment"),
            }
        }
        Classification::None
    }
}
