//! Product identifier extraction

use super::{Classification, RowClassifier};
use crate::reader::CellValue;
use regex::Regex;
use std::sync::OnceLock;

/// `A` followed by 3-6 digits, as a standalone token
fn product_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(A\d{3,6})\b").unwrap())
}

/// The path segment immediately after `/product/`
fn product_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/product/([^/?#\s]+)").unwrap())
}

/// Classifies rows carrying a product identifier or a `/product/` link
pub struct ProductIdClassifier;

impl RowClassifier for ProductIdClassifier {
    fn name(&self) -> &str {
        "product-id"
    }

    fn classify(&self, row: &[CellValue]) -> Classification {
        row.iter()
            .filter_map(CellValue::as_str)
            .find_map(extract_product_id)
            .map(|id| Classification::Product { id })
            .unwrap_or(Classification::None)
    }
}

/// Extract a product identifier from free text
pub fn extract_product_id(text: &str) -> Option<String> {
    if let Some(caps) = product_id_pattern().captures(text) {
        return Some(caps[1].to_string());
    }

    let caps = product_path_pattern().captures(text)?;
    let segment = strip_extension(&caps[1]);
    (!segment.is_empty()).then(|| segment.to_string())
}

fn strip_extension(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => segment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identifier() {
        assert_eq!(extract_product_id("A12345"), Some("A12345".to_string()));
        assert_eq!(extract_product_id("A123"), Some("A123".to_string()));
        assert_eq!(extract_product_id("A123456"), Some("A123456".to_string()));
    }

    #[test]
    fn test_identifier_in_noisy_text() {
        assert_eq!(
            extract_product_id("Cat. No. A4321 (10 mL), see notes"),
            Some("A4321".to_string())
        );
    }

    #[test]
    fn test_identifier_shape() {
        // Too short, too long, lowercase, glued to other characters
        assert_eq!(extract_product_id("A12"), None);
        assert_eq!(extract_product_id("A1234567"), None);
        assert_eq!(extract_product_id("a12345"), None);
        assert_eq!(extract_product_id("XA12345"), None);
    }

    #[test]
    fn test_product_url_segment() {
        assert_eq!(
            extract_product_id("https://example.com/order/catalog/product/K1234.html"),
            Some("K1234".to_string())
        );
        assert_eq!(
            extract_product_id("https://example.com/order/catalog/product/12345-01?SID=srch#x"),
            Some("12345-01".to_string())
        );
        assert_eq!(
            extract_product_id("https://example.com/product/A33221/details"),
            Some("A33221".to_string())
        );
        assert_eq!(extract_product_id("https://example.com/product/"), None);
        assert_eq!(extract_product_id("https://example.com/products/K1234"), None);
    }

    #[test]
    fn test_first_matching_cell_wins() {
        let row = vec![
            CellValue::Text("intro".into()),
            CellValue::Number(12345.0),
            CellValue::Text("A1111".into()),
            CellValue::Text("A2222".into()),
        ];
        assert_eq!(
            ProductIdClassifier.classify(&row),
            Classification::Product {
                id: "A1111".to_string()
            }
        );
    }

    #[test]
    fn test_no_identifier() {
        let row = vec![CellValue::Text("https://example.com/home/a.html".into())];
        assert!(ProductIdClassifier.classify(&row).is_none());
    }
}
