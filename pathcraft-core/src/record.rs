//! Output records

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A marketing page localized for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingRecord {
    #[serde(rename = "Original URL")]
    pub original_url: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Localized Path")]
    pub localized_path: String,
    #[serde(rename = "Sheet")]
    pub sheet: String,
    /// 0-based row index in the source sheet
    #[serde(rename = "Row")]
    pub row: usize,
}

/// A product flagged for inclusion in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Sheet")]
    pub sheet: String,
    /// 0-based row index in the source sheet
    #[serde(rename = "Row")]
    pub row: usize,
}

/// Both record sets produced by one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub marketing: Vec<MarketingRecord>,
    pub products: Vec<ProductRecord>,
}

impl ConversionResult {
    pub fn is_empty(&self) -> bool {
        self.marketing.is_empty() && self.products.is_empty()
    }

    /// Append another result, keeping scan order
    pub fn extend(&mut self, other: ConversionResult) {
        self.marketing.extend(other.marketing);
        self.products.extend(other.products);
    }

    /// Stable sort of both record sets by language
    pub fn sort_by_language(&mut self) {
        self.marketing.sort_by(|a, b| a.language.cmp(&b.language));
        self.products.sort_by(|a, b| a.language.cmp(&b.language));
    }

    /// Every language present in either record set, sorted
    pub fn languages(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .marketing
            .iter()
            .map(|r| r.language.as_str())
            .chain(self.products.iter().map(|r| r.language.as_str()))
            .collect();
        set.into_iter().collect()
    }

    pub fn marketing_for<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a MarketingRecord> {
        self.marketing.iter().filter(move |r| r.language == language)
    }

    pub fn products_for<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a ProductRecord> {
        self.products.iter().filter(move |r| r.language == language)
    }
}
