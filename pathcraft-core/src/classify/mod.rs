//! Row classification system

pub mod flags;
pub mod marketing;
pub mod product;

pub use flags::FlagPolicy;
pub use marketing::MarketingUrlClassifier;
pub use product::ProductIdClassifier;

use crate::reader::CellValue;

/// What a data row represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Product listing identified by `id`
    Product { id: String },
    /// Marketing page at `url`, normalized to `path`
    Marketing { url: String, path: String },
    None,
}

impl Classification {
    pub fn is_none(&self) -> bool {
        matches!(self, Classification::None)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Product { .. } => "product",
            Classification::Marketing { .. } => "marketing",
            Classification::None => "none",
        }
    }
}

/// Strategy deciding what a single row represents
pub trait RowClassifier: Send + Sync {
    /// Strategy name used in diagnostics
    fn name(&self) -> &str;

    /// Classify one data row
    fn classify(&self, row: &[CellValue]) -> Classification;
}

/// Ordered classifiers; the first non-`None` result wins
pub struct ClassifierChain {
    classifiers: Vec<Box<dyn RowClassifier>>,
}

impl ClassifierChain {
    pub fn new(classifiers: Vec<Box<dyn RowClassifier>>) -> Self {
        Self { classifiers }
    }

    pub fn classifier_names(&self) -> Vec<&str> {
        self.classifiers.iter().map(|c| c.name()).collect()
    }

    pub fn classify(&self, row: &[CellValue]) -> Classification {
        self.classifiers
            .iter()
            .map(|c| c.classify(row))
            .find(|result| !result.is_none())
            .unwrap_or(Classification::None)
    }
}

impl Default for ClassifierChain {
    /// Product identifiers take precedence over marketing URLs
    fn default() -> Self {
        Self::new(vec![
            Box::new(ProductIdClassifier),
            Box::new(MarketingUrlClassifier),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|s| CellValue::from(*s)).collect()
    }

    #[test]
    fn test_default_order() {
        assert_eq!(
            ClassifierChain::default().classifier_names(),
            vec!["product-id", "marketing-url"]
        );
    }

    #[test]
    fn test_product_takes_precedence() {
        let chain = ClassifierChain::default();
        let result = chain.classify(&row(&[
            "https://example.com/en/home/page.html",
            "A12345",
        ]));
        assert_eq!(
            result,
            Classification::Product {
                id: "A12345".to_string()
            }
        );
    }

    #[test]
    fn test_marketing_when_no_product() {
        let chain = ClassifierChain::default();
        let result = chain.classify(&row(&["Landing", "https://example.com/en/home/page.html"]));
        assert_eq!(
            result,
            Classification::Marketing {
                url: "https://example.com/en/home/page.html".to_string(),
                path: "/home/page".to_string(),
            }
        );
        assert_eq!(result.kind(), "marketing");
    }

    #[test]
    fn test_no_signal() {
        let chain = ClassifierChain::default();
        assert!(chain.classify(&row(&["Notes", "", "x"])).is_none());
        assert!(chain.classify(&[]).is_none());
    }

    #[test]
    fn test_custom_chain_order() {
        let chain = ClassifierChain::new(vec![
            Box::new(MarketingUrlClassifier),
            Box::new(ProductIdClassifier),
        ]);
        let result = chain.classify(&row(&["A12345", "https://example.com/home/a"]));
        assert_eq!(result.kind(), "marketing");
    }
}
