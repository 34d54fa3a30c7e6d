//! Export planning: per-language groups and file names

use crate::error::ExportError;
use crate::record::ConversionResult;
use serde::Serialize;
use std::collections::HashSet;

/// Product identifiers to include for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductList {
    pub language: String,
    pub file_name: String,
    /// First-seen order, without repeats
    pub product_ids: Vec<String>,
}

/// Everything an exporter needs to write the output files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    pub project_code: String,
    pub converted_urls_file: String,
    pub archive_file: String,
    pub product_lists: Vec<ProductList>,
}

impl ExportPlan {
    pub fn new(project_code: &str, result: &ConversionResult) -> Result<Self, ExportError> {
        let project_code = sanitize_file_component(project_code.trim());
        if project_code.is_empty() {
            return Err(ExportError::EmptyProjectCode);
        }

        let mut languages: Vec<&str> = result.products.iter().map(|p| p.language.as_str()).collect();
        languages.sort_unstable();
        languages.dedup();

        let product_lists = languages
            .into_iter()
            .map(|language| {
                let mut seen = HashSet::new();
                let product_ids = result
                    .products_for(language)
                    .filter(|p| seen.insert(p.product_id.clone()))
                    .map(|p| p.product_id.clone())
                    .collect();
                ProductList {
                    language: language.to_string(),
                    file_name: product_list_file_name(&project_code, language),
                    product_ids,
                }
            })
            .collect();

        Ok(Self {
            converted_urls_file: format!("{project_code} - Converted URLs.xlsx"),
            archive_file: format!("{project_code} - Product Inclusion Lists.zip"),
            project_code,
            product_lists,
        })
    }
}

/// `Product Inclusion List_<PROJECT_CODE>_<locale>.xlsx`
pub fn product_list_file_name(project_code: &str, language: &str) -> String {
    format!("Product Inclusion List_{project_code}_{language}.xlsx")
}

fn sanitize_file_component(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ProductRecord;

    fn product(id: &str, language: &str) -> ProductRecord {
        ProductRecord {
            product_id: id.to_string(),
            language: language.to_string(),
            sheet: "Product".to_string(),
            row: 0,
        }
    }

    #[test]
    fn test_file_names() {
        let plan = ExportPlan::new(" PRJ-42 ", &ConversionResult::default()).unwrap();
        assert_eq!(plan.project_code, "PRJ-42");
        assert_eq!(plan.converted_urls_file, "PRJ-42 - Converted URLs.xlsx");
        assert_eq!(plan.archive_file, "PRJ-42 - Product Inclusion Lists.zip");
        assert!(plan.product_lists.is_empty());
        assert_eq!(
            product_list_file_name("PRJ-42", "de-DE"),
            "Product Inclusion List_PRJ-42_de-DE.xlsx"
        );
    }

    #[test]
    fn test_groups_by_language() {
        let result = ConversionResult {
            marketing: Vec::new(),
            products: vec![
                product("A2", "ja-JP"),
                product("A1", "de-DE"),
                product("A2", "ja-JP"),
                product("A3", "ja-JP"),
            ],
        };
        let plan = ExportPlan::new("P1", &result).unwrap();

        assert_eq!(plan.product_lists.len(), 2);
        assert_eq!(plan.product_lists[0].language, "de-DE");
        assert_eq!(plan.product_lists[0].product_ids, vec!["A1"]);
        assert_eq!(plan.product_lists[1].language, "ja-JP");
        assert_eq!(plan.product_lists[1].product_ids, vec!["A2", "A3"]);
        assert_eq!(
            plan.product_lists[1].file_name,
            "Product Inclusion List_P1_ja-JP.xlsx"
        );
    }

    #[test]
    fn test_project_code_validation() {
        assert_eq!(
            ExportPlan::new("   ", &ConversionResult::default()),
            Err(ExportError::EmptyProjectCode)
        );
        let plan = ExportPlan::new("Q3/EU:launch", &ConversionResult::default()).unwrap();
        assert_eq!(plan.project_code, "Q3_EU_launch");
    }
}
