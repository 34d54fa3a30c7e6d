//! pathcraft-core: localization workbook conversion
//!
//! Turns the rows of a localization request workbook into localized page
//! paths and per-language product inclusion lists.

pub mod classify;
pub mod config;
pub mod detect;
pub mod error;
pub mod export;
pub mod locale;
pub mod normalize;
pub mod reader;
pub mod record;

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

pub use classify::{Classification, ClassifierChain, FlagPolicy, RowClassifier};
pub use config::ConverterConfig;
pub use detect::{HeaderDetector, HeaderDetectorChain, LocaleColumn};
pub use error::{ConfigError, ExportError};
pub use export::{ExportPlan, ProductList};
pub use locale::LocaleMap;
pub use reader::{CellValue, Sheet, Workbook};
pub use record::{ConversionResult, MarketingRecord, ProductRecord};

/// Conventional name of the product sheet
pub const PRODUCT_SHEET_NAME: &str = "Product";

/// Main converter interface
pub struct Converter {
    config: ConverterConfig,
    locales: LocaleMap,
    headers: HeaderDetectorChain,
    classifiers: ClassifierChain,
    flags: FlagPolicy,
}

impl Converter {
    /// Create a new converter with default configuration
    pub fn new() -> Self {
        Self::build(ConverterConfig::default())
    }

    /// Create a new converter with custom configuration
    ///
    /// The configuration goes through the same checks as a loaded file.
    pub fn with_config(config: ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ConverterConfig) -> Self {
        Self {
            locales: config.locale_map(),
            headers: HeaderDetectorChain::from_config(&config),
            classifiers: ClassifierChain::default(),
            flags: FlagPolicy::from_config(&config),
            config,
        }
    }

    /// Replace the row classifier chain
    pub fn with_classifiers(mut self, classifiers: ClassifierChain) -> Self {
        self.classifiers = classifiers;
        self
    }

    pub fn locales(&self) -> &LocaleMap {
        &self.locales
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Read and convert a spreadsheet file
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<ConversionResult> {
        let workbook = reader::read_workbook(path)?;
        Ok(self.convert_workbook(&workbook))
    }

    /// Convert the marketing and product sheets of a workbook
    pub fn convert_workbook(&self, workbook: &Workbook) -> ConversionResult {
        let mut result = ConversionResult::default();

        let marketing = self.marketing_sheet(workbook);
        let product = self.product_sheet(workbook);

        match marketing {
            Some(sheet) => result.extend(self.convert_sheet(sheet)),
            None => warn!("marketing sheet not found"),
        }
        match product {
            Some(sheet) if marketing.is_some_and(|m| std::ptr::eq(m, sheet)) => {
                debug!(sheet = %sheet.name, "product sheet is the marketing sheet, already scanned");
            }
            Some(sheet) => result.extend(self.convert_sheet(sheet)),
            None => debug!("no product sheet"),
        }

        result.sort_by_language();
        info!(
            marketing = result.marketing.len(),
            products = result.products.len(),
            "conversion finished"
        );
        result
    }

    /// Convert one sheet: detect the header, find locale columns, classify rows
    pub fn convert_sheet(&self, sheet: &Sheet) -> ConversionResult {
        let mut result = ConversionResult::default();

        if let Some(err) = &sheet.read_error {
            warn!(sheet = %sheet.name, error = %err, "sheet unreadable, no data");
            return result;
        }

        let text_rows = sheet.text_rows();
        let header_index = self.headers.detect(&text_rows, &self.locales);
        let columns = match text_rows.get(header_index) {
            Some(headers) => detect::detect_locale_columns(headers, &self.locales),
            None => Vec::new(),
        };

        if columns.is_empty() {
            warn!(sheet = %sheet.name, header_row = header_index, "no locale columns found");
            return result;
        }
        debug!(
            sheet = %sheet.name,
            header_row = header_index,
            locales = ?columns.iter().map(|c| c.locale.as_str()).collect::<Vec<_>>(),
            "locale columns identified"
        );

        for (row_index, row) in sheet.rows.iter().enumerate().skip(header_index + 1) {
            let classification = self.classifiers.classify(row);
            if classification.is_none() {
                continue;
            }

            for column in &columns {
                let flagged = row
                    .get(column.index)
                    .is_some_and(|cell| self.flags.is_flagged(cell));
                if !flagged {
                    continue;
                }
                // Locale columns only ever hold mapped codes
                let Some(prefix) = self.locales.prefix(&column.locale) else {
                    continue;
                };

                match &classification {
                    Classification::Product { id } => result.products.push(ProductRecord {
                        product_id: id.clone(),
                        language: column.locale.clone(),
                        sheet: sheet.name.clone(),
                        row: row_index,
                    }),
                    Classification::Marketing { url, path } => {
                        result.marketing.push(MarketingRecord {
                            original_url: url.clone(),
                            language: column.locale.clone(),
                            localized_path: normalize::localize(prefix, path),
                            sheet: sheet.name.clone(),
                            row: row_index,
                        })
                    }
                    Classification::None => {}
                }
            }
        }

        debug!(
            sheet = %sheet.name,
            marketing = result.marketing.len(),
            products = result.products.len(),
            "sheet converted"
        );
        result
    }

    /// Configured marketing sheet, else the first sheet
    fn marketing_sheet<'a>(&self, workbook: &'a Workbook) -> Option<&'a Sheet> {
        match &self.config.marketing_sheet {
            Some(name) => workbook.get_sheet(name),
            None => workbook.sheet_at(0),
        }
    }

    /// Configured product sheet, else `Product`, else the second sheet
    fn product_sheet<'a>(&self, workbook: &'a Workbook) -> Option<&'a Sheet> {
        match &self.config.product_sheet {
            Some(name) => workbook.get_sheet(name),
            None => workbook
                .get_sheet(PRODUCT_SHEET_NAME)
                .or_else(|| workbook.sheet_at(1)),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
