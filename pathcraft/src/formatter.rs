//! Output formatters for conversion results

use anyhow::Result;
use colored::*;
use pathcraft_core::{ConversionResult, ExportPlan};
use std::path::Path;

/// Print records in human-readable format, grouped by language
pub fn print_human(file_path: &Path, result: &ConversionResult, plan: Option<&ExportPlan>) {
    println!("{}", format!("Converting: {}", file_path.display()).bold());
    println!();

    if result.is_empty() {
        println!("{}", "No valid data found in the file.".yellow().bold());
        return;
    }

    if !result.marketing.is_empty() {
        println!("{}", "Localized URLs:".bold().underline());
        for language in result.languages() {
            let mut records = result.marketing_for(language).peekable();
            if records.peek().is_none() {
                continue;
            }
            println!("  {} {}", "Language:".bold(), language.cyan().bold());
            for record in records {
                println!("    {}", record.localized_path.green());
                println!("      {} {}", "from".bright_black(), record.original_url);
            }
        }
        println!();
    }

    if !result.products.is_empty() {
        println!("{}", "Product inclusion:".bold().underline());
        for language in result.languages() {
            let ids: Vec<&str> = result
                .products_for(language)
                .map(|r| r.product_id.as_str())
                .collect();
            if ids.is_empty() {
                continue;
            }
            println!(
                "  {} {} ({})",
                "Language:".bold(),
                language.cyan().bold(),
                ids.len()
            );
            println!("    {}", ids.join(", "));
        }
        println!();
    }

    if let Some(plan) = plan {
        println!("{}", "Export files:".bold().underline());
        println!("  {}", plan.converted_urls_file);
        for list in &plan.product_lists {
            println!("  {} {}", list.file_name, format!("({} IDs)", list.product_ids.len()).bright_black());
        }
        println!("  {}", plan.archive_file);
        println!();
    }

    println!("{}", "Summary:".bold().underline());
    println!("  {} {}", "Localized URLs:".green().bold(), result.marketing.len());
    println!("  {} {}", "Product entries:".green().bold(), result.products.len());
    println!("  {} {}", "Languages:".blue().bold(), result.languages().join(", "));
}

/// Print records in JSON format
pub fn print_json(file_path: &Path, result: &ConversionResult, plan: Option<&ExportPlan>) -> Result<()> {
    let mut output = serde_json::json!({
        "file": file_path.display().to_string(),
        "marketing": result.marketing,
        "products": result.products,
        "summary": {
            "marketing": result.marketing.len(),
            "products": result.products.len(),
            "languages": result.languages(),
        }
    });
    if let Some(plan) = plan {
        output["exports"] = serde_json::to_value(plan)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
