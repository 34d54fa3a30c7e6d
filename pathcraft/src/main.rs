use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use pathcraft_core::{Converter, ConverterConfig, ExportPlan};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod formatter;

/// Exit code for a run that found nothing to convert
const EXIT_NO_DATA: i32 = 2;

#[derive(Parser)]
#[command(name = "pathcraft")]
#[command(about = "Convert localization workbooks into localized URL paths and product lists", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS workbook to convert
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Project code used to name the export files
    #[arg(short, long, value_name = "CODE")]
    project: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output for scripting
    Json,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ConverterConfig> {
    if let Some(config_path) = path {
        return ConverterConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    // Try to load default config from current directory if it exists
    let default_config_path = PathBuf::from("pathcraft.toml");
    if default_config_path.exists() {
        ConverterConfig::from_file(&default_config_path).with_context(|| {
            format!(
                "Failed to load config from {}",
                default_config_path.display()
            )
        })
    } else {
        Ok(ConverterConfig::default())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let converter = Converter::with_config(config).context("Invalid configuration")?;

    info!(file = %cli.file.display(), "converting workbook");
    let result = converter
        .convert_file(&cli.file)
        .with_context(|| format!("Failed to convert file: {}", cli.file.display()))?;

    let plan = cli
        .project
        .as_deref()
        .map(|code| ExportPlan::new(code, &result))
        .transpose()
        .context("Invalid project code")?;

    match cli.format {
        OutputFormat::Human => formatter::print_human(&cli.file, &result, plan.as_ref()),
        OutputFormat::Json => formatter::print_json(&cli.file, &result, plan.as_ref())?,
    }

    if result.is_empty() {
        std::process::exit(EXIT_NO_DATA);
    }
    Ok(())
}
