//! Matsym CLI
//!
//! Converts a code-point header into its UTF-8 string-literal counterpart.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use matsym_converter::{read_header, HeaderConverter};
use matsym_core::{ConversionSummary, ConverterConfig};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matsym-codepoints")]
#[command(author, version, about = "Convert code-point macros into UTF-8 string macros", long_about = None)]
struct Cli {
    /// Header with `#define NAME 0xHEX` lines (default: matsym_codepoints.h)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Header to write (default: matsym_codepoints_utf8.h)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON file overriding macro names and defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the converted header instead of writing OUTPUT
    #[arg(long)]
    dry_run: bool,

    /// Diagnostic format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        println!("{}", error_message(&err));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let (input, output) = resolve_paths(cli, &config);
    debug!("Converting {:?} -> {:?}", input, output);

    let converter = HeaderConverter::with_config(config);

    if cli.dry_run {
        let source = read_header(&input)?;
        print!("{}", converter.render_header(&source)?);
        return Ok(());
    }

    let summary = converter.convert(&input, &output)?;
    println!("{}", render_summary(&summary, cli.format)?);

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ConverterConfig> {
    match path {
        Some(path) => ConverterConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ConverterConfig::default()),
    }
}

/// Input and output paths, falling back to the configured defaults
fn resolve_paths(cli: &Cli, config: &ConverterConfig) -> (PathBuf, PathBuf) {
    let input = cli.input.clone().unwrap_or_else(|| config.default_input.clone());
    let output = cli.output.clone().unwrap_or_else(|| config.default_output.clone());
    (input, output)
}

fn render_summary(summary: &ConversionSummary, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => summary.to_string(),
        Format::Json => serde_json::to_string_pretty(summary)?,
    })
}

fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}
