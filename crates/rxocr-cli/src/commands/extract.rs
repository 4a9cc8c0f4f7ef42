//! Extract command - medications from a single OCR response.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use rxocr_core::models::config::RxocrConfig;
use rxocr_core::models::document::{OcrDocument, OcrResponse};
use rxocr_core::TableExtractor;

use super::config::load_config;
use super::output::{format_records, FormatArg};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// OCR response JSON file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Scan tables of every image, not only the first
    #[arg(long)]
    all_images: bool,

    /// Show extraction statistics
    #[arg(long)]
    stats: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let body = tokio::fs::read_to_string(&args.input).await?;
    let document = load_document(&body, &config, args.all_images)?;

    let extractor = TableExtractor::from_config(&config.extraction);
    let result = extractor.extract_detailed(&document);

    for warning in &result.warnings {
        warn!("{}: {}", args.input.display(), warning);
    }

    let format = args.format.map(Into::into).unwrap_or(config.output.format);
    let output = format_records(&result.records, format, args.pretty || config.output.pretty)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.stats {
        eprintln!(
            "{} {} medications from {} tables, {} rows rejected, {}ms",
            style("ℹ").blue(),
            result.records.len(),
            result.tables_scanned,
            result.rejected_rows,
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Parse a response body into the document to scan.
pub fn load_document(
    body: &str,
    config: &RxocrConfig,
    all_images: bool,
) -> anyhow::Result<OcrDocument> {
    let response = OcrResponse::from_json(body)?;
    let document =
        OcrDocument::from_response(response, all_images || config.extraction.all_images)?;
    Ok(document)
}
