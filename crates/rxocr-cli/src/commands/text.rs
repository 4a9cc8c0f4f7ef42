//! Text command - print raw recognized text.

use std::path::PathBuf;

use clap::Args;

use rxocr_core::models::document::OcrResponse;

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// OCR response JSON file
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: TextArgs) -> anyhow::Result<()> {
    let body = tokio::fs::read_to_string(&args.input).await?;
    let response = OcrResponse::from_json(&body)?;

    println!("{}", response.raw_text());

    Ok(())
}
