//! Configuration structures for medication extraction.

use serde::{Deserialize, Serialize};

/// Main configuration for rxocr.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RxocrConfig {
    /// Table extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Labels and scope for table extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Header text opening the drug-name column, compared with all
    /// whitespace removed.
    pub header_marker: String,

    /// Label of the dose-per-administration column.
    pub dosage_label: String,

    /// Label of the administrations-per-day column.
    pub frequency_label: String,

    /// Label of the total-days column.
    pub duration_label: String,

    /// Label of the optional administration-method column.
    pub method_label: String,

    /// Scan the tables of every image instead of only the first.
    pub all_images: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            header_marker: "처방의약품의명칭".to_string(),
            dosage_label: "1회 투약량".to_string(),
            frequency_label: "1일 투여횟수".to_string(),
            duration_label: "총 투약일수".to_string(),
            method_label: "용법".to_string(),
            all_images: false,
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

/// Output format for extracted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of records.
    #[default]
    Json,
    /// CSV with a header row.
    Csv,
    /// One record per line.
    Text,
}

impl OutputFormat {
    /// File extension used when writing this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

impl RxocrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
