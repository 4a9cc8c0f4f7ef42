//! Prescription table parser with dynamic column-role inference.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::document::{OcrDocument, Table};
use crate::models::medication::MedicationRecord;

use super::rules::{is_medication_name, ColumnRole, WHITESPACE};
use super::state::{ExtractionState, ScanPhase};
use super::MedicationExtractor;

/// Result of a detailed extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Accepted records, in row discovery order.
    pub records: Vec<MedicationRecord>,
    /// Whether the header marker was seen.
    pub header_found: bool,
    /// Number of tables scanned.
    pub tables_scanned: usize,
    /// Candidate rows dropped by the name check.
    pub rejected_rows: usize,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Extracts medication records from prescription tables.
///
/// The header cell is found by its marker text, column roles are bound by
/// label text as they appear, and each row is read once every required role
/// has a column.
#[derive(Debug, Clone)]
pub struct TableExtractor {
    /// Header marker with whitespace removed.
    header_marker: String,
    dosage_label: String,
    frequency_label: String,
    duration_label: String,
    method_label: String,
}

impl TableExtractor {
    /// Create an extractor with the default prescription labels.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            header_marker: squeeze(&config.header_marker),
            dosage_label: config.dosage_label.clone(),
            frequency_label: config.frequency_label.clone(),
            duration_label: config.duration_label.clone(),
            method_label: config.method_label.clone(),
        }
    }

    /// Set the header marker text.
    pub fn with_header_marker(mut self, marker: &str) -> Self {
        self.header_marker = squeeze(marker);
        self
    }

    /// Set the label text that binds a column role.
    ///
    /// The name role is bound by the header marker and ignores this call.
    pub fn with_label(mut self, role: ColumnRole, label: impl Into<String>) -> Self {
        let label = label.into();
        match role {
            ColumnRole::Name => {}
            ColumnRole::Dosage => self.dosage_label = label,
            ColumnRole::Frequency => self.frequency_label = label,
            ColumnRole::Duration => self.duration_label = label,
            ColumnRole::Method => self.method_label = label,
        }
        self
    }

    fn label(&self, role: ColumnRole) -> Option<&str> {
        let label = match role {
            ColumnRole::Name => return None,
            ColumnRole::Dosage => &self.dosage_label,
            ColumnRole::Frequency => &self.frequency_label,
            ColumnRole::Duration => &self.duration_label,
            ColumnRole::Method => &self.method_label,
        };
        (!label.is_empty()).then_some(label.as_str())
    }

    fn is_header(&self, text: &str) -> bool {
        !self.header_marker.is_empty() && squeeze(text).contains(&self.header_marker)
    }

    /// Bind every unbound role whose label occurs in `text`.
    ///
    /// The optional method role only binds from a row that already bound a
    /// required role, so notes in data rows cannot claim it.
    fn bind_labels(&self, state: &mut ExtractionState, row: usize, col: usize, text: &str) {
        for role in ColumnRole::REQUIRED {
            if state.column(role).is_some() {
                continue;
            }
            let Some(label) = self.label(role) else {
                continue;
            };
            if text.contains(label) && state.bind(role, col) {
                state.mark_label_row(row);
                debug!("Bound {:?} column to index {}", role, col);
            }
        }

        if state.column(ColumnRole::Method).is_none() && state.is_label_row(row) {
            if let Some(label) = self.label(ColumnRole::Method) {
                if text.contains(label) && state.bind(ColumnRole::Method, col) {
                    debug!("Bound {:?} column to index {}", ColumnRole::Method, col);
                }
            }
        }
    }

    /// Read and clean one row using the bound columns.
    fn read_row(&self, state: &ExtractionState, table: &Table, row: usize) -> MedicationRecord {
        let field = |role: ColumnRole| {
            state
                .column(role)
                .map(|col| role.clean(&table.cell_text(row, col)))
                .unwrap_or_default()
        };

        MedicationRecord {
            name: field(ColumnRole::Name),
            dosage: field(ColumnRole::Dosage),
            frequency: field(ColumnRole::Frequency),
            duration: field(ColumnRole::Duration),
            method: field(ColumnRole::Method),
        }
    }

    /// Extract records along with pass statistics.
    pub fn extract_detailed(&self, document: &OcrDocument) -> ExtractionResult {
        let start = Instant::now();
        let mut state = ExtractionState::new();
        let mut records = Vec::new();

        for (table_idx, table) in document.tables.iter().enumerate() {
            for cell in &table.cells {
                if state.is_processed(cell.row) {
                    continue;
                }

                let text = cell.text();

                if self.is_header(&text) {
                    if !state.header_found() {
                        debug!(
                            "Found header in table {} at ({}, {})",
                            table_idx, cell.row, cell.col
                        );
                    }
                    state.mark_header(cell.row, cell.col);
                    continue;
                }

                if state.phase() == ScanPhase::SeekingHeader {
                    continue;
                }

                // Method is optional and may sit after the last required label.
                if state.phase() == ScanPhase::BindingColumns
                    || state.column(ColumnRole::Method).is_none()
                {
                    self.bind_labels(&mut state, cell.row, cell.col, &text);
                }

                if state.phase() != ScanPhase::Extracting {
                    continue;
                }

                let record = self.read_row(&state, table, cell.row);
                if is_medication_name(&record.name) {
                    debug!("Accepted row {} of table {}: {}", cell.row, table_idx, record);
                    records.push(record);
                    state.mark_processed(cell.row);
                } else {
                    debug!(
                        "Rejected row {} of table {}: name {:?}",
                        cell.row, table_idx, record.name
                    );
                    state.mark_rejected(table_idx, cell.row);
                }
            }
        }

        let mut warnings = Vec::new();
        match state.phase() {
            ScanPhase::SeekingHeader => warnings.push("header marker not found".to_string()),
            ScanPhase::BindingColumns => {
                warnings.push("column roles never fully bound".to_string())
            }
            ScanPhase::Extracting => {}
        }

        info!(
            "Extracted {} medications from {} tables ({} rows rejected)",
            records.len(),
            document.tables.len(),
            state.rejected_count()
        );

        ExtractionResult {
            records,
            header_found: state.header_found(),
            tables_scanned: document.tables.len(),
            rejected_rows: state.rejected_count(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicationExtractor for TableExtractor {
    fn extract(&self, document: &OcrDocument) -> Vec<MedicationRecord> {
        self.extract_detailed(document).records
    }
}

fn squeeze(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}
