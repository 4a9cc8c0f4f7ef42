//! Medication extraction from OCR tables.

mod parser;
pub mod rules;
mod state;

pub use parser::{ExtractionResult, TableExtractor};
pub use rules::ColumnRole;
pub use state::{ExtractionState, ScanPhase};

use crate::models::document::OcrDocument;
use crate::models::medication::MedicationRecord;

/// Trait for medication extractors.
pub trait MedicationExtractor {
    /// Extract medication records from a document, in discovery order.
    ///
    /// Never fails: unreadable cells and rows are skipped.
    fn extract(&self, document: &OcrDocument) -> Vec<MedicationRecord>;
}
