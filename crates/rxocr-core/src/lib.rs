//! Core library for prescription OCR processing.
//!
//! This crate provides:
//! - The OCR table response model (images, tables, cells, lines, words)
//! - Medication extraction from prescription tables with dynamic column roles
//! - Field cleaning rules for noisy recognized text
//! - Configuration for labels and output

pub mod error;
pub mod extract;
pub mod models;

pub use error::{DocumentError, Result, RxocrError};
pub use extract::{ExtractionResult, MedicationExtractor, TableExtractor};
pub use models::document::{Cell, Line, OcrDocument, OcrResponse, Table, Word};
pub use models::medication::MedicationRecord;
