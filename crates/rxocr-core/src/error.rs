//! Error types for the rxocr-core library.

use thiserror::Error;

/// Main error type for the rxocr library.
#[derive(Error, Debug)]
pub enum RxocrError {
    /// The OCR response could not be turned into a document.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised at the document boundary.
///
/// Anything past this boundary is best-effort: a parsed document never
/// makes extraction fail.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Malformed JSON, or a required key is missing or mistyped.
    #[error("unparsable OCR response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response contains no images.
    #[error("OCR response has no images")]
    NoImages,

    /// No consumed image carries a table detection result.
    #[error("OCR response has no tables")]
    NoTables,
}

impl From<serde_json::Error> for RxocrError {
    fn from(err: serde_json::Error) -> Self {
        RxocrError::Document(DocumentError::Json(err))
    }
}

/// Result type for the rxocr library.
pub type Result<T> = std::result::Result<T, RxocrError>;
