//! OCR table response model.
//!
//! Mirrors the shape returned by the table-enabled OCR endpoint:
//! `images[].tables[].cells[].cellTextLines[].cellWords[].inferText`.
//! Structural keys (`images`, `tables`, `cells`, cell coordinates) are
//! required; text containers inside a cell default to empty so a sparse
//! cell reads as empty text instead of failing the whole document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DocumentError;

/// A recognized text token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "inferText", default)]
    pub text: String,
}

/// Words of one recognized line, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(rename = "cellWords", default)]
    pub words: Vec<Word>,
}

/// One grid position of a recognized table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0-based).
    #[serde(rename = "rowIndex")]
    pub row: usize,
    /// Column index (0-based).
    #[serde(rename = "columnIndex")]
    pub col: usize,
    /// Recognized lines, top to bottom.
    #[serde(rename = "cellTextLines", default)]
    pub lines: Vec<Line>,
}

impl Cell {
    /// Create a cell holding a single line of whitespace-separated words.
    pub fn new(row: usize, col: usize, text: &str) -> Self {
        let words = text
            .split_whitespace()
            .map(|w| Word { text: w.to_string() })
            .collect();

        Self {
            row,
            col,
            lines: vec![Line { words }],
        }
    }

    /// All words of the cell joined by single spaces, trimmed.
    pub fn text(&self) -> String {
        let words: Vec<&str> = self
            .lines
            .iter()
            .flat_map(|line| line.words.iter())
            .map(|word| word.text.as_str())
            .collect();

        words.join(" ").trim().to_string()
    }
}

/// A recognized table: a flat list of cells whose coordinates must be
/// joined by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub cells: Vec<Cell>,
}

impl Table {
    /// Text of the first cell at `(row, col)`, or an empty string.
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        self.cells
            .iter()
            .find(|c| c.row == row && c.col == col)
            .map(Cell::text)
            .unwrap_or_default()
    }
}

/// A free-text field recognized outside any table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "inferText", default)]
    pub text: String,
}

/// Recognition result for one submitted image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrImage {
    /// Image name as submitted.
    #[serde(default)]
    pub name: Option<String>,
    /// Recognition outcome reported by the service (e.g. "SUCCESS").
    #[serde(rename = "inferResult", default)]
    pub infer_result: Option<String>,
    /// Free-text fields.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Tables, present only when table detection was requested.
    #[serde(default)]
    pub tables: Option<Vec<Table>>,
}

/// Raw OCR response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrResponse {
    pub images: Vec<OcrImage>,
}

impl OcrResponse {
    /// Parse a response body.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a response body from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// All free-text fields of all images joined by single spaces.
    pub fn raw_text(&self) -> String {
        let words: Vec<&str> = self
            .images
            .iter()
            .flat_map(|image| image.fields.iter())
            .map(|field| field.text.as_str())
            .filter(|text| !text.is_empty())
            .collect();

        words.join(" ")
    }
}

/// The tables scanned for medication data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrDocument {
    pub tables: Vec<Table>,
}

impl OcrDocument {
    /// Create a document from already-built tables.
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Parse a response body and keep the tables of the first image.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Self::from_response(OcrResponse::from_json(json)?, false)
    }

    /// Parse a response body from a reader and keep the tables of the first image.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Self::from_response(OcrResponse::from_reader(reader)?, false)
    }

    /// Read a response body from a file.
    pub fn from_path(path: &Path, all_images: bool) -> crate::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(Self::from_response(OcrResponse::from_reader(reader)?, all_images)?)
    }

    /// Build a document from a parsed response.
    ///
    /// With `all_images` unset only `images[0]` is consumed; otherwise the
    /// tables of every image are concatenated in order and images without
    /// tables are skipped.
    pub fn from_response(response: OcrResponse, all_images: bool) -> Result<Self, DocumentError> {
        if response.images.is_empty() {
            return Err(DocumentError::NoImages);
        }

        let tables = if all_images {
            let tables: Vec<Table> = response
                .images
                .into_iter()
                .filter_map(|image| image.tables)
                .flatten()
                .collect();
            if tables.is_empty() {
                return Err(DocumentError::NoTables);
            }
            tables
        } else {
            response
                .images
                .into_iter()
                .next()
                .and_then(|image| image.tables)
                .ok_or(DocumentError::NoTables)?
        };

        debug!(
            "Loaded document with {} tables, {} cells",
            tables.len(),
            tables.iter().map(|t| t.cells.len()).sum::<usize>()
        );

        Ok(Self { tables })
    }

    /// Total number of cells across all tables.
    pub fn cell_count(&self) -> usize {
        self.tables.iter().map(|t| t.cells.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "version": "V2",
        "images": [{
            "name": "demo",
            "inferResult": "SUCCESS",
            "fields": [{"inferText": "처방전"}, {"inferText": "교부번호"}],
            "tables": [{
                "cells": [
                    {
                        "rowIndex": 0,
                        "columnIndex": 0,
                        "cellTextLines": [
                            {"cellWords": [{"inferText": "처방"}, {"inferText": "의약품의"}]},
                            {"cellWords": [{"inferText": "명칭"}]}
                        ]
                    },
                    {"rowIndex": 0, "columnIndex": 1}
                ]
            }]
        }]
    }"#;

    #[test]
    fn test_parse_response() {
        let doc = OcrDocument::from_json(RESPONSE).unwrap();

        assert_eq!(doc.tables.len(), 1);
        assert_eq!(doc.cell_count(), 2);
        assert_eq!(doc.tables[0].cells[0].text(), "처방 의약품의 명칭");
    }

    #[test]
    fn test_missing_text_lines_read_as_empty() {
        let doc = OcrDocument::from_json(RESPONSE).unwrap();

        assert_eq!(doc.tables[0].cells[1].text(), "");
        assert_eq!(doc.tables[0].cell_text(0, 1), "");
    }

    #[test]
    fn test_cell_text_lookup() {
        let table = Table {
            cells: vec![
                Cell::new(1, 0, "첫번째"),
                Cell::new(1, 0, "두번째"),
                Cell::new(1, 2, "  5  일 "),
            ],
        };

        assert_eq!(table.cell_text(1, 0), "첫번째");
        assert_eq!(table.cell_text(1, 2), "5 일");
        assert_eq!(table.cell_text(3, 3), "");
    }

    #[test]
    fn test_raw_text() {
        let response = OcrResponse::from_json(RESPONSE).unwrap();
        assert_eq!(response.raw_text(), "처방전 교부번호");
    }

    #[test]
    fn test_no_images() {
        let err = OcrDocument::from_json(r#"{"images": []}"#).unwrap_err();
        assert!(matches!(err, DocumentError::NoImages));
    }

    #[test]
    fn test_no_tables() {
        let err = OcrDocument::from_json(r#"{"images": [{"fields": []}]}"#).unwrap_err();
        assert!(matches!(err, DocumentError::NoTables));
        assert_eq!(err.to_string(), "OCR response has no tables");
    }

    #[test]
    fn test_missing_cells_is_error() {
        let err = OcrDocument::from_json(r#"{"images": [{"tables": [{}]}]}"#).unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = OcrDocument::from_json("{\"images\": [").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, RESPONSE).unwrap();

        let doc = OcrDocument::from_path(&path, false).unwrap();
        assert_eq!(doc.cell_count(), 2);

        let missing = OcrDocument::from_path(&dir.path().join("missing.json"), false);
        assert!(matches!(missing, Err(crate::RxocrError::Io(_))));
    }

    #[test]
    fn test_all_images() {
        let json = r#"{"images": [
            {"tables": [{"cells": [{"rowIndex": 0, "columnIndex": 0}]}]},
            {"fields": []},
            {"tables": [{"cells": []}, {"cells": []}]}
        ]}"#;

        let response = OcrResponse::from_json(json).unwrap();
        let first_only = OcrDocument::from_response(response.clone(), false).unwrap();
        let all = OcrDocument::from_response(response, true).unwrap();

        assert_eq!(first_only.tables.len(), 1);
        assert_eq!(all.tables.len(), 3);
    }

    #[test]
    fn test_all_images_without_tables() {
        let response =
            OcrResponse::from_json(r#"{"images": [{"fields": []}, {"fields": []}]}"#).unwrap();

        let err = OcrDocument::from_response(response, true).unwrap_err();
        assert!(matches!(err, DocumentError::NoTables));
    }
}
