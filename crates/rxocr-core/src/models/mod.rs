//! Data models: OCR input, extracted records, configuration.

pub mod config;
pub mod document;
pub mod medication;
