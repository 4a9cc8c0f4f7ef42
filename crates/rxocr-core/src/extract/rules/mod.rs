//! Rule-based field cleaners for prescription tables.
//!
//! Each cleaner is a pure `&str -> String` transform so it can be composed
//! and tested on its own.

pub mod cleaners;
pub mod patterns;

pub use cleaners::{
    clean_dosage, clean_duration, clean_frequency, clean_method, clean_name, is_medication_name,
};
pub use patterns::*;

/// A column role of the prescription table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Name,
    Dosage,
    Frequency,
    Duration,
    Method,
}

impl ColumnRole {
    /// Roles that must all be bound before rows are extracted.
    pub const REQUIRED: [ColumnRole; 4] = [
        ColumnRole::Name,
        ColumnRole::Dosage,
        ColumnRole::Frequency,
        ColumnRole::Duration,
    ];

    /// The cleaner applied to raw cell text of this role.
    pub fn cleaner(&self) -> fn(&str) -> String {
        match self {
            ColumnRole::Name => clean_name,
            ColumnRole::Dosage => clean_dosage,
            ColumnRole::Frequency => clean_frequency,
            ColumnRole::Duration => clean_duration,
            ColumnRole::Method => clean_method,
        }
    }

    /// Clean raw cell text for this role.
    pub fn clean(&self, raw: &str) -> String {
        (self.cleaner())(raw)
    }
}
