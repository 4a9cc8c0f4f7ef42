//! Medication record extracted from a prescription table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One medication line of a prescription.
///
/// All fields are cleaned display strings; an empty value means the
/// corresponding cell was missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    /// Drug name (명칭), without product codes and parenthesized notes.
    pub name: String,
    /// Dose per administration (1회 투약량).
    pub dosage: String,
    /// Administrations per day (1일 투여횟수).
    pub frequency: String,
    /// Total days of treatment (총 투약일수).
    pub duration: String,
    /// Administration method (용법).
    #[serde(default)]
    pub method: String,
}

impl MedicationRecord {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            duration: duration.into(),
            method: String::new(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Column headers matching [`MedicationRecord::to_row`].
    pub fn columns() -> [&'static str; 5] {
        ["name", "dosage", "frequency", "duration", "method"]
    }

    /// Field values in column order.
    pub fn to_row(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.dosage.as_str(),
            self.frequency.as_str(),
            self.duration.as_str(),
            self.method.as_str(),
        ]
    }
}

impl fmt::Display for MedicationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.name, self.dosage, self.frequency, self.duration, self.method
        )
    }
}
