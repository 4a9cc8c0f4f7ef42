//! Scan state for one extraction pass.

use std::collections::HashSet;

use super::rules::ColumnRole;

/// Where a pass currently is in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// No header marker seen yet; every cell is noise.
    SeekingHeader,
    /// Header seen, some required column role still unbound.
    BindingColumns,
    /// All required roles bound; rows are candidates for extraction.
    Extracting,
}

/// Mutable state threaded through a single pass over a document.
///
/// Created fresh for each extraction and dropped on return. Column bindings
/// are first-match-wins: once a role has a column, later matches are ignored.
#[derive(Debug, Clone, Default)]
pub struct ExtractionState {
    header_found: bool,
    name_column: Option<usize>,
    dosage_column: Option<usize>,
    frequency_column: Option<usize>,
    duration_column: Option<usize>,
    method_column: Option<usize>,
    label_rows: HashSet<usize>,
    processed_rows: HashSet<usize>,
    rejected_rows: HashSet<(usize, usize)>,
}

impl ExtractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        if !self.header_found {
            ScanPhase::SeekingHeader
        } else if ColumnRole::REQUIRED.iter().any(|r| self.column(*r).is_none()) {
            ScanPhase::BindingColumns
        } else {
            ScanPhase::Extracting
        }
    }

    pub fn header_found(&self) -> bool {
        self.header_found
    }

    /// Record the header cell, binding the name column if still unset.
    pub fn mark_header(&mut self, row: usize, col: usize) {
        self.header_found = true;
        if self.bind(ColumnRole::Name, col) {
            self.mark_label_row(row);
        }
    }

    /// Record a row that bound a required column role.
    pub fn mark_label_row(&mut self, row: usize) {
        self.label_rows.insert(row);
    }

    /// Whether a required column role was bound from `row`.
    pub fn is_label_row(&self, row: usize) -> bool {
        self.label_rows.contains(&row)
    }

    pub fn column(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::Name => self.name_column,
            ColumnRole::Dosage => self.dosage_column,
            ColumnRole::Frequency => self.frequency_column,
            ColumnRole::Duration => self.duration_column,
            ColumnRole::Method => self.method_column,
        }
    }

    /// Bind `role` to `col` unless it is already bound.
    ///
    /// Returns `true` if the binding was made.
    pub fn bind(&mut self, role: ColumnRole, col: usize) -> bool {
        let slot = match role {
            ColumnRole::Name => &mut self.name_column,
            ColumnRole::Dosage => &mut self.dosage_column,
            ColumnRole::Frequency => &mut self.frequency_column,
            ColumnRole::Duration => &mut self.duration_column,
            ColumnRole::Method => &mut self.method_column,
        };

        if slot.is_some() {
            return false;
        }
        *slot = Some(col);
        true
    }

    /// Whether a record was already emitted for `row`.
    ///
    /// Keyed by row index alone, across all tables of the document.
    pub fn is_processed(&self, row: usize) -> bool {
        self.processed_rows.contains(&row)
    }

    pub fn mark_processed(&mut self, row: usize) {
        self.processed_rows.insert(row);
    }

    pub fn mark_rejected(&mut self, table: usize, row: usize) {
        self.rejected_rows.insert((table, row));
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected_rows.len()
    }
}
