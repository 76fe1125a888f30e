//! Soft warnings collected while decoding cells
//!
//! Recoverable problems do not abort a read. They are logged as they happen and kept
//! here so callers get them back alongside the parsed data.

use std::fmt;

use crate::cell::CellCoordinate;

/// What went wrong with a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `t` attribute with a code outside ST_CellType; the cell is read as text
    UnknownCellType(String),
    /// Shared-string index outside the table; the cell is read as blank
    InvalidStringIndex(i64),
    /// Inline string container without any text; the cell is read as blank
    MalformedRichText,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnknownCellType(code) => write!(f, "unknown type '{}'", code),
            DiagnosticKind::InvalidStringIndex(id) => write!(f, "Invalid string id {}", id),
            DiagnosticKind::MalformedRichText => write!(f, "inline string has no text"),
        }
    }
}

/// A warning tied to a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub coordinate: CellCoordinate,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.coordinate, self.kind)
    }
}

/// Ordered list of warnings for one read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a warning
    pub fn warn(&mut self, coordinate: CellCoordinate, kind: DiagnosticKind) {
        let diagnostic = Diagnostic { coordinate, kind };
        log::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Warnings recorded for one cell
    pub fn for_cell(&self, coordinate: CellCoordinate) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(move |d| d.coordinate == coordinate)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
