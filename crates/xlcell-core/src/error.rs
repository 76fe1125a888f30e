//! Error types for xlcell-core

use thiserror::Error;

use crate::cell::CellCoordinate;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Hard errors raised while decoding a cell.
///
/// Any of these aborts the read of the enclosing worksheet. Recoverable problems are
/// reported as [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Reference contains a character outside `[A-Z0-9]`
    #[error("Invalid character '{character}' in cell ref '{reference}'")]
    MalformedReference { character: char, reference: String },

    /// Reference is too long to fit the coordinate range
    #[error("Cell ref '{reference}' is out of range")]
    ReferenceOutOfRange { reference: String },

    /// `<c>` element without an `r` attribute
    #[error("Invalid cell: lacks ref attribute")]
    MissingReference,

    /// Shared-string index outside the table
    #[error("{coordinate}: Invalid string id {index} (table has {len} entries)")]
    InvalidStringIndex {
        coordinate: CellCoordinate,
        index: i64,
        len: usize,
    },
}
