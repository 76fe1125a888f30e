//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur during XLSX reading
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error from the streaming reader
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML error from the tree parser
    #[error("XML error: {0}")]
    Dom(#[from] roxmltree::Error),

    /// Invalid file format
    #[error("Invalid XLSX format: {0}")]
    InvalidFormat(String),

    /// Missing required part
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// Requested sheet does not exist
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Cell decoding error
    #[error("Cell error: {0}")]
    Cell(#[from] xlcell_core::Error),
}
