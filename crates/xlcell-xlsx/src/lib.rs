//! # xlcell-xlsx
//!
//! Decodes XLSX (Office Open XML) worksheet cells into typed values.
//!
//! [`XlsxCell`] wraps a single `<c>` element and does the actual work: reference
//! parsing, type classification against the workbook's date styles, and value
//! extraction with missing-value handling. [`XlsxReader`] opens the archive, builds the
//! shared-string table and date-style set once, and runs every cell of a sheet through
//! [`XlsxCell`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use xlcell_xlsx::{ReadOptions, XlsxReader};
//!
//! let mut reader = XlsxReader::open("book.xlsx")?;
//! let sheet = reader.read_sheet(0, &ReadOptions::with_missing("NA"))?;
//! for cell in &sheet.cells {
//!     println!("{} {} {}", cell.coordinate.to_reference(), cell.cell_type, cell.value);
//! }
//! for warning in &sheet.diagnostics {
//!     eprintln!("warning: {}", warning);
//! }
//! # Ok::<(), xlcell_xlsx::XlsxError>(())
//! ```

pub mod cell;
pub mod error;
pub mod options;
pub mod reader;
pub mod rich_text;
pub mod shared_strings;
pub mod styles;

mod xml;

pub use cell::XlsxCell;
pub use error::{XlsxError, XlsxResult};
pub use options::ReadOptions;
pub use reader::{ParsedCell, SheetData, SheetEntry, XlsxReader};
pub use rich_text::resolve_text;
pub use shared_strings::parse_shared_strings;
pub use styles::{read_styles_xml, ParsedStyles};
