//! # xlcell-core
//!
//! Core types for decoding spreadsheet cells.
//!
//! This crate provides the pieces every cell decoder needs regardless of where the
//! cell XML came from:
//! - [`CellCoordinate`] - Zero-indexed (row, col) parsed from an `A1` reference
//! - [`CellType`] and [`DeclaredType`] - Effective and declared cell types
//! - [`CellValue`] - A decoded value (blank, number, date, text)
//! - [`SharedStringTable`], [`DateStyleSet`], [`MissingValue`] - Read-only lookup inputs
//! - [`Diagnostics`] - Soft warnings collected while reading
//!
//! ## Example
//!
//! ```rust
//! use xlcell_core::{parse_reference, CellCoordinate};
//!
//! let coord = parse_reference("AA12").unwrap();
//! assert_eq!(coord, CellCoordinate::new(11, 26));
//! assert_eq!(coord.to_reference(), "AA12");
//! ```

pub mod cell;
pub mod date;
pub mod diagnostics;
pub mod error;
pub mod missing;
pub mod numeric;
pub mod strings;
pub mod style;

// Re-exports for convenience
pub use cell::{parse_reference, CellCoordinate, CellType, CellValue, DeclaredType};
pub use date::DateSystem;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{Error, Result};
pub use missing::MissingValue;
pub use strings::SharedStringTable;
pub use style::{DateStyleSet, NumberFormat};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Seconds in one day, the unit a date serial is scaled by
pub const SECONDS_PER_DAY: f64 = 86_400.0;
