//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellCoordinate`] - A cell's location parsed from its reference (e.g., "A1")
//! - [`CellType`] - The effective type a cell decodes to
//! - [`DeclaredType`] - The type code carried by the cell's `t` attribute
//! - [`CellValue`] - A decoded cell value

mod coordinate;
mod kind;
mod value;

pub use coordinate::{column_to_letters, parse_reference, CellCoordinate};
pub use kind::{CellType, DeclaredType};
pub use value::CellValue;
