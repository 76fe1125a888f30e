//! Reading tests - build a workbook, decode it, check the values.

mod data_types;
mod dates;
mod diagnostics;
mod workbook;
