//! Style inputs consumed by cell classification
//!
//! Only the number format of each cell style matters here: a style whose format is a
//! date or time marks numeric cells using it as dates.

mod date_styles;
mod number_format;

pub use date_styles::DateStyleSet;
pub use number_format::NumberFormat;
