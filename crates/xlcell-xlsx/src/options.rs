//! Read options

use xlcell_core::{DateSystem, MissingValue};

/// Options for reading worksheet cells
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Text treated as "no data" (default: empty string)
    pub missing: MissingValue,
    /// Date system override; detected from the workbook when `None`
    pub date_system: Option<DateSystem>,
    /// Drop cells that decode to blank
    pub skip_blank: bool,
}

impl ReadOptions {
    /// Options with a custom missing-value sentinel
    pub fn with_missing<S: Into<String>>(sentinel: S) -> Self {
        Self {
            missing: MissingValue::new(sentinel),
            ..Self::default()
        }
    }
}
