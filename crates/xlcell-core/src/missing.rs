//! Missing-value sentinel

/// Text that marks a cell as having no data
///
/// The sentinel is user configurable and compared verbatim against a cell's raw or
/// resolved string. It defaults to the empty string, so empty cells read as missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MissingValue(String);

impl MissingValue {
    /// Create a sentinel
    pub fn new<S: Into<String>>(sentinel: S) -> Self {
        MissingValue(sentinel.into())
    }

    /// The sentinel text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `value` is exactly the sentinel
    pub fn matches(&self, value: &str) -> bool {
        self.0 == value
    }
}

impl From<&str> for MissingValue {
    fn from(s: &str) -> Self {
        MissingValue::new(s)
    }
}

impl From<String> for MissingValue {
    fn from(s: String) -> Self {
        MissingValue(s)
    }
}
