//! Shared-string table

use std::ops::Deref;

/// Workbook-wide string pool referenced by index from `t="s"` cells
///
/// Populated once from the shared-strings part and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStringTable {
    strings: Vec<String>,
}

impl SharedStringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string, returning its index
    pub fn push<S: Into<String>>(&mut self, s: S) -> usize {
        self.strings.push(s.into());
        self.strings.len() - 1
    }

    /// Bounds-checked lookup; negative indices are never valid
    pub fn lookup(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.strings.get(i))
            .map(String::as_str)
    }

    /// All strings in index order
    pub fn as_slice(&self) -> &[String] {
        &self.strings
    }
}

impl Deref for SharedStringTable {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.strings
    }
}

impl From<Vec<String>> for SharedStringTable {
    fn from(strings: Vec<String>) -> Self {
        Self { strings }
    }
}

impl<S: Into<String>> FromIterator<S> for SharedStringTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().map(Into::into).collect(),
        }
    }
}
