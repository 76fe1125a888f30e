//! Set of style indices whose number format is a date

use ahash::AHashSet;

use super::NumberFormat;

/// Style indices (positions in `cellXfs`) that render numbers as dates
///
/// Built once per workbook and only queried afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateStyleSet {
    styles: AHashSet<i32>,
}

impl DateStyleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from the number format of each style, in style-index order
    pub fn from_formats<'a, I>(formats: I) -> Self
    where
        I: IntoIterator<Item = &'a NumberFormat>,
    {
        formats
            .into_iter()
            .enumerate()
            .filter(|(_, format)| format.is_date_format())
            .filter_map(|(index, _)| i32::try_from(index).ok())
            .collect()
    }

    pub fn insert(&mut self, style: i32) -> bool {
        self.styles.insert(style)
    }

    /// Membership test; `-1` (no style attribute) is never a date style unless inserted
    pub fn contains(&self, style: i32) -> bool {
        self.styles.contains(&style)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<i32> for DateStyleSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}
