//! Cell type tags

use std::fmt;

/// Effective type of a cell after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellType {
    /// Number or boolean
    Numeric,
    /// Number whose style is a date format
    Date,
    /// Shared, inline, formula or raw-date string
    Text,
    /// Error value, missing value or sentinel match
    Blank,
}

impl CellType {
    /// Lowercase name used in listings
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Numeric => "numeric",
            CellType::Date => "date",
            CellType::Text => "text",
            CellType::Blank => "blank",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type code carried by a cell's `t` attribute (ST_CellType)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// `n`, also the default when the attribute is absent
    Number,
    /// `b`
    Boolean,
    /// `d`, an ISO 8601 date string
    Date,
    /// `e`
    Error,
    /// `s`, index into the shared-string table
    SharedString,
    /// `str`, cached string result of a formula
    FormulaString,
    /// `inlineStr`, text held in an `<is>` child
    InlineString,
    /// Anything a producer made up
    Unknown(String),
}

impl DeclaredType {
    /// Map a `t` attribute value (or its absence) to a type code
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("n") => DeclaredType::Number,
            Some("b") => DeclaredType::Boolean,
            Some("d") => DeclaredType::Date,
            Some("e") => DeclaredType::Error,
            Some("s") => DeclaredType::SharedString,
            Some("str") => DeclaredType::FormulaString,
            Some("inlineStr") => DeclaredType::InlineString,
            Some(other) => DeclaredType::Unknown(other.to_string()),
        }
    }

    /// The attribute value this code was read from
    pub fn as_str(&self) -> &str {
        match self {
            DeclaredType::Number => "n",
            DeclaredType::Boolean => "b",
            DeclaredType::Date => "d",
            DeclaredType::Error => "e",
            DeclaredType::SharedString => "s",
            DeclaredType::FormulaString => "str",
            DeclaredType::InlineString => "inlineStr",
            DeclaredType::Unknown(code) => code,
        }
    }
}
