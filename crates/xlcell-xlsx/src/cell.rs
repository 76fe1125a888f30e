//! XML-backed cell handle
//!
//! Element names follow ECMA-376 Part 1:
//! - 18.3.1.4 `c` (Cell)
//! - 18.3.1.96 `v` (Cell Value)
//! - 18.3.1.53 `is` (Rich Text Inline)
//! - 18.18.11 ST_CellType (Cell Type)

use std::borrow::Cow;

use roxmltree::Node;
use xlcell_core::numeric::{parse_f64_lenient, parse_int_lenient};
use xlcell_core::{
    parse_reference, CellCoordinate, CellType, DateStyleSet, DeclaredType, DiagnosticKind,
    Diagnostics, Error, MissingValue, SharedStringTable, SECONDS_PER_DAY,
};

use crate::rich_text::resolve_text;
use crate::xml::{element_text, first_child};

/// A `<c>` element borrowed from a parsed worksheet
///
/// The handle cannot outlive the document it points into. Classification and values
/// are recomputed on every call, so swapping the lookup tables between calls is safe.
#[derive(Debug, Clone, Copy)]
pub struct XlsxCell<'a, 'input> {
    node: Node<'a, 'input>,
    coordinate: CellCoordinate,
}

impl<'a, 'input> XlsxCell<'a, 'input> {
    /// Wrap a `<c>` node, parsing its `r` attribute
    pub fn new(node: Node<'a, 'input>) -> xlcell_core::Result<Self> {
        let reference = node.attribute("r").ok_or(Error::MissingReference)?;
        let coordinate = parse_reference(reference)?;
        Ok(Self { node, coordinate })
    }

    pub fn coordinate(&self) -> CellCoordinate {
        self.coordinate
    }

    pub fn row(&self) -> i32 {
        self.coordinate.row
    }

    pub fn col(&self) -> i32 {
        self.coordinate.col
    }

    /// The underlying XML node
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    /// Type code from the `t` attribute (`n` when absent)
    pub fn declared_type(&self) -> DeclaredType {
        DeclaredType::from_attribute(self.node.attribute("t"))
    }

    /// Style index from the `s` attribute, or -1 when absent
    pub fn style_index(&self) -> i32 {
        match self.node.attribute("s") {
            Some(s) => parse_int_lenient(s).clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            None => -1,
        }
    }

    /// Raw text of the `<v>` child, if there is one
    pub fn raw_value(&self) -> Option<Cow<'a, str>> {
        first_child(self.node, "v").map(element_text)
    }

    /// Classify the cell
    ///
    /// Unknown type codes and out-of-range shared-string indices are recorded in
    /// `diagnostics`; they never fail.
    pub fn cell_type(
        &self,
        missing: &MissingValue,
        strings: &SharedStringTable,
        date_styles: &DateStyleSet,
        diagnostics: &mut Diagnostics,
    ) -> CellType {
        match self.declared_type() {
            DeclaredType::Number => {
                if date_styles.contains(self.style_index()) {
                    CellType::Date
                } else {
                    CellType::Numeric
                }
            }
            DeclaredType::Boolean => CellType::Numeric,
            // ISO 8601 text is handed to callers unparsed
            DeclaredType::Date => CellType::Text,
            DeclaredType::Error => CellType::Blank,
            DeclaredType::SharedString => {
                let Some(value) = self.raw_value() else {
                    return CellType::Blank;
                };
                let index = parse_int_lenient(&value);
                match strings.lookup(index) {
                    None => {
                        diagnostics.warn(
                            self.coordinate,
                            DiagnosticKind::InvalidStringIndex(index),
                        );
                        CellType::Blank
                    }
                    Some(s) if missing.matches(s) => CellType::Blank,
                    Some(_) => CellType::Text,
                }
            }
            DeclaredType::FormulaString => match self.raw_value() {
                Some(value) if !missing.matches(&value) => CellType::Text,
                _ => CellType::Blank,
            },
            // Blankness of inline strings is decided by `as_string`
            DeclaredType::InlineString => CellType::Text,
            DeclaredType::Unknown(code) => {
                diagnostics.warn(self.coordinate, DiagnosticKind::UnknownCellType(code));
                CellType::Text
            }
        }
    }

    /// Cell text without missing-value handling
    ///
    /// Shared-string cells are looked up in `strings`; an index outside the table is a
    /// hard error since returning another entry would silently corrupt data.
    pub fn as_text(&self, strings: &SharedStringTable) -> xlcell_core::Result<Option<String>> {
        let Some(value) = self.raw_value() else {
            return Ok(None);
        };

        if self.declared_type() != DeclaredType::SharedString {
            return Ok(Some(value.into_owned()));
        }

        let index = parse_int_lenient(&value);
        strings
            .lookup(index)
            .map(|s| Some(s.to_string()))
            .ok_or(Error::InvalidStringIndex {
                coordinate: self.coordinate,
                index,
                len: strings.len(),
            })
    }

    /// Numeric value, or `None` when `<v>` is absent or equals the sentinel
    ///
    /// Parsing is lenient: text that is not a number reads as `0.0`.
    pub fn as_f64(&self, missing: &MissingValue) -> Option<f64> {
        let value = self.raw_value()?;
        if missing.matches(&value) {
            return None;
        }
        Some(parse_f64_lenient(&value))
    }

    /// Date serial converted to seconds since the epoch `epoch_offset` names
    pub fn as_date(&self, missing: &MissingValue, epoch_offset: i32) -> Option<f64> {
        self.as_f64(missing)
            .map(|serial| (serial - epoch_offset as f64) * SECONDS_PER_DAY)
    }

    /// Cell text for callers that only care whether a string is present
    ///
    /// Handles inline strings, shared strings and raw values alike. A bad shared-string
    /// index or an inline container without text is recorded in `diagnostics` and read
    /// as missing.
    pub fn as_string(
        &self,
        missing: &MissingValue,
        strings: &SharedStringTable,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        if let Some(inline) = first_child(self.node, "is") {
            let Some(text) = resolve_text(inline) else {
                diagnostics.warn(self.coordinate, DiagnosticKind::MalformedRichText);
                return None;
            };
            return (!missing.matches(&text)).then_some(text);
        }

        let value = self.raw_value()?;

        if self.declared_type() == DeclaredType::SharedString {
            let index = parse_int_lenient(&value);
            let Some(s) = strings.lookup(index) else {
                diagnostics.warn(self.coordinate, DiagnosticKind::InvalidStringIndex(index));
                return None;
            };
            return (!missing.matches(s)).then(|| s.to_string());
        }

        (!missing.matches(&value)).then(|| value.into_owned())
    }
}
