//! Cell coordinates parsed from A1-style references

use std::fmt;

use crate::error::{Error, Result};

/// Zero-indexed location of a cell
///
/// Built from the cell's `r` attribute by [`parse_reference`]. Components are signed:
/// a reference without digits yields `row == -1` and one without letters yields
/// `col == -1`. Callers that need a real position should check [`is_valid`].
///
/// [`is_valid`]: CellCoordinate::is_valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoordinate {
    /// Row index (0-based internally, 1-based in display)
    pub row: i32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: i32,
}

impl CellCoordinate {
    /// Create a new coordinate from zero-based indices
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether both components point inside a sheet
    pub fn is_valid(&self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// Whether the coordinate is valid and within Excel's grid
    /// ([`MAX_ROWS`](crate::MAX_ROWS) x [`MAX_COLS`](crate::MAX_COLS))
    pub fn is_within_limits(&self) -> bool {
        self.is_valid()
            && (self.row as u32) < crate::MAX_ROWS
            && (self.col as u32) < u32::from(crate::MAX_COLS)
    }

    /// Format in conventional letters-then-digits order
    ///
    /// A negative component is left out, so `CellCoordinate::new(-1, 0)` renders as `"A"`.
    ///
    /// ```
    /// use xlcell_core::CellCoordinate;
    ///
    /// assert_eq!(CellCoordinate::new(0, 0).to_reference(), "A1");
    /// assert_eq!(CellCoordinate::new(11, 26).to_reference(), "AA12");
    /// ```
    pub fn to_reference(&self) -> String {
        let mut result = String::new();
        if self.col >= 0 {
            result.push_str(&column_to_letters(self.col as u32));
        }
        if self.row >= 0 {
            result.push_str(&(self.row as i64 + 1).to_string());
        }
        result
    }
}

/// One-based `[row, col]`, the form used in warnings
impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row as i64 + 1, self.col as i64 + 1)
    }
}

/// Parse a cell reference into zero-indexed coordinates
///
/// Digits accumulate into the row and uppercase letters into a bijective base-26
/// column (`A`=1, `Z`=26, `AA`=27) before both are shifted to zero-based. The order of
/// letters and digits is not checked, so `"1A"` is accepted. Any character outside
/// `[A-Z0-9]` is rejected.
///
/// # Examples
/// ```
/// use xlcell_core::{parse_reference, CellCoordinate};
///
/// assert_eq!(parse_reference("A1").unwrap(), CellCoordinate::new(0, 0));
/// assert_eq!(parse_reference("Z1").unwrap(), CellCoordinate::new(0, 25));
/// assert!(parse_reference("A#1").is_err());
/// ```
pub fn parse_reference(reference: &str) -> Result<CellCoordinate> {
    let mut row: i32 = 0;
    let mut col: i32 = 0;

    for c in reference.chars() {
        let next = match c {
            '0'..='9' => row
                .checked_mul(10)
                .and_then(|r| r.checked_add(c as i32 - '0' as i32))
                .map(|r| row = r),
            'A'..='Z' => col
                .checked_mul(26)
                .and_then(|v| v.checked_add(c as i32 - 'A' as i32 + 1))
                .map(|v| col = v),
            _ => {
                return Err(Error::MalformedReference {
                    character: c,
                    reference: reference.to_string(),
                })
            }
        };

        if next.is_none() {
            return Err(Error::ReferenceOutOfRange {
                reference: reference.to_string(),
            });
        }
    }

    Ok(CellCoordinate::new(row - 1, col - 1))
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = col as u64 + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}
