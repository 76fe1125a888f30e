//! Number format types

/// Number format attached to a cell style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// 0 - General
    pub const ID_GENERAL: u32 = 0;
    /// First ID available to custom formats
    pub const FIRST_CUSTOM_ID: u32 = 164;

    /// Resolve a `numFmtId`, using `custom` for IDs defined in the styles part
    pub fn from_id(id: u32, custom: Option<&str>) -> Self {
        match custom {
            Some(code) => NumberFormat::Custom(code.to_string()),
            None if id == Self::ID_GENERAL => NumberFormat::General,
            None => NumberFormat::BuiltIn(id),
        }
    }

    /// Whether the ID is one of the implied date/time formats
    ///
    /// 14-22 are the universal date/time formats; 27-36 and 50-58 are the East Asian
    /// locale date formats and 45-47 the minute/second formats.
    pub fn is_builtin_date_id(id: u32) -> bool {
        matches!(id, 14..=22 | 27..=36 | 45..=47 | 50..=58)
    }

    /// Check if this is a date/time format
    pub fn is_date_format(&self) -> bool {
        match self {
            NumberFormat::BuiltIn(id) => Self::is_builtin_date_id(*id),
            NumberFormat::Custom(code) => is_date_format_code(code),
            NumberFormat::General => false,
        }
    }
}

/// Whether a format code contains a date or time placeholder
///
/// Quoted literals, backslash escapes and bracketed colours or conditions are skipped.
/// Elapsed-time brackets (`[h]`, `[mm]`, `[ss]`) count as time tokens.
fn is_date_format_code(code: &str) -> bool {
    let mut chars = code.chars();

    while let Some(c) = chars.next() {
        match c {
            'd' | 'D' | 'm' | 'M' | 'y' | 'Y' | 'h' | 'H' | 's' | 'S' => return true,
            '"' => {
                for quoted in chars.by_ref() {
                    if quoted == '"' {
                        break;
                    }
                }
            }
            '\\' | '_' | '*' => {
                chars.next();
            }
            '[' => {
                let mut inner = String::new();
                for bracketed in chars.by_ref() {
                    if bracketed == ']' {
                        break;
                    }
                    inner.push(bracketed);
                }
                let lower = inner.to_ascii_lowercase();
                if !lower.is_empty() && lower.chars().all(|ch| matches!(ch, 'h' | 'm' | 's')) {
                    return true;
                }
            }
            _ => {}
        }
    }

    false
}
