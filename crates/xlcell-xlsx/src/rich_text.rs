//! Text resolution for `<si>` and `<is>` containers (CT_Rst)
//!
//! The schema allows a single `<t>` alongside any number of `<r>` runs, but producers
//! disagree on what they write:
//! - Excel writes either one `<t>` or only `<r>` runs, and reads a `<t>` followed by
//!   runs as their concatenation
//! - macOS Preview ignores runs that lack a `<t>`
//!
//! Reading the `<t>` first and then appending every run's `<t>` accepts all of these.

use roxmltree::Node;

use crate::xml::{children_named, element_text, first_child};

/// Concatenated text of a string container
///
/// Returns `None` when neither a plain `<t>` nor any run contributed text. That is not
/// the same as `Some("")`, which is a genuinely empty string.
pub fn resolve_text(node: Node<'_, '_>) -> Option<String> {
    let mut found = false;
    let mut text = String::new();

    if let Some(t) = first_child(node, "t") {
        push_decoded(&mut text, &element_text(t));
        found = true;
    }

    for run in children_named(node, "r") {
        if let Some(t) = first_child(run, "t") {
            push_decoded(&mut text, &element_text(t));
            found = true;
        }
    }

    found.then_some(text)
}

/// Escapes never span `<t>` elements, so each one is decoded on its own
fn push_decoded(out: &mut String, text: &str) {
    if text.contains("_x") {
        out.push_str(&decode_excel_escapes(text));
    } else {
        out.push_str(text);
    }
}

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode characters XML cannot carry:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
pub fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        match decode_escape(candidate) {
            Some(decoded) => {
                result.push(decoded);
                rest = &candidate[7..];
            }
            None => {
                result.push('_');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Decode a leading `_xHHHH_`, if `s` starts with one
fn decode_escape(s: &str) -> Option<char> {
    let bytes = s.as_bytes();
    if bytes.len() < 7 || bytes[6] != b'_' {
        return None;
    }
    let hex = s.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
