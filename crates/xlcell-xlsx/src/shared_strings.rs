//! Shared strings (sharedStrings.xml) parsing

use roxmltree::Document;
use xlcell_core::SharedStringTable;

use crate::error::XlsxResult;
use crate::rich_text::resolve_text;
use crate::xml::children_named;

/// Build the shared-string table from the `sst` part
///
/// Every `<si>` takes one slot. An entry with no text is stored as an empty string so
/// later indices do not shift.
pub fn parse_shared_strings(xml: &str) -> XlsxResult<SharedStringTable> {
    let doc = Document::parse(xml)?;

    let mut table = SharedStringTable::new();
    let mut empty = 0usize;
    for si in children_named(doc.root_element(), "si") {
        match resolve_text(si) {
            Some(text) => table.push(text),
            None => {
                empty += 1;
                table.push(String::new())
            }
        };
    }

    log::debug!(
        "read {} shared strings ({} without text)",
        table.len(),
        empty
    );
    Ok(table)
}
