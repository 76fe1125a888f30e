//! XLSX styles (styles.xml) reading
//!
//! Only number formats are needed: the reader maps each `cellXfs` entry to its
//! `numFmtId` and resolves which of those are date formats.

use std::collections::HashMap;
use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use xlcell_core::{DateStyleSet, NumberFormat};

use crate::error::{XlsxError, XlsxResult};

/// Number formats read from the styles part
#[derive(Debug, Clone, Default)]
pub struct ParsedStyles {
    /// Format of each cell style, indexed like the cells' `s` attribute
    pub cell_formats: Vec<NumberFormat>,
}

impl ParsedStyles {
    /// Style indices whose format is a date or time
    pub fn date_styles(&self) -> DateStyleSet {
        DateStyleSet::from_formats(&self.cell_formats)
    }
}

/// Read `numFmts` and `cellXfs` from a styles part
pub fn read_styles_xml<R: Read>(reader: R) -> XlsxResult<ParsedStyles> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(true);

    let mut buf = Vec::new();

    let mut numfmts: HashMap<u32, String> = HashMap::new();
    let mut xf_format_ids: Vec<u32> = Vec::new();
    let mut in_cell_xfs = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"cellXfs" {
                    in_cell_xfs = true;
                } else {
                    read_element(&e, in_cell_xfs, &mut numfmts, &mut xf_format_ids);
                }
            }
            // An empty <cellXfs/> holds no styles and has no End event
            Ok(Event::Empty(e)) => {
                read_element(&e, in_cell_xfs, &mut numfmts, &mut xf_format_ids);
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"cellXfs" {
                    in_cell_xfs = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let cell_formats: Vec<NumberFormat> = xf_format_ids
        .into_iter()
        .map(|id| NumberFormat::from_id(id, numfmts.get(&id).map(String::as_str)))
        .collect();

    log::debug!(
        "read {} cell styles, {} custom number formats",
        cell_formats.len(),
        numfmts.len()
    );

    Ok(ParsedStyles { cell_formats })
}

fn read_element(
    e: &BytesStart<'_>,
    in_cell_xfs: bool,
    numfmts: &mut HashMap<u32, String>,
    xf_format_ids: &mut Vec<u32>,
) {
    match e.local_name().as_ref() {
        b"numFmt" => {
            let mut id = None;
            let mut code = None;
            for attr in e.attributes().flatten() {
                match attr.key.as_ref() {
                    b"numFmtId" => {
                        id = attr
                            .unescape_value()
                            .ok()
                            .and_then(|v| v.trim().parse::<u32>().ok());
                    }
                    b"formatCode" => {
                        code = attr.unescape_value().ok().map(|v| v.to_string());
                    }
                    _ => {}
                }
            }
            if let (Some(id), Some(code)) = (id, code) {
                numfmts.insert(id, code);
            }
        }
        b"xf" if in_cell_xfs => {
            let num_fmt_id = e
                .attributes()
                .flatten()
                .find(|attr| attr.key.as_ref() == b"numFmtId")
                .and_then(|attr| attr.unescape_value().ok().map(|v| v.trim().to_string()))
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(NumberFormat::ID_GENERAL);
            xf_format_ids.push(num_fmt_id);
        }
        _ => {}
    }
}
