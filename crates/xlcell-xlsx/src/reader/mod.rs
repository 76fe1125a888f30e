//! XLSX reader

mod sheet;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::QName;
use quick_xml::reader::Reader;
use xlcell_core::{DateStyleSet, DateSystem, SharedStringTable};

use crate::error::{XlsxError, XlsxResult};
use crate::options::ReadOptions;
use crate::shared_strings::parse_shared_strings;
use crate::styles::read_styles_xml;

pub use sheet::{ParsedCell, SheetData};

use sheet::{parse_worksheet, WorkbookTables};

const REL_WORKSHEET: &str = "/worksheet";
const REL_SHARED_STRINGS: &str = "/sharedStrings";
const REL_STYLES: &str = "/styles";

/// A sheet listed in workbook.xml with its resolved part path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    pub name: String,
    pub path: String,
}

/// XLSX file reader
///
/// Opening reads the workbook-level parts once (sheet list, date system, shared
/// strings, date styles); sheets are decoded on demand against those tables.
pub struct XlsxReader<R> {
    archive: zip::ZipArchive<R>,
    sheets: Vec<SheetEntry>,
    shared_strings: SharedStringTable,
    date_styles: DateStyleSet,
    date_system: DateSystem,
}

impl XlsxReader<BufReader<File>> {
    /// Open a workbook from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> XlsxReader<R> {
    /// Open a workbook from a reader
    pub fn new(reader: R) -> XlsxResult<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let workbook = Self::read_workbook_xml(&mut archive)?;
        let rels = Self::read_workbook_rels(&mut archive)?;

        let sheets: Vec<SheetEntry> = workbook
            .sheets
            .into_iter()
            .filter_map(|(name, r_id)| match rels.get(&r_id) {
                Some(rel) if rel.rel_type.ends_with(REL_WORKSHEET) => Some(SheetEntry {
                    name,
                    path: rel.target.clone(),
                }),
                _ => {
                    log::debug!("skipping sheet '{}' ({}): not a worksheet", name, r_id);
                    None
                }
            })
            .collect();

        let part_path = |suffix: &str, default: &str| {
            rels.values()
                .find(|rel| rel.rel_type.ends_with(suffix))
                .map(|rel| rel.target.clone())
                .unwrap_or_else(|| default.to_string())
        };
        let strings_path = part_path(REL_SHARED_STRINGS, "xl/sharedStrings.xml");
        let styles_path = part_path(REL_STYLES, "xl/styles.xml");

        let shared_strings = match read_optional_part(&mut archive, &strings_path)? {
            Some(xml) => parse_shared_strings(&xml)?,
            None => SharedStringTable::new(),
        };

        let date_styles = match archive.by_name(&styles_path) {
            Ok(file) => read_styles_xml(file)?.date_styles(),
            Err(zip::result::ZipError::FileNotFound) => DateStyleSet::new(),
            Err(e) => return Err(e.into()),
        };

        log::debug!(
            "opened workbook: {} sheets, {} shared strings, {} date styles, {:?}",
            sheets.len(),
            shared_strings.len(),
            date_styles.len(),
            workbook.date_system
        );

        Ok(Self {
            archive,
            sheets,
            shared_strings,
            date_styles,
            date_system: workbook.date_system,
        })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Sheets with their part paths
    pub fn sheets(&self) -> &[SheetEntry] {
        &self.sheets
    }

    pub fn shared_strings(&self) -> &SharedStringTable {
        &self.shared_strings
    }

    pub fn date_styles(&self) -> &DateStyleSet {
        &self.date_styles
    }

    /// Date system declared by the workbook
    pub fn date_system(&self) -> DateSystem {
        self.date_system
    }

    /// Decode a sheet by position
    pub fn read_sheet(&mut self, index: usize, options: &ReadOptions) -> XlsxResult<SheetData> {
        let entry = self
            .sheets
            .get(index)
            .cloned()
            .ok_or_else(|| XlsxError::SheetNotFound(format!("index {}", index)))?;
        self.read_entry(&entry, options)
    }

    /// Decode a sheet by name
    pub fn read_sheet_by_name(
        &mut self,
        name: &str,
        options: &ReadOptions,
    ) -> XlsxResult<SheetData> {
        let entry = self
            .sheets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| XlsxError::SheetNotFound(name.to_string()))?;
        self.read_entry(&entry, options)
    }

    fn read_entry(&mut self, entry: &SheetEntry, options: &ReadOptions) -> XlsxResult<SheetData> {
        let xml = read_optional_part(&mut self.archive, &entry.path)?
            .ok_or_else(|| XlsxError::MissingPart(entry.path.clone()))?;

        let date_system = options.date_system.unwrap_or(self.date_system);
        let tables = WorkbookTables {
            strings: &self.shared_strings,
            date_styles: &self.date_styles,
            epoch_offset: date_system.epoch_offset(),
        };
        parse_worksheet(&entry.name, &xml, tables, options)
    }

    /// Read workbook.xml to get sheet names, rIds and the date system
    fn read_workbook_xml(archive: &mut zip::ZipArchive<R>) -> XlsxResult<WorkbookInfo> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut info = WorkbookInfo::default();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"sheet" => {
                        let mut name = None;
                        let mut r_id = None;

                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"name" {
                                name = attr.unescape_value().ok().map(|s| s.to_string());
                            } else if is_relationship_id(attr.key) {
                                r_id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                        }

                        if let (Some(name), Some(r_id)) = (name, r_id) {
                            info.sheets.push((name, r_id));
                        }
                    }
                    b"workbookPr" => {
                        let date1904 = e
                            .attributes()
                            .flatten()
                            .find(|attr| attr.key.as_ref() == b"date1904")
                            .and_then(|attr| attr.unescape_value().ok().map(|v| v.to_string()))
                            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                            .unwrap_or(false);
                        info.date_system = DateSystem::from_date1904(date1904);
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(info)
    }

    /// Read workbook.xml.rels to get part paths by relationship ID
    fn read_workbook_rels(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, Relationship>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => {
                                id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Target" => {
                                target = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Type" => {
                                rel_type = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        rels.insert(
                            id,
                            Relationship {
                                rel_type,
                                target: resolve_target(&target),
                            },
                        );
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }
}

#[derive(Debug, Default)]
struct WorkbookInfo {
    /// (name, rId) in workbook order
    sheets: Vec<(String, String)>,
    date_system: DateSystem,
}

#[derive(Debug, Clone)]
struct Relationship {
    rel_type: String,
    target: String,
}

/// `r:id`, whatever prefix the relationships namespace is bound to
fn is_relationship_id(key: QName<'_>) -> bool {
    key.local_name().as_ref() == b"id" && key.prefix().is_some()
}

/// Targets are relative to the xl/ folder unless absolute
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

fn read_optional_part<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    path: &str,
) -> XlsxResult<Option<String>> {
    let mut file = match archive.by_name(path) {
        Ok(f) => f,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(Some(xml))
}
