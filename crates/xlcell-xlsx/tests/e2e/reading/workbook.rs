//! Tests for workbook-level reading: sheet lookup and file handling.

use std::io::Cursor;

use crate::WorkbookBuilder;
use pretty_assertions::assert_eq;
use xlcell_core::CellValue;
use xlcell_xlsx::{ReadOptions, XlsxError, XlsxReader};

fn two_sheets() -> WorkbookBuilder {
    WorkbookBuilder::new()
        .sheet("First", r#"<row r="1"><c r="A1"><v>1</v></c></row>"#)
        .sheet("Second", r#"<row r="3"><c r="C3"><v>2</v></c></row>"#)
}

#[test]
fn test_sheet_names_in_order() {
    let reader = two_sheets().open();
    assert_eq!(reader.sheet_names(), vec!["First", "Second"]);
    assert_eq!(reader.sheets()[1].path, "xl/worksheets/sheet2.xml");
}

#[test]
fn test_read_sheet_by_name() {
    let mut reader = two_sheets().open();
    let sheet = reader
        .read_sheet_by_name("Second", &ReadOptions::default())
        .unwrap();

    assert_eq!(sheet.name, "Second");
    assert_eq!(sheet.cell_at(2, 2).unwrap().value, CellValue::Number(2.0));
    assert_eq!(sheet.dimensions(), Some((2, 2)));
}

#[test]
fn test_sheet_not_found() {
    let mut reader = two_sheets().open();

    let err = reader
        .read_sheet_by_name("Third", &ReadOptions::default())
        .unwrap_err();
    assert!(matches!(err, XlsxError::SheetNotFound(ref name) if name == "Third"));

    assert!(matches!(
        reader.read_sheet(5, &ReadOptions::default()),
        Err(XlsxError::SheetNotFound(_))
    ));
}

#[test]
fn test_open_from_path() {
    let file = two_sheets().write_temp();
    let mut reader = XlsxReader::open(file.path()).expect("open from path");

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    assert_eq!(sheet.cell_at(0, 0).unwrap().value, CellValue::Number(1.0));
}

#[test]
fn test_not_a_zip() {
    let result = XlsxReader::new(Cursor::new(b"not a zip file".to_vec()));
    assert!(matches!(result, Err(XlsxError::Zip(_))));
}

#[test]
fn test_missing_content_types() {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("xl/workbook.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    let result = XlsxReader::new(Cursor::new(bytes));
    assert!(matches!(result, Err(XlsxError::InvalidFormat(_))));
}

#[test]
fn test_grid_export() {
    let mut reader = two_sheets().open();
    let grid = reader.read_sheet(1, &ReadOptions::default()).unwrap().to_grid();

    assert_eq!(grid.len(), 3);
    assert_eq!(grid[0], vec![CellValue::Blank; 3]);
    assert_eq!(grid[2][2], CellValue::Number(2.0));
}

#[test]
fn test_far_corner_blank_cell_keeps_grid_small() {
    let mut reader = WorkbookBuilder::new()
        .cell_formats(&[0, 0], &[])
        .sheet(
            "Corner",
            r#"<row r="1"><c r="A1"><v>1</v></c></row>
               <row r="1048576"><c r="XFD1048576" s="1"/></row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    assert_eq!(sheet.cells.len(), 2);
    assert_eq!(sheet.dimensions(), Some((0, 0)));
    assert_eq!(sheet.to_grid(), vec![vec![CellValue::Number(1.0)]]);
}

#[test]
fn test_unreadable_styles_part_is_an_error() {
    let mut bytes = WorkbookBuilder::new()
        .cell_formats(&[0, 14], &[])
        .sheet("Data", r#"<row r="1"><c r="A1"><v>1</v></c></row>"#)
        .build();

    // Mark styles.xml in the central directory with a compression method this build
    // cannot decode
    let name = b"xl/styles.xml";
    let mut patched = false;
    let mut pos = 0;
    while pos + 46 <= bytes.len() {
        if bytes[pos..pos + 4] == [0x50, 0x4b, 0x01, 0x02] {
            let name_len = u16::from_le_bytes([bytes[pos + 28], bytes[pos + 29]]) as usize;
            if bytes.get(pos + 46..pos + 46 + name_len) == Some(&name[..]) {
                bytes[pos + 10..pos + 12].copy_from_slice(&12u16.to_le_bytes());
                patched = true;
            }
        }
        pos += 1;
    }
    assert!(patched);

    assert!(XlsxReader::new(Cursor::new(bytes)).is_err());
}
