//! Tests for soft warnings and hard errors.

use crate::WorkbookBuilder;
use pretty_assertions::assert_eq;
use xlcell_core::{CellCoordinate, CellType, CellValue, DiagnosticKind, Error};
use xlcell_xlsx::{ReadOptions, XlsxError};

#[test]
fn test_soft_warnings_do_not_stop_the_read() {
    let mut reader = WorkbookBuilder::new()
        .shared_strings(&["only"])
        .sheet(
            "Warnings",
            r#"<row r="1">
                 <c r="A1" t="mystery"><v>text</v></c>
                 <c r="B1" t="s"><v>5</v></c>
                 <c r="C1" t="inlineStr"><is><r><rPr/></r></is></c>
                 <c r="D1"><v>7</v></c>
               </row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();

    assert_eq!(sheet.cells.len(), 4);
    assert_eq!(sheet.cell_at(0, 0).unwrap().cell_type, CellType::Text);
    assert_eq!(sheet.cell_at(0, 0).unwrap().value, CellValue::text("text"));
    assert_eq!(sheet.cell_at(0, 1).unwrap().value, CellValue::Blank);
    assert_eq!(sheet.cell_at(0, 2).unwrap().value, CellValue::Blank);
    assert_eq!(sheet.cell_at(0, 3).unwrap().value, CellValue::Number(7.0));

    let warnings: Vec<_> = sheet
        .diagnostics
        .iter()
        .map(|d| (d.coordinate, d.kind.clone()))
        .collect();
    assert_eq!(
        warnings,
        vec![
            (
                CellCoordinate::new(0, 0),
                DiagnosticKind::UnknownCellType("mystery".into())
            ),
            (CellCoordinate::new(0, 1), DiagnosticKind::InvalidStringIndex(5)),
            (CellCoordinate::new(0, 2), DiagnosticKind::MalformedRichText),
        ]
    );
}

#[test]
fn test_malformed_reference_aborts_the_read() {
    let mut reader = WorkbookBuilder::new()
        .sheet(
            "Broken",
            r#"<row r="1"><c r="A1"><v>1</v></c><c r="b1"><v>2</v></c></row>"#,
        )
        .open();

    let err = reader.read_sheet(0, &ReadOptions::default()).unwrap_err();
    match err {
        XlsxError::Cell(Error::MalformedReference {
            character,
            reference,
        }) => {
            assert_eq!(character, 'b');
            assert_eq!(reference, "b1");
        }
        other => panic!("Expected MalformedReference, got {other:?}"),
    }
}

#[test]
fn test_missing_reference_aborts_the_read() {
    let mut reader = WorkbookBuilder::new()
        .sheet("NoRef", r#"<row r="1"><c><v>1</v></c></row>"#)
        .open();

    let err = reader.read_sheet(0, &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, XlsxError::Cell(Error::MissingReference)));
    assert_eq!(err.to_string(), "Cell error: Invalid cell: lacks ref attribute");
}

#[test]
fn test_malformed_worksheet_xml() {
    let mut reader = WorkbookBuilder::new()
        .sheet("Bad", r#"<row r="1"><c r="A1"><v>1</c></row>"#)
        .open();

    let err = reader.read_sheet(0, &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, XlsxError::Dom(_)));
}
