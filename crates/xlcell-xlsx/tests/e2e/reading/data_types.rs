//! Tests for decoding numbers, booleans, errors and formula results.

use crate::WorkbookBuilder;
use pretty_assertions::assert_eq;
use xlcell_core::{CellType, CellValue};
use xlcell_xlsx::ReadOptions;

#[test]
fn test_number_values() {
    let mut reader = WorkbookBuilder::new()
        .sheet(
            "Numbers",
            r#"<row r="1"><c r="A1"><v>42</v></c><c r="B1"><v>3.14159</v></c></row>
               <row r="2"><c r="A2"><v>-100</v></c><c r="B2" t="n"><v>1E-3</v></c></row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();

    assert_eq!(sheet.cell_at(0, 0).unwrap().value, CellValue::Number(42.0));
    assert_eq!(sheet.cell_at(0, 1).unwrap().value, CellValue::Number(3.14159));
    assert_eq!(sheet.cell_at(1, 0).unwrap().value, CellValue::Number(-100.0));
    assert_eq!(sheet.cell_at(1, 1).unwrap().value, CellValue::Number(0.001));
    assert!(sheet.diagnostics.is_empty());
}

#[test]
fn test_booleans_read_as_numbers() {
    let mut reader = WorkbookBuilder::new()
        .sheet(
            "Bools",
            r#"<row r="1"><c r="A1" t="b"><v>1</v></c><c r="B1" t="b"><v>0</v></c></row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    let a1 = sheet.cell_at(0, 0).unwrap();
    assert_eq!(a1.cell_type, CellType::Numeric);
    assert_eq!(a1.value, CellValue::Number(1.0));
    assert_eq!(sheet.cell_at(0, 1).unwrap().value, CellValue::Number(0.0));
}

#[test]
fn test_error_cells_are_blank() {
    let mut reader = WorkbookBuilder::new()
        .sheet(
            "Errors",
            r##"<row r="1"><c r="A1" t="e"><f>1/0</f><v>#DIV/0!</v></c></row>"##,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    let a1 = sheet.cell_at(0, 0).unwrap();
    assert_eq!(a1.cell_type, CellType::Blank);
    assert_eq!(a1.value, CellValue::Blank);
}

#[test]
fn test_formula_cached_results() {
    let mut reader = WorkbookBuilder::new()
        .sheet(
            "Formulas",
            r#"<row r="1">
                 <c r="A1"><f>1+1</f><v>2</v></c>
                 <c r="B1" t="str"><f>"a"&amp;"b"</f><v>ab</v></c>
                 <c r="C1" t="str"><f>X1</f></c>
               </row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    assert_eq!(sheet.cell_at(0, 0).unwrap().value, CellValue::Number(2.0));
    assert_eq!(sheet.cell_at(0, 1).unwrap().value, CellValue::text("ab"));
    // Formula without a cached value
    assert_eq!(sheet.cell_at(0, 2).unwrap().cell_type, CellType::Blank);
}

#[test]
fn test_missing_value_sentinel() {
    let mut reader = WorkbookBuilder::new()
        .shared_strings(&["NA", "ok"])
        .sheet(
            "Sentinel",
            r#"<row r="1">
                 <c r="A1"><v>NA</v></c>
                 <c r="B1" t="s"><v>0</v></c>
                 <c r="C1" t="s"><v>1</v></c>
                 <c r="D1" t="inlineStr"><is><t>NA</t></is></c>
                 <c r="E1" t="str"><v>NA</v></c>
               </row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::with_missing("NA")).unwrap();
    let values: Vec<_> = sheet.cells.iter().map(|c| c.value.clone()).collect();
    assert_eq!(
        values,
        vec![
            CellValue::Blank,
            CellValue::Blank,
            CellValue::text("ok"),
            CellValue::Blank,
            CellValue::Blank,
        ]
    );

    // Inline strings classify as text even when their value is missing
    assert_eq!(sheet.cell_at(0, 3).unwrap().cell_type, CellType::Text);
    assert_eq!(sheet.cell_at(0, 1).unwrap().cell_type, CellType::Blank);
}

#[test]
fn test_lenient_numeric_parse() {
    let mut reader = WorkbookBuilder::new()
        .sheet("Lenient", r#"<row r="1"><c r="A1"><v>abc</v></c></row>"#)
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    // Non-numeric text in a numeric cell reads as zero
    assert_eq!(sheet.cell_at(0, 0).unwrap().value, CellValue::Number(0.0));
}

#[test]
fn test_empty_value_is_missing_by_default() {
    let mut reader = WorkbookBuilder::new()
        .sheet(
            "Empty",
            r#"<row r="1"><c r="A1"><v></v></c><c r="B1" s="0"/></row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    assert_eq!(sheet.cell_at(0, 0).unwrap().value, CellValue::Blank);
    assert_eq!(sheet.cell_at(0, 1).unwrap().value, CellValue::Blank);
    assert_eq!(sheet.cell_at(0, 1).unwrap().cell_type, CellType::Numeric);
}
