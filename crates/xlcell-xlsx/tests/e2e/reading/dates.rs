//! Tests for date classification and epoch conversion.

use crate::WorkbookBuilder;
use pretty_assertions::assert_eq;
use xlcell_core::{CellType, CellValue, DateSystem};
use xlcell_xlsx::ReadOptions;

const ROWS: &str = r#"<row r="1">
    <c r="A1" s="1"><v>43831</v></c>
    <c r="B1" s="2"><v>43831.5</v></c>
    <c r="C1" s="3"><v>43831</v></c>
    <c r="D1"><v>43831</v></c>
</row>"#;

fn builder() -> WorkbookBuilder {
    // 0: General, 1: built-in m/d/yyyy, 2: custom date-time, 3: custom currency
    WorkbookBuilder::new()
        .cell_formats(&[0, 14, 164, 165], &[(164, "yyyy-mm-dd hh:mm"), (165, "0.00")])
        .sheet("Dates", ROWS)
}

#[test]
fn test_date_styles_detected() {
    let reader = builder().open();
    let dates = reader.date_styles();
    assert!(dates.contains(1));
    assert!(dates.contains(2));
    assert!(!dates.contains(0));
    assert!(!dates.contains(3));
}

#[test]
fn test_dates_in_1900_system() {
    let mut reader = builder().open();
    assert_eq!(reader.date_system(), DateSystem::V1900);

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();

    // 2020-01-01T00:00:00Z
    let a1 = sheet.cell_at(0, 0).unwrap();
    assert_eq!(a1.cell_type, CellType::Date);
    assert_eq!(a1.value, CellValue::Date(1_577_836_800.0));

    // 2020-01-01T12:00:00Z
    assert_eq!(
        sheet.cell_at(0, 1).unwrap().value,
        CellValue::Date(1_577_880_000.0)
    );

    assert_eq!(sheet.cell_at(0, 2).unwrap().value, CellValue::Number(43831.0));
    assert_eq!(sheet.cell_at(0, 3).unwrap().value, CellValue::Number(43831.0));
}

#[test]
fn test_dates_in_1904_system() {
    let mut reader = builder().date1904().open();
    assert_eq!(reader.date_system(), DateSystem::V1904);

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    let expected = (43831.0 - 24107.0) * 86400.0;
    assert_eq!(sheet.cell_at(0, 0).unwrap().value, CellValue::Date(expected));
}

#[test]
fn test_date_system_override() {
    let mut reader = builder().date1904().open();
    let options = ReadOptions {
        date_system: Some(DateSystem::V1900),
        ..ReadOptions::default()
    };

    let sheet = reader.read_sheet(0, &options).unwrap();
    assert_eq!(
        sheet.cell_at(0, 0).unwrap().value,
        CellValue::Date(1_577_836_800.0)
    );
}

#[test]
fn test_serial_before_epoch_is_negative() {
    let mut reader = WorkbookBuilder::new()
        .cell_formats(&[0, 14], &[])
        .sheet("Old", r#"<row r="1"><c r="A1" s="1"><v>42</v></c></row>"#)
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    assert_eq!(
        sheet.cell_at(0, 0).unwrap().value,
        CellValue::Date((42.0 - 25569.0) * 86400.0)
    );
}

#[test]
fn test_raw_date_cells_are_text() {
    let mut reader = WorkbookBuilder::new()
        .sheet(
            "Iso",
            r#"<row r="1"><c r="A1" t="d"><v>2020-01-01T00:00:00</v></c></row>"#,
        )
        .open();

    let sheet = reader.read_sheet(0, &ReadOptions::default()).unwrap();
    let a1 = sheet.cell_at(0, 0).unwrap();
    assert_eq!(a1.cell_type, CellType::Text);
    assert_eq!(a1.value, CellValue::text("2020-01-01T00:00:00"));
}
