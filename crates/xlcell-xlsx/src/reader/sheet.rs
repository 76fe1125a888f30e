//! Worksheet cell decoding

use roxmltree::Document;
use xlcell_core::{
    CellCoordinate, CellType, CellValue, DateStyleSet, Diagnostics, SharedStringTable,
};

use crate::cell::XlsxCell;
use crate::error::XlsxResult;
use crate::options::ReadOptions;
use crate::xml::{children_named, first_child};

/// One decoded cell
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCell {
    pub coordinate: CellCoordinate,
    /// Classification; inline strings stay `Text` even when their value is blank
    pub cell_type: CellType,
    pub value: CellValue,
}

/// Decoded cells of one worksheet plus the warnings raised while reading it
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    pub name: String,
    pub cells: Vec<ParsedCell>,
    pub diagnostics: Diagnostics,
}

impl SheetData {
    /// Last (row, col) holding a value, zero-based
    ///
    /// Blank cells and cells outside the sheet grid do not count, so an empty styled
    /// cell in a far corner does not stretch the used area.
    pub fn dimensions(&self) -> Option<(i32, i32)> {
        self.cells
            .iter()
            .filter(|c| occupies_grid(c))
            .fold(None, |acc, c| {
                let (row, col) = acc.unwrap_or((0, 0));
                Some((row.max(c.coordinate.row), col.max(c.coordinate.col)))
            })
    }

    /// Cell at a zero-based position
    pub fn cell_at(&self, row: i32, col: i32) -> Option<&ParsedCell> {
        self.cells
            .iter()
            .find(|c| c.coordinate == CellCoordinate::new(row, col))
    }

    /// Rows up to [`dimensions`](Self::dimensions), produced one at a time; gaps are blank
    ///
    /// Only the current row is materialised.
    pub fn grid_rows(&self) -> impl Iterator<Item = Vec<CellValue>> + '_ {
        let mut filled: Vec<&ParsedCell> = self.cells.iter().filter(|c| occupies_grid(c)).collect();
        filled.sort_by_key(|c| c.coordinate);

        let (rows, width) = match self.dimensions() {
            Some((max_row, max_col)) => (max_row as usize + 1, max_col as usize + 1),
            None => (0, 0),
        };

        let mut pending = filled.into_iter().peekable();
        (0..rows).map(move |row| {
            let mut values = vec![CellValue::Blank; width];
            while let Some(cell) = pending.next_if(|c| c.coordinate.row as usize == row) {
                values[cell.coordinate.col as usize] = cell.value.clone();
            }
            values
        })
    }

    /// Dense row-major grid, see [`grid_rows`](Self::grid_rows)
    pub fn to_grid(&self) -> Vec<Vec<CellValue>> {
        self.grid_rows().collect()
    }
}

fn occupies_grid(cell: &ParsedCell) -> bool {
    cell.coordinate.is_within_limits() && !cell.value.is_blank()
}

/// Lookup tables shared by every cell of a workbook
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkbookTables<'a> {
    pub strings: &'a SharedStringTable,
    pub date_styles: &'a DateStyleSet,
    pub epoch_offset: i32,
}

/// Decode every `sheetData/row/c` of a worksheet part
///
/// Structural errors in a cell abort the whole sheet.
pub(crate) fn parse_worksheet(
    name: &str,
    xml: &str,
    tables: WorkbookTables<'_>,
    options: &ReadOptions,
) -> XlsxResult<SheetData> {
    let doc = Document::parse(xml)?;
    let mut sheet = SheetData {
        name: name.to_string(),
        ..SheetData::default()
    };

    let Some(sheet_data) = first_child(doc.root_element(), "sheetData") else {
        log::debug!("worksheet '{}' has no sheetData", name);
        return Ok(sheet);
    };

    for row in children_named(sheet_data, "row") {
        for node in children_named(row, "c") {
            let cell = XlsxCell::new(node)?;
            let parsed = decode_cell(&cell, tables, options, &mut sheet.diagnostics);
            if options.skip_blank && parsed.value.is_blank() {
                continue;
            }
            sheet.cells.push(parsed);
        }
    }

    log::debug!(
        "worksheet '{}': {} cells, {} warnings",
        name,
        sheet.cells.len(),
        sheet.diagnostics.len()
    );
    Ok(sheet)
}

/// Classify a cell and extract the value its type calls for
pub(crate) fn decode_cell(
    cell: &XlsxCell<'_, '_>,
    tables: WorkbookTables<'_>,
    options: &ReadOptions,
    diagnostics: &mut Diagnostics,
) -> ParsedCell {
    let missing = &options.missing;
    let cell_type = cell.cell_type(missing, tables.strings, tables.date_styles, diagnostics);

    let value = match cell_type {
        CellType::Numeric => cell.as_f64(missing).map(CellValue::Number),
        CellType::Date => cell
            .as_date(missing, tables.epoch_offset)
            .map(CellValue::Date),
        CellType::Text => cell
            .as_string(missing, tables.strings, diagnostics)
            .map(CellValue::Text),
        CellType::Blank => None,
    };

    ParsedCell {
        coordinate: cell.coordinate(),
        cell_type,
        value: value.unwrap_or_default(),
    }
}
