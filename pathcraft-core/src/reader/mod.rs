//! Excel/ODS file reader using calamine

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::path::Path;
use tracing::{debug, warn};

pub mod workbook;

pub use workbook::{CellValue, Sheet, Workbook};

/// Read a workbook from a file path
///
/// Sheets that fail to decode are kept with no rows and a `read_error`, so a
/// broken sheet only empties its own share of the output.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = excel.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in &sheet_names {
        let sheet = match excel.worksheet_range(sheet_name) {
            Ok(range) => parse_sheet(sheet_name, &range),
            Err(e) => {
                warn!(sheet = %sheet_name, error = %e, "could not decode sheet");
                Sheet {
                    name: sheet_name.clone(),
                    rows: Vec::new(),
                    read_error: Some(e.to_string()),
                }
            }
        };
        debug!(sheet = %sheet.name, rows = sheet.row_count(), "sheet loaded");
        sheets.push(sheet);
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

fn parse_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let Some((start_row, start_col)) = range.start() else {
        return Sheet::new(name, Vec::new());
    };

    let (height, width) = range.get_size();
    let total_cols = start_col as usize + width;
    let mut rows = vec![vec![CellValue::Empty; total_cols]; start_row as usize];

    for data_row in range.rows() {
        let mut row = vec![CellValue::Empty; start_col as usize];
        row.extend(data_row.iter().map(parse_cell_value));
        rows.push(row);
    }
    debug_assert_eq!(rows.len(), start_row as usize + height);

    Sheet::new(name, rows)
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
