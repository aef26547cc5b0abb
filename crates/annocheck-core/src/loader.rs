//! Spreadsheet loading.
//!
//! Annotation workbooks are expected to hold exactly one sheet whose
//! first row is the header. Any format calamine can auto-detect from the
//! file extension is accepted (xlsx, xlsm, xlsb, xls, ods).

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use thiserror::Error;
use tracing::{debug, info};

use crate::table::{CellValue, Table};

/// Errors that can occur when loading a workbook.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Expected exactly one sheet in {path}, found {found}")]
    SheetCount { path: PathBuf, found: usize },
}

/// Load the single sheet of a workbook as a table.
///
/// The workbook handle is released when this returns, on success or
/// failure.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table, LoadError> {
    let path = path.as_ref();
    let workbook_error = |source: calamine::Error| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;

    let sheet_names = workbook.sheet_names();
    if sheet_names.len() != 1 {
        return Err(LoadError::SheetCount {
            path: path.to_path_buf(),
            found: sheet_names.len(),
        });
    }
    let sheet_name = &sheet_names[0];

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(workbook_error)?;
    let table = table_from_range(&range);

    info!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = table.len(),
        "loaded annotation sheet"
    );

    Ok(table)
}

/// Convert a worksheet range to a table using its first row as headers.
fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(col, cell)| header_name(col, cell))
            .collect(),
        None => {
            debug!("sheet is empty");
            return Table::default();
        }
    };

    let data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    debug!(columns = ?headers, "parsed header row");
    Table::new(headers, data)
}

fn header_name(col: usize, cell: &Data) -> String {
    match cell_value(cell) {
        CellValue::Empty => format!("Unnamed: {}", col),
        CellValue::Text(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::number(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::Error(_) => CellValue::Empty,
    }
}
