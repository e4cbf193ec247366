//! Workbook loader - Excel (.xlsx) → Worksheet snapshot

use crate::error::{InspectError, InspectResult};
use crate::excel::worksheet::Worksheet;
use crate::types::{Cell, CellKind, CellValue};
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Opens a workbook read-only and loads one worksheet with formulas preserved
pub struct WorkbookLoader {
    path: PathBuf,
}

impl WorkbookLoader {
    /// Create a new loader for the workbook at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Names of all worksheets, in workbook order
    pub fn sheet_names(&self) -> InspectResult<Vec<String>> {
        let workbook = self.open()?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Load the named worksheet, or the first one when `sheet` is `None`
    pub fn load(&self, sheet: Option<&str>) -> InspectResult<Worksheet> {
        let mut workbook = self.open()?;

        let sheet_names = workbook.sheet_names().to_vec();
        let sheet_name = match sheet {
            Some(name) => sheet_names
                .iter()
                .find(|s| s.as_str() == name)
                .cloned()
                .ok_or_else(|| InspectError::SheetNotFound(name.to_string()))?,
            None => sheet_names
                .first()
                .cloned()
                .ok_or_else(|| InspectError::SheetNotFound("<first sheet>".to_string()))?,
        };
        debug!(sheet = %sheet_name, available = sheet_names.len(), "selected worksheet");

        let values = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| self.corrupt(e))?;
        // Sheets without formulas may have no formula part at all
        let formulas = workbook.worksheet_formula(&sheet_name).ok();

        let cells = merge_cells(&values, formulas.as_ref());
        let worksheet = Worksheet::from_cells(sheet_name, cells);

        info!(
            path = %self.path.display(),
            sheet = worksheet.name(),
            rows = worksheet.row_count(),
            columns = worksheet.column_count(),
            formulas = worksheet.formula_count(),
            "loaded worksheet"
        );

        Ok(worksheet)
    }

    fn open(&self) -> InspectResult<Xlsx<std::io::BufReader<std::fs::File>>> {
        if !self.path.exists() {
            return Err(InspectError::FileNotFound(self.path.clone()));
        }
        debug!(path = %self.path.display(), "opening workbook");

        open_workbook(&self.path).map_err(|e| match e {
            XlsxError::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                InspectError::FileNotFound(self.path.clone())
            }
            other => self.corrupt(other),
        })
    }

    fn corrupt(&self, err: XlsxError) -> InspectError {
        InspectError::CorruptFile {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}

/// Load a worksheet from the workbook at `path` (first sheet by default)
pub fn load_worksheet<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> InspectResult<Worksheet> {
    WorkbookLoader::new(path).load(sheet)
}

/// Combine the value and formula ranges into 1-based cells. A formula
/// replaces the cached value of its cell.
fn merge_cells(values: &Range<Data>, formulas: Option<&Range<String>>) -> Vec<Cell> {
    let mut merged: BTreeMap<(u32, u32), Cell> = BTreeMap::new();

    if let Some((start_row, start_col)) = values.start() {
        for (row, col, data) in values.used_cells() {
            let (r, c) = (start_row + row as u32 + 1, start_col + col as u32 + 1);
            merged.insert((r, c), Cell::new(r, c, convert_value(data), CellKind::Literal));
        }
    }

    if let Some(formulas) = formulas {
        if let Some((start_row, start_col)) = formulas.start() {
            for (row, col, formula) in formulas.used_cells() {
                if formula.is_empty() {
                    continue;
                }
                let (r, c) = (start_row + row as u32 + 1, start_col + col as u32 + 1);
                let text = if formula.starts_with('=') {
                    formula.clone()
                } else {
                    // calamine strips the leading '='
                    format!("={}", formula)
                };
                merged.insert((r, c), Cell::new(r, c, CellValue::Text(text), CellKind::Formula));
            }
        }
    }

    merged.into_values().collect()
}

/// Convert a calamine cell into a CellValue
fn convert_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
