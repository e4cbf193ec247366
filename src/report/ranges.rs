//! Range reporter: full contents of fixed columns, then the header area row by row

use super::format::display_value;
use super::{Report, ReportLine};
use crate::excel::{column_letter, Worksheet};
use crate::types::Cell;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeEntry {
    pub coordinate: String,
    pub value: String,
    /// n, s, b, d, e or f
    pub data_type: char,
}

impl RangeEntry {
    fn from_cell(cell: &Cell, width: Option<usize>) -> Self {
        Self {
            coordinate: cell.coordinate(),
            value: display_value(cell, width),
            data_type: cell.type_code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeColumn {
    pub column: u32,
    pub letter: String,
    pub entries: Vec<RangeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeRow {
    pub row: u32,
    pub entries: Vec<RangeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeReport {
    /// Every fixed column, even when it holds nothing
    pub columns: Vec<RangeColumn>,
    pub header_rows: u32,
    /// Header-area rows with at least one entry
    pub rows: Vec<RangeRow>,
    #[serde(skip)]
    pub show_types: bool,
}

impl RangeReport {
    /// Annotate fixed-column lines with the cell data type
    pub fn with_types(mut self, show: bool) -> Self {
        self.show_types = show;
        self
    }
}

/// Dump the given columns over all rows (untruncated), then every column
/// of rows `1..=header_rows` with literal values cut at `width`.
pub fn report_ranges(
    sheet: &Worksheet,
    columns: &[u32],
    header_rows: u32,
    width: usize,
) -> RangeReport {
    let fixed: Vec<RangeColumn> = columns
        .iter()
        .map(|&column| RangeColumn {
            column,
            letter: column_letter(column),
            entries: sheet
                .column(column)
                .iter()
                .filter(|cell| cell.is_present())
                .map(|cell| RangeEntry::from_cell(cell, None))
                .collect(),
        })
        .collect();

    let rows: Vec<RangeRow> = (1..=header_rows.min(sheet.row_count()))
        .map(|row| RangeRow {
            row,
            entries: sheet
                .row(row)
                .iter()
                .filter(|cell| cell.is_present())
                .map(|cell| RangeEntry::from_cell(cell, Some(width)))
                .collect(),
        })
        .filter(|row| !row.entries.is_empty())
        .collect();

    debug!(
        fixed_columns = fixed.len(),
        header_rows_with_data = rows.len(),
        "range report complete"
    );

    RangeReport {
        columns: fixed,
        header_rows,
        rows,
        show_types: false,
    }
}

impl Report for RangeReport {
    fn lines(&self) -> Vec<ReportLine> {
        let letters: Vec<&str> = self.columns.iter().map(|c| c.letter.as_str()).collect();
        let mut lines = vec![ReportLine::Banner(format!(
            "Column data: {}",
            letters.join(", ")
        ))];

        for column in &self.columns {
            lines.push(ReportLine::Heading(format!("{} column data:", column.letter)));
            for entry in &column.entries {
                let line = if self.show_types {
                    format!("{}: {} (type: {})", entry.coordinate, entry.value, entry.data_type)
                } else {
                    format!("{}: {}", entry.coordinate, entry.value)
                };
                lines.push(ReportLine::Entry(line));
            }
        }

        lines.push(ReportLine::Banner(format!(
            "Header area (rows 1-{})",
            self.header_rows
        )));
        for row in &self.rows {
            lines.push(ReportLine::Heading(format!("Row {}:", row.row)));
            for entry in &row.entries {
                lines.push(ReportLine::Entry(format!("{}: {}", entry.coordinate, entry.value)));
            }
        }

        lines
    }
}
