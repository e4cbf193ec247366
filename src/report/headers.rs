//! Header scanner: what each column holds in the header rows

use super::format::display_value;
use super::{Report, ReportLine};
use crate::excel::{column_letter, Worksheet};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderEntry {
    pub row: u32,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderColumn {
    pub column: u32,
    pub letter: String,
    pub entries: Vec<HeaderEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderReport {
    pub header_rows: u32,
    /// Only columns with at least one entry, in column order
    pub columns: Vec<HeaderColumn>,
}

/// Collect the present cells of rows `1..=header_rows` column by column.
/// Literal values are cut at `width` characters.
pub fn scan_headers(sheet: &Worksheet, header_rows: u32, width: usize) -> HeaderReport {
    let last_row = header_rows.min(sheet.row_count());
    let mut columns = Vec::new();

    for column in 1..=sheet.column_count() {
        let entries: Vec<HeaderEntry> = sheet
            .column(column)
            .into_iter()
            .take(last_row as usize)
            .filter(|cell| cell.is_present())
            .map(|cell| HeaderEntry {
                row: cell.row,
                value: display_value(&cell, Some(width)),
            })
            .collect();

        if !entries.is_empty() {
            columns.push(HeaderColumn {
                column,
                letter: column_letter(column),
                entries,
            });
        }
    }

    debug!(columns = columns.len(), header_rows, "header scan complete");

    HeaderReport {
        header_rows,
        columns,
    }
}

impl Report for HeaderReport {
    fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine::Banner(format!(
            "Column headers (rows 1-{})",
            self.header_rows
        ))];

        for column in &self.columns {
            lines.push(ReportLine::Heading(format!("{} column:", column.letter)));
            for entry in &column.entries {
                lines.push(ReportLine::Entry(format!("row{}: {}", entry.row, entry.value)));
            }
        }

        lines
    }
}
