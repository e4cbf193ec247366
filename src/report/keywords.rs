//! Keyword locator: quantity-related cells, then a dump of the whole sheet

use super::format::display_value;
use super::{Report, ReportLine};
use crate::excel::Worksheet;
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatch {
    pub coordinate: String,
    /// Full cell text, never truncated
    pub value: String,
    pub row: u32,
    pub column: u32,
    /// First keyword of the list found in the cell
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DumpEntry {
    pub letter: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DumpRow {
    pub row: u32,
    pub entries: Vec<DumpEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    /// Matches in row-major order
    pub matches: Vec<KeywordMatch>,
    /// Rows with at least one present cell
    pub rows: Vec<DumpRow>,
}

/// Scan every cell for a case-insensitive keyword hit (first keyword wins),
/// then dump all rows with literal values cut at `width`.
pub fn locate_keywords(sheet: &Worksheet, keywords: &[String], width: usize) -> KeywordReport {
    let needles: Vec<(String, &str)> = keywords
        .iter()
        .map(|k| (k.to_uppercase(), k.as_str()))
        .collect();

    let mut matches = Vec::new();
    for cell in sheet.cells() {
        if !cell.value.is_truthy() && !cell.is_formula() {
            continue;
        }

        let value = cell.value.to_string();
        let haystack = value.to_uppercase();
        if let Some((_, keyword)) = needles.iter().find(|(needle, _)| haystack.contains(needle)) {
            trace!(cell = %cell.coordinate(), keyword, "keyword match");
            matches.push(KeywordMatch {
                coordinate: cell.coordinate(),
                value,
                row: cell.row,
                column: cell.column,
                keyword: keyword.to_string(),
            });
        }
    }

    let rows: Vec<DumpRow> = sheet
        .rows()
        .filter_map(|cells| {
            let row = cells.first()?.row;
            let entries: Vec<DumpEntry> = cells
                .iter()
                .filter(|cell| cell.is_present())
                .map(|cell| DumpEntry {
                    letter: cell.column_letter(),
                    value: display_value(cell, Some(width)),
                })
                .collect();
            (!entries.is_empty()).then_some(DumpRow { row, entries })
        })
        .collect();

    debug!(matches = matches.len(), rows = rows.len(), "keyword scan complete");

    KeywordReport { matches, rows }
}

impl Report for KeywordReport {
    fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine::Banner(
            "Keyword search (formwork, rebar, concrete)".to_string(),
        )];

        if self.matches.is_empty() {
            lines.push(ReportLine::Message(
                "No cells matched the keywords.".to_string(),
            ));
        } else {
            lines.push(ReportLine::Heading("Matching cells:".to_string()));
            for m in &self.matches {
                lines.push(ReportLine::Entry(format!("{}: {}", m.coordinate, m.value)));
            }
        }

        lines.push(ReportLine::Banner(
            "Full sheet (all rows, all columns)".to_string(),
        ));
        for row in &self.rows {
            lines.push(ReportLine::Heading(format!("Row {}:", row.row)));
            for entry in &row.entries {
                lines.push(ReportLine::Entry(format!("{}: {}", entry.letter, entry.value)));
            }
        }

        lines
    }
}
