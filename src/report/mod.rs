//! Read-only worksheet reports
//!
//! Each report is built from a `&Worksheet` by a pure function and turned
//! into [`ReportLine`]s, which are rendered as plain or colored text (or
//! serialized to JSON by the CLI).

pub mod format;
mod headers;
mod keywords;
mod ranges;

pub use headers::{scan_headers, HeaderColumn, HeaderEntry, HeaderReport};
pub use keywords::{locate_keywords, DumpEntry, DumpRow, KeywordMatch, KeywordReport};
pub use ranges::{report_ranges, RangeColumn, RangeEntry, RangeReport, RangeRow};

use colored::Colorize;

const BANNER_WIDTH: usize = 80;

/// One logical line of report output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Section title framed by rules
    Banner(String),
    /// Block label such as `L column:` or `Row 5:`
    Heading(String),
    /// Indented data line
    Entry(String),
    /// Free-standing notice (e.g. nothing found)
    Message(String),
}

/// A report that can be laid out as text lines
pub trait Report {
    fn lines(&self) -> Vec<ReportLine>;
}

/// Render lines as plain text
pub fn render_plain(lines: &[ReportLine]) -> String {
    render(lines, false)
}

/// Render lines with terminal colors (colored drops them when stdout is
/// not a terminal)
pub fn render_colored(lines: &[ReportLine]) -> String {
    render(lines, true)
}

fn render(lines: &[ReportLine], color: bool) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out: Vec<String> = Vec::new();

    for line in lines {
        match line {
            ReportLine::Banner(title) => {
                if !out.is_empty() {
                    out.push(String::new());
                }
                out.push(rule.clone());
                out.push(if color {
                    title.bold().green().to_string()
                } else {
                    title.clone()
                });
                out.push(rule.clone());
            }
            ReportLine::Heading(label) => {
                out.push(String::new());
                out.push(if color {
                    label.bright_blue().bold().to_string()
                } else {
                    label.clone()
                });
            }
            ReportLine::Entry(text) => out.push(format!("  {}", text)),
            ReportLine::Message(text) => {
                out.push(String::new());
                out.push(if color {
                    text.yellow().to_string()
                } else {
                    text.clone()
                });
            }
        }
    }

    let mut text = out.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}
