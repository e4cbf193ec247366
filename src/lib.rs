//! sheet-inspect - read-only Excel worksheet inspector
//!
//! Loads one worksheet of an .xlsx workbook with formulas preserved and
//! reports on it for manual review.
//!
//! # Reports
//!
//! - Header scan: non-empty cells of the first rows, column by column
//! - Range report: every value of fixed columns plus the header area
//! - Keyword search: cells mentioning formwork, rebar, concrete or unit
//!   labels, followed by a dump of the whole sheet
//!
//! # Example
//!
//! ```no_run
//! use sheet_inspect::excel::load_worksheet;
//! use sheet_inspect::report::{render_plain, scan_headers, Report};
//!
//! let sheet = load_worksheet("골구조도.xlsx", None)?;
//! println!("{} rows x {} columns", sheet.row_count(), sheet.column_count());
//!
//! let report = scan_headers(&sheet, 10, 30);
//! print!("{}", render_plain(&report.lines()));
//! # Ok::<(), sheet_inspect::error::InspectError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use config::InspectConfig;
pub use error::{InspectError, InspectResult};
pub use excel::{load_worksheet, Worksheet};
pub use types::{Cell, CellKind, CellValue};
