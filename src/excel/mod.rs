//! Excel reading module
//!
//! Loads a single worksheet from an .xlsx workbook into an immutable
//! snapshot that the reports traverse:
//! - Loader: workbook → Worksheet, formula text preserved
//! - Worksheet: bounded row-major cell traversal
//! - Coordinate: A1-style column letters and addresses

pub mod coordinate;
mod loader;
mod worksheet;

pub use coordinate::{column_index, column_letter, coordinate};
pub use loader::{load_worksheet, WorkbookLoader};
pub use worksheet::{Cells, Worksheet};
