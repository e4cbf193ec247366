use crate::excel::coordinate::{column_letter, coordinate};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

//==============================================================================
// Cell values
//==============================================================================

/// Value stored in a worksheet cell
///
/// Formula cells hold their raw formula text (with the leading `=`) as a
/// `Text` value; see [`CellKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Excel error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Truthiness used by the keyword search: empty text, zero and `false`
    /// never match.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Int(i) => *i != 0,
            CellValue::Float(f) => *f != 0.0,
            CellValue::Bool(b) => *b,
            CellValue::DateTime(_) | CellValue::Error(_) => true,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Bool(true) => write!(f, "TRUE"),
            CellValue::Bool(false) => write!(f, "FALSE"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

/// Whether a cell stores a literal or a formula expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Literal,
    Formula,
}

//==============================================================================
// Cells
//==============================================================================

/// A single cell of a loaded worksheet (1-based row and column)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
    pub value: CellValue,
    pub kind: CellKind,
}

impl Cell {
    pub fn new(row: u32, column: u32, value: CellValue, kind: CellKind) -> Self {
        Self {
            row,
            column,
            value,
            kind,
        }
    }

    /// Empty placeholder for a position with no stored content
    pub fn empty(row: u32, column: u32) -> Self {
        Self::new(row, column, CellValue::Empty, CellKind::Literal)
    }

    pub fn is_formula(&self) -> bool {
        self.kind == CellKind::Formula
    }

    /// A cell is reported when it holds a value or a formula
    pub fn is_present(&self) -> bool {
        !self.value.is_empty() || self.is_formula()
    }

    /// Human-readable address such as `L5`
    pub fn coordinate(&self) -> String {
        coordinate(self.row, self.column)
    }

    pub fn column_letter(&self) -> String {
        column_letter(self.column)
    }

    /// Single-letter data type code: n(umber), s(tring), b(ool), d(ate),
    /// e(rror) or f(ormula)
    pub fn type_code(&self) -> char {
        if self.is_formula() {
            return 'f';
        }
        match self.value {
            CellValue::Empty | CellValue::Int(_) | CellValue::Float(_) => 'n',
            CellValue::Text(_) => 's',
            CellValue::Bool(_) => 'b',
            CellValue::DateTime(_) => 'd',
            CellValue::Error(_) => 'e',
        }
    }
}
