//! In-memory worksheet snapshot with bounded, row-major traversal

use crate::error::{InspectError, InspectResult};
use crate::types::{Cell, CellKind, CellValue};
use std::collections::BTreeMap;

/// Read-only snapshot of one worksheet
///
/// Only cells with stored content are kept; every other position inside the
/// extents reads back as an empty literal.
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    name: String,
    row_count: u32,
    column_count: u32,
    cells: BTreeMap<(u32, u32), (CellValue, CellKind)>,
}

impl Worksheet {
    /// Build a worksheet from its stored cells
    ///
    /// Extents are the highest row and column holding a value or formula,
    /// counted from A1. Cells without content are dropped.
    pub fn from_cells<I>(name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut sheet = Worksheet {
            name: name.into(),
            ..Default::default()
        };

        for cell in cells {
            if !cell.is_present() || cell.row == 0 || cell.column == 0 {
                continue;
            }
            sheet.row_count = sheet.row_count.max(cell.row);
            sheet.column_count = sheet.column_count.max(cell.column);
            sheet
                .cells
                .insert((cell.row, cell.column), (cell.value, cell.kind));
        }

        sheet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells storing a formula
    pub fn formula_count(&self) -> usize {
        self.cells
            .values()
            .filter(|(_, kind)| *kind == CellKind::Formula)
            .count()
    }

    /// Cell at a 1-based (row, column) position inside the extents
    pub fn cell(&self, row: u32, column: u32) -> InspectResult<Cell> {
        if row == 0 || column == 0 || row > self.row_count || column > self.column_count {
            return Err(InspectError::CellOutOfBounds {
                row,
                column,
                rows: self.row_count,
                columns: self.column_count,
            });
        }
        Ok(self.cell_at(row, column))
    }

    /// Every position in row-major order, empty ones included
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            sheet: self,
            row: 1,
            column: 1,
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u32) -> Vec<Cell> {
        (1..=self.column_count)
            .map(|column| self.cell_at(row, column))
            .collect()
    }

    /// All rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (1..=self.row_count).map(move |row| self.row(row))
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, column: u32) -> Vec<Cell> {
        (1..=self.row_count)
            .map(|row| self.cell_at(row, column))
            .collect()
    }

    // Callers stay within the extents; positions past them read as empty.
    fn cell_at(&self, row: u32, column: u32) -> Cell {
        match self.cells.get(&(row, column)) {
            Some((value, kind)) => Cell::new(row, column, value.clone(), *kind),
            None => Cell::empty(row, column),
        }
    }
}

/// Row-major iterator over a worksheet's positions
pub struct Cells<'a> {
    sheet: &'a Worksheet,
    row: u32,
    column: u32,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.sheet.column_count == 0 || self.row > self.sheet.row_count {
            return None;
        }

        let cell = self.sheet.cell_at(self.row, self.column);
        if self.column == self.sheet.column_count {
            self.column = 1;
            self.row += 1;
        } else {
            self.column += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let sheet = self.sheet;
        if sheet.column_count == 0 || self.row > sheet.row_count {
            return (0, Some(0));
        }
        let full_rows = (sheet.row_count - self.row) as usize;
        let remaining =
            full_rows * sheet.column_count as usize + (sheet.column_count - self.column + 1) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}
