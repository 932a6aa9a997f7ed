//! Bounds-checked boolean cell storage.

use std::num::NonZeroU32;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("The cell {{x: {column}, y: {row}}} is out of the grid's bounds")]
    OutOfBounds { column: i32, row: i32 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("A grid needs at least one column and one row, got {columns}x{rows}")]
pub struct EmptyGridError {
    pub columns: u32,
    pub rows: u32,
}

/// Number of columns and rows of a grid. Both are at least one and fixed
/// once the grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    columns: NonZeroU32,
    rows: NonZeroU32,
}

impl GridDimensions {
    pub fn new(columns: u32, rows: u32) -> Result<Self, EmptyGridError> {
        match (NonZeroU32::new(columns), NonZeroU32::new(rows)) {
            (Some(columns), Some(rows)) => Ok(Self { columns, rows }),
            _ => Err(EmptyGridError { columns, rows }),
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns.get()
    }

    pub fn rows(&self) -> u32 {
        self.rows.get()
    }

    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.is_column_in_range(cell.column) && self.is_row_in_range(cell.row)
    }

    fn is_column_in_range(&self, column: i32) -> bool {
        0 <= column && (column as i64) < self.columns() as i64
    }

    fn is_row_in_range(&self, row: i32) -> bool {
        0 <= row && (row as i64) < self.rows() as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((column, row): (i32, i32)) -> Self {
        Self { column, row }
    }
}

/// Row-major boolean occupancy map. Every access is bounds-checked.
#[derive(Debug, Clone)]
pub struct GridModel {
    dimensions: GridDimensions,
    cells: Vec<bool>,
}

impl GridModel {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![false; dimensions.cell_count()],
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn is_cell_within_bounds(&self, cell: Cell) -> bool {
        self.dimensions.contains(cell)
    }

    /// Fails with `OutOfBounds` carrying the offending cell.
    pub fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.is_cell_within_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                column: cell.column,
                row: cell.row,
            })
        }
    }

    pub fn get_cell_value(&self, column: i32, row: i32) -> Result<bool, GridError> {
        let index = self.index_of(Cell::new(column, row))?;
        Ok(self.cells[index])
    }

    pub fn set_cell_value(&mut self, column: i32, row: i32, value: bool) -> Result<(), GridError> {
        let index = self.index_of(Cell::new(column, row))?;
        self.cells[index] = value;
        Ok(())
    }

    /// All cells in row-major order together with their values.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        let columns = self.dimensions.columns() as usize;
        self.cells.iter().enumerate().map(move |(index, &value)| {
            let cell = Cell::new((index % columns) as i32, (index / columns) as i32);
            (cell, value)
        })
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|(_, value)| *value).map(|(cell, _)| cell)
    }

    fn index_of(&self, cell: Cell) -> Result<usize, GridError> {
        self.check_bounds(cell)?;
        Ok(cell.row as usize * self.dimensions.columns() as usize + cell.column as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(columns: u32, rows: u32) -> GridModel {
        GridModel::new(GridDimensions::new(columns, rows).unwrap())
    }

    #[test]
    fn dimensions_reject_empty_grids() {
        assert_eq!(
            GridDimensions::new(0, 3),
            Err(EmptyGridError { columns: 0, rows: 3 })
        );
        assert_eq!(
            GridDimensions::new(3, 0),
            Err(EmptyGridError { columns: 3, rows: 0 })
        );
        let dimensions = GridDimensions::new(3, 2).unwrap();
        assert_eq!((dimensions.columns(), dimensions.rows()), (3, 2));
        assert_eq!(dimensions.cell_count(), 6);
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = model(4, 3);
        assert_eq!(grid.cells().count(), 12);
        assert_eq!(grid.filled_cells().count(), 0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut grid = model(3, 2);
        grid.set_cell_value(2, 1, true).unwrap();
        assert!(grid.get_cell_value(2, 1).unwrap());
        assert!(!grid.get_cell_value(1, 1).unwrap());
        assert!(!grid.get_cell_value(2, 0).unwrap());

        grid.set_cell_value(2, 1, false).unwrap();
        assert!(!grid.get_cell_value(2, 1).unwrap());
    }

    #[test]
    fn storage_is_row_major() {
        let mut grid = model(3, 2);
        grid.set_cell_value(0, 1, true).unwrap();
        let filled: Vec<Cell> = grid.filled_cells().collect();
        assert_eq!(filled, vec![Cell::new(0, 1)]);
        assert_eq!(grid.cells().nth(3), Some((Cell::new(0, 1), true)));
    }

    #[test]
    fn out_of_bounds_write_is_rejected() {
        let mut grid = model(3, 2);
        assert_eq!(
            grid.set_cell_value(3, 0, true),
            Err(GridError::OutOfBounds { column: 3, row: 0 })
        );
        assert_eq!(
            grid.set_cell_value(0, 2, true),
            Err(GridError::OutOfBounds { column: 0, row: 2 })
        );
        assert_eq!(
            grid.set_cell_value(-1, 0, true),
            Err(GridError::OutOfBounds { column: -1, row: 0 })
        );
        assert_eq!(grid.filled_cells().count(), 0);
    }

    #[test]
    fn out_of_bounds_read_is_rejected() {
        let grid = model(3, 2);
        assert_eq!(
            grid.get_cell_value(0, -1),
            Err(GridError::OutOfBounds { column: 0, row: -1 })
        );
    }

    #[test]
    fn error_message_names_the_cell() {
        let err = GridError::OutOfBounds { column: 5, row: -2 };
        assert_eq!(
            err.to_string(),
            "The cell {x: 5, y: -2} is out of the grid's bounds"
        );
    }
}
