//! The drawing session: sole owner of the grid and entry point for lines.

use crate::calculator::GridCalculator;
use crate::grid::{Cell, GridError, GridModel};
use crate::painter::CellPainter;
use crate::rasterizer::BresenhamLine;

/// A cell value captured before a transient line overwrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCell {
    pub cell: Cell,
    pub value: bool,
}

/// Owns the grid for the lifetime of a drawing session.
///
/// Every mutation of the grid goes through here, so preview logic and
/// committed lines always see the same state.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    model: GridModel,
    calculator: GridCalculator,
}

impl DrawingSession {
    pub fn new(model: GridModel, calculator: GridCalculator) -> Self {
        Self { model, calculator }
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn calculator(&self) -> &GridCalculator {
        &self.calculator
    }

    /// Replaces the geometry, e.g. after the window is resized. The grid
    /// itself keeps its dimensions.
    pub fn set_calculator(&mut self, calculator: GridCalculator) {
        self.calculator = calculator;
    }

    pub fn get_cell_value(&self, column: i32, row: i32) -> Result<bool, GridError> {
        self.model.get_cell_value(column, row)
    }

    pub fn set_cell_value(&mut self, column: i32, row: i32, value: bool) -> Result<(), GridError> {
        self.model.set_cell_value(column, row, value)
    }

    /// Fills every cell the line from `from` to `to` crosses.
    ///
    /// Both endpoints are validated before anything is touched. For each
    /// visited cell `on_cell_visited` runs first (with the cell's prior
    /// value still readable), then the cell is set and painted.
    pub fn rasterize_line<P, F>(
        &mut self,
        from: Cell,
        to: Cell,
        painter: &mut P,
        mut on_cell_visited: Option<F>,
    ) -> Result<usize, GridError>
    where
        P: CellPainter + ?Sized,
        F: FnMut(&GridModel, Cell),
    {
        self.model.check_bounds(from)?;
        self.model.check_bounds(to)?;

        let mut visited = 0;
        for cell in BresenhamLine::new(from, to) {
            if let Some(callback) = on_cell_visited.as_mut() {
                callback(&self.model, cell);
            }
            self.model.set_cell_value(cell.column, cell.row, true)?;
            painter.fill_cell(cell);
            visited += 1;
        }

        log::debug!(
            "Rasterized line ({}, {}) -> ({}, {}): {} cells",
            from.column,
            from.row,
            to.column,
            to.row,
            visited
        );
        Ok(visited)
    }

    /// Draws a line while recording the prior value of every cell it covers,
    /// so it can be undone with [`DrawingSession::restore_cells`].
    pub fn rasterize_transient_line<P>(
        &mut self,
        from: Cell,
        to: Cell,
        painter: &mut P,
    ) -> Result<Vec<SavedCell>, GridError>
    where
        P: CellPainter + ?Sized,
    {
        let mut saved = Vec::new();
        self.rasterize_line(
            from,
            to,
            painter,
            Some(|model: &GridModel, cell: Cell| {
                // Endpoints were validated and the walk stays between them.
                let value = model.get_cell_value(cell.column, cell.row);
                debug_assert!(value.is_ok(), "walk left the grid at {:?}", cell);
                if let Ok(value) = value {
                    saved.push(SavedCell { cell, value });
                }
            }),
        )?;
        Ok(saved)
    }

    /// Writes back previously saved values and repaints those cells.
    pub fn restore_cells<P>(&mut self, saved: &[SavedCell], painter: &mut P) -> Result<(), GridError>
    where
        P: CellPainter + ?Sized,
    {
        for saved_cell in saved {
            let SavedCell { cell, value } = *saved_cell;
            self.model.set_cell_value(cell.column, cell.row, value)?;
            if value {
                painter.fill_cell(cell);
            } else {
                painter.clear_cell(cell);
            }
        }
        Ok(())
    }

    /// Paints every cell from the model, then the grid lines on top.
    pub fn repaint<P>(&self, painter: &mut P)
    where
        P: CellPainter + ?Sized,
    {
        for (cell, value) in self.model.cells() {
            if value {
                painter.fill_cell(cell);
            } else {
                painter.clear_cell(cell);
            }
        }
        painter.stroke_grid();
    }

    pub fn clear(&mut self) {
        self.model = GridModel::new(self.model.dimensions());
    }
}
