//! Drag-to-draw interaction: press to anchor a line, drag to preview it,
//! release to commit.

use crate::drawing::{DrawingSession, SavedCell};
use crate::grid::{Cell, GridError};
use crate::painter::CellPainter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Idle,
    Dragging { start: Cell, end: Cell },
}

#[derive(Debug)]
pub struct PreviewController {
    state: PreviewState,
    saved_cells: Vec<SavedCell>,
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewController {
    pub fn new() -> Self {
        Self {
            state: PreviewState::Idle,
            saved_cells: Vec::new(),
        }
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PreviewState::Dragging { .. })
    }

    /// Starts a line at `cell`. Presses outside the grid are ignored.
    pub fn press(&mut self, cell: Cell, session: &DrawingSession) -> bool {
        self.state = PreviewState::Idle;

        if !session.model().is_cell_within_bounds(cell) {
            log::warn!("Ignoring press outside the grid at ({}, {})", cell.column, cell.row);
            return false;
        }

        log::debug!("Line anchored at ({}, {})", cell.column, cell.row);
        self.state = PreviewState::Dragging {
            start: cell,
            end: cell,
        };
        true
    }

    /// Moves the free end of the line and redraws the preview. Targets
    /// outside the grid leave the current preview in place.
    pub fn drag_to<P>(
        &mut self,
        cell: Cell,
        session: &mut DrawingSession,
        painter: &mut P,
    ) -> Result<(), GridError>
    where
        P: CellPainter + ?Sized,
    {
        let start = match self.state {
            PreviewState::Dragging { start, .. } => start,
            PreviewState::Idle => return Ok(()),
        };

        if !session.model().is_cell_within_bounds(cell) {
            return Ok(());
        }

        self.state = PreviewState::Dragging { start, end: cell };
        self.clear_preview(session, painter)?;
        self.saved_cells = session.rasterize_transient_line(start, cell, painter)?;
        Ok(())
    }

    /// Drops the preview without committing anything.
    pub fn cancel<P>(&mut self, session: &mut DrawingSession, painter: &mut P) -> Result<(), GridError>
    where
        P: CellPainter + ?Sized,
    {
        if !self.is_dragging() {
            return Ok(());
        }

        log::debug!("Line preview cancelled");
        self.state = PreviewState::Idle;
        self.clear_preview(session, painter)
    }

    /// Commits the line ending at `cell`. Returns the number of cells drawn,
    /// or `None` when there was nothing to commit.
    pub fn release<P>(
        &mut self,
        cell: Cell,
        session: &mut DrawingSession,
        painter: &mut P,
    ) -> Result<Option<usize>, GridError>
    where
        P: CellPainter + ?Sized,
    {
        let start = match self.state {
            PreviewState::Dragging { start, .. } => start,
            PreviewState::Idle => return Ok(None),
        };

        self.state = PreviewState::Idle;
        self.clear_preview(session, painter)?;

        if !session.model().is_cell_within_bounds(cell) {
            log::warn!(
                "Released outside the grid at ({}, {}); line dropped",
                cell.column,
                cell.row
            );
            return Ok(None);
        }

        let visited = session.rasterize_line(
            start,
            cell,
            painter,
            None::<fn(&crate::grid::GridModel, Cell)>,
        )?;
        log::info!(
            "Committed line ({}, {}) -> ({}, {}): {} cells",
            start.column,
            start.row,
            cell.column,
            cell.row,
            visited
        );
        Ok(Some(visited))
    }

    fn clear_preview<P>(&mut self, session: &mut DrawingSession, painter: &mut P) -> Result<(), GridError>
    where
        P: CellPainter + ?Sized,
    {
        if self.saved_cells.is_empty() {
            return Ok(());
        }

        let saved = std::mem::take(&mut self.saved_cells);
        session.restore_cells(&saved, painter)
    }
}
