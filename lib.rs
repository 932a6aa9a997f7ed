//! Grid drawing with Bresenham line rasterization.
//!
//! A [`DrawingSession`](drawing::DrawingSession) owns the cell grid and turns
//! pairs of cells into straight lines of filled cells. The
//! [`GridCalculator`](calculator::GridCalculator) maps between surface pixels
//! and cells for input handling and painting.

pub mod calculator;
pub mod config;
pub mod drawing;
pub mod graphics;
pub mod grid;
pub mod input;
pub mod painter;
pub mod preview;
pub mod rasterizer;

pub use calculator::{GridCalculator, Point, Rectangle, Size};
pub use drawing::{DrawingSession, SavedCell};
pub use grid::{Cell, GridDimensions, GridError, GridModel};
pub use painter::{CellPainter, FramePainter, Palette};
pub use rasterizer::{rasterize_line, BresenhamLine, Line};
