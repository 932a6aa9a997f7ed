//! Painting cells and grid lines onto an RGBA frame.

use serde::{Deserialize, Serialize};

use crate::calculator::{GridCalculator, Rectangle};
use crate::grid::Cell;

pub type Rgba = [u8; 4];

/// Colors used when painting the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub grid_line: Rgba,
    pub filled: Rgba,
    pub empty: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [32, 32, 32, 255],
            grid_line: [96, 96, 96, 255],
            filled: [128, 128, 128, 255], // Gray for filled cells
            empty: [64, 64, 64, 255],     // Dark gray for empty cells
        }
    }
}

/// Drawing surface the grid paints through.
pub trait CellPainter {
    fn fill_cell(&mut self, cell: Cell);
    fn clear_cell(&mut self, cell: Cell);
    fn stroke_grid(&mut self);
}

/// Paints into an RGBA8 frame buffer `width * height * 4` bytes long.
pub struct FramePainter<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    calculator: GridCalculator,
    palette: Palette,
}

impl<'a> FramePainter<'a> {
    pub fn new(
        frame: &'a mut [u8],
        width: u32,
        height: u32,
        calculator: GridCalculator,
        palette: Palette,
    ) -> Self {
        Self {
            frame,
            width,
            height,
            calculator,
            palette,
        }
    }

    pub fn clear_frame(&mut self) {
        let background = self.palette.background;
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&background);
        }
    }

    fn put_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let index = ((y as usize * self.width as usize) + x as usize) * 4;
        if index + 3 < self.frame.len() {
            self.frame[index..index + 4].copy_from_slice(&color);
        }
    }

    // The top and left edges belong to the grid lines, so the fill starts one
    // pixel in.
    fn fill_rectangle(&mut self, rect: Rectangle, color: Rgba) {
        let left = rect.x.round() as i64 + 1;
        let top = rect.y.round() as i64 + 1;
        let right = rect.right().round() as i64;
        let bottom = rect.bottom().round() as i64;

        for y in top..bottom {
            for x in left..right {
                self.put_pixel(x, y, color);
            }
        }
    }

    fn stroke_horizontal(&mut self, y: f64, left: f64, right: f64) {
        let y = y.round() as i64;
        for x in left.round() as i64..=right.round() as i64 {
            self.put_pixel(x, y, self.palette.grid_line);
        }
    }

    fn stroke_vertical(&mut self, x: f64, top: f64, bottom: f64) {
        let x = x.round() as i64;
        for y in top.round() as i64..=bottom.round() as i64 {
            self.put_pixel(x, y, self.palette.grid_line);
        }
    }
}

impl CellPainter for FramePainter<'_> {
    fn fill_cell(&mut self, cell: Cell) {
        let rect = self.calculator.cell_rectangle(cell.column, cell.row);
        self.fill_rectangle(rect, self.palette.filled);
    }

    fn clear_cell(&mut self, cell: Cell) {
        let rect = self.calculator.cell_rectangle(cell.column, cell.row);
        self.fill_rectangle(rect, self.palette.empty);
    }

    fn stroke_grid(&mut self) {
        let calc = self.calculator;
        let dimensions = calc.dimensions();

        for row in 0..=dimensions.rows() as i32 {
            self.stroke_horizontal(calc.horizontal_line_y(row), calc.left(), calc.right());
        }

        for column in 0..=dimensions.columns() as i32 {
            self.stroke_vertical(calc.vertical_line_x(column), calc.top(), calc.bottom());
        }
    }
}
