//! Mapping between surface coordinates and grid cells.

use crate::grid::{Cell, GridDimensions};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Affine transform between a drawing surface and the cells of a grid.
///
/// Cell sizes are derived once from `size / dimensions`. Cell geometry is
/// computed by direct multiplication, while pixel lookups round up: a pixel
/// lying exactly on a boundary resolves to the cell after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCalculator {
    origin: Point,
    size: Size,
    dimensions: GridDimensions,
    cell_width: f64,
    cell_height: f64,
}

impl GridCalculator {
    pub fn new(origin: Point, size: Size, dimensions: GridDimensions) -> Self {
        Self {
            origin,
            size,
            dimensions,
            cell_width: size.width / dimensions.columns() as f64,
            cell_height: size.height / dimensions.rows() as f64,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn top(&self) -> f64 {
        self.origin.y
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn cell_rectangle(&self, column: i32, row: i32) -> Rectangle {
        Rectangle {
            x: self.vertical_line_x(column),
            y: self.horizontal_line_y(row),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    pub fn horizontal_line_y(&self, row: i32) -> f64 {
        self.origin.y + row as f64 * self.cell_height
    }

    pub fn vertical_line_x(&self, column: i32) -> f64 {
        self.origin.x + column as f64 * self.cell_width
    }

    /// `x` is relative to the surface; the origin is not subtracted.
    pub fn column_from_x(&self, x: f64) -> i32 {
        (x / self.cell_width).ceil() as i32
    }

    pub fn row_from_y(&self, y: f64) -> i32 {
        (y / self.cell_height).ceil() as i32
    }

    pub fn cell_from_point(&self, point: Point) -> Cell {
        Cell::new(self.column_from_x(point.x), self.row_from_y(point.y))
    }
}
