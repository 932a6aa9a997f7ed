//! Bresenham's line rasterization over integer grid cells.
//!
//! See <https://www.cs.helsinki.fi/group/goa/mallinnus/lines/bresenh.html>.

use crate::grid::Cell;

/// A line canonicalized so the walk is always shallow and left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    is_axis_swapped: bool,
}

impl Line {
    pub fn new(from: Cell, to: Cell) -> Self {
        let mut line = Self {
            x0: from.column as i64,
            y0: from.row as i64,
            x1: to.column as i64,
            y1: to.row as i64,
            dx: 0,
            dy: 0,
            is_axis_swapped: false,
        };

        // Swapping axes can turn a left-to-right line into a right-to-left
        // one, so slope normalization has to run first.
        line.normalize_slope();
        line.normalize_direction();

        line.dx = line.x1 - line.x0;
        line.dy = line.y1 - line.y0;
        line
    }

    /// Mirror a steep line over the diagonal so its slope is at most 1.
    fn normalize_slope(&mut self) {
        let dx = (self.x1 - self.x0).abs();
        let dy = (self.y1 - self.y0).abs();

        if dy > dx {
            std::mem::swap(&mut self.x0, &mut self.y0);
            std::mem::swap(&mut self.x1, &mut self.y1);
            self.is_axis_swapped = true;
        }
    }

    fn normalize_direction(&mut self) {
        if self.x0 > self.x1 {
            std::mem::swap(&mut self.x0, &mut self.x1);
            std::mem::swap(&mut self.y0, &mut self.y1);
        }
    }

    pub fn x0(&self) -> i64 {
        self.x0
    }

    pub fn y0(&self) -> i64 {
        self.y0
    }

    pub fn x1(&self) -> i64 {
        self.x1
    }

    pub fn y1(&self) -> i64 {
        self.y1
    }

    /// Always non-negative.
    pub fn dx(&self) -> i64 {
        self.dx
    }

    /// Signed; tells whether the walk steps up or down the minor axis.
    pub fn dy(&self) -> i64 {
        self.dy
    }

    pub fn is_axis_swapped(&self) -> bool {
        self.is_axis_swapped
    }

    pub fn cells(&self) -> BresenhamLine {
        BresenhamLine::from_line(*self)
    }
}

/// Lazy walk over the cells of a [`Line`] in ascending normalized x.
///
/// A clone continues from the current position; call [`Line::cells`] again
/// to replay the sequence from the start.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    line: Line,
    step_of_y: i64,
    step_of_epsilon: i64,
    epsilon: i64,
    x: i64,
    y: i64,
}

impl BresenhamLine {
    pub fn new(from: Cell, to: Cell) -> Self {
        Self::from_line(Line::new(from, to))
    }

    fn from_line(line: Line) -> Self {
        // Only |dy| feeds the error term; its sign picks the step direction.
        let (step_of_y, step_of_epsilon) = if line.dy > 0 {
            (1, line.dy)
        } else {
            (-1, -line.dy)
        };

        Self {
            line,
            step_of_y,
            step_of_epsilon,
            epsilon: 0,
            x: line.x0,
            y: line.y0,
        }
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    fn to_cell(&self, x: i64, y: i64) -> Cell {
        let (column, row) = if self.line.is_axis_swapped { (y, x) } else { (x, y) };
        // The walk never leaves the endpoints' bounding box, so both fit in i32.
        Cell::new(column as i32, row as i32)
    }
}

impl Iterator for BresenhamLine {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.x > self.line.x1 {
            return None;
        }

        let cell = self.to_cell(self.x, self.y);

        self.x += 1;
        self.epsilon += self.step_of_epsilon;
        if self.epsilon << 1 > self.line.dx {
            self.epsilon -= self.line.dx;
            self.y += self.step_of_y;
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.line.x1 - self.x + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

impl std::iter::FusedIterator for BresenhamLine {}

/// Walk the line from `from` to `to`, calling `fill_cell` once per cell.
pub fn rasterize_line<F>(from: Cell, to: Cell, mut fill_cell: F)
where
    F: FnMut(Cell),
{
    for cell in BresenhamLine::new(from, to) {
        fill_cell(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn walk(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        BresenhamLine::new(Cell::new(x0, y0), Cell::new(x1, y1))
            .map(|cell| (cell.column, cell.row))
            .collect()
    }

    #[test]
    fn single_point() {
        assert_eq!(walk(2, 2, 2, 2), vec![(2, 2)]);
    }

    #[test]
    fn shallow_line_concrete_walk() {
        assert_eq!(walk(0, 0, 3, 1), vec![(0, 0), (1, 0), (2, 1), (3, 1)]);
    }

    #[test]
    fn horizontal_line_keeps_its_row() {
        assert_eq!(walk(4, 1, 0, 1), vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn vertical_line_keeps_its_column() {
        assert_eq!(walk(3, 5, 3, 1), vec![(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)]);
    }

    #[test]
    fn diagonals_step_both_axes() {
        assert_eq!(walk(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(walk(0, 3, 3, 0), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn steep_line_is_walked_along_rows() {
        assert_eq!(walk(0, 0, 1, 3), vec![(0, 0), (0, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn normalization_swaps_steep_axes_before_direction() {
        let line = Line::new(Cell::new(5, 0), Cell::new(0, 9));
        assert!(line.is_axis_swapped());
        assert!(line.x0() <= line.x1());
        assert_eq!((line.x0(), line.y0(), line.x1(), line.y1()), (0, 5, 9, 0));
        assert_eq!(line.dx(), 9);
        assert_eq!(line.dy(), -5);
    }

    #[test]
    fn shallow_line_is_not_swapped() {
        let line = Line::new(Cell::new(6, 2), Cell::new(0, 0));
        assert!(!line.is_axis_swapped());
        assert_eq!((line.x0(), line.y0(), line.x1(), line.y1()), (0, 0, 6, 2));
        assert_eq!(line.dy(), 2);
    }

    #[test]
    fn deltas_match_endpoints_and_walk_ends_on_them() {
        for (from, to) in [
            (Cell::new(0, 0), Cell::new(3, 1)),
            (Cell::new(7, -4), Cell::new(-2, 3)),
            (Cell::new(1, 9), Cell::new(1, -3)),
        ] {
            let line = Line::new(from, to);
            assert!(line.x0() <= line.x1());
            assert_eq!(line.dx(), line.x1() - line.x0());
            assert_eq!(line.dy(), line.y1() - line.y0());

            let cells: Vec<Cell> = line.cells().collect();
            assert_eq!(cells.len() as i64, line.dx() + 1);
            let (first, last) = (cells[0], cells[cells.len() - 1]);
            let ends = if line.is_axis_swapped() {
                (
                    Cell::new(line.y0() as i32, line.x0() as i32),
                    Cell::new(line.y1() as i32, line.x1() as i32),
                )
            } else {
                (
                    Cell::new(line.x0() as i32, line.y0() as i32),
                    Cell::new(line.x1() as i32, line.y1() as i32),
                )
            };
            assert_eq!((first, last), ends);
        }
    }

    #[test]
    fn walk_is_repeatable() {
        let line = Line::new(Cell::new(-3, 7), Cell::new(11, -2));
        let first: Vec<Cell> = line.cells().collect();
        let second: Vec<Cell> = line.cells().collect();
        assert_eq!(first, second);
        assert_eq!(line.cells().len(), first.len());
    }

    #[test]
    fn callback_sees_every_cell_in_order() {
        let mut visited = Vec::new();
        rasterize_line(Cell::new(0, 0), Cell::new(3, 1), |cell| visited.push(cell));
        assert_eq!(
            visited,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(3, 1)
            ]
        );
    }

    proptest! {
        #[test]
        fn reversed_line_visits_same_cells(
            x0 in -50..50i32, y0 in -50..50i32, x1 in -50..50i32, y1 in -50..50i32,
        ) {
            let forward: HashSet<_> = walk(x0, y0, x1, y1).into_iter().collect();
            let backward: HashSet<_> = walk(x1, y1, x0, y0).into_iter().collect();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn cells_stay_inside_bounding_box(
            x0 in -50..50i32, y0 in -50..50i32, x1 in -50..50i32, y1 in -50..50i32,
        ) {
            for (column, row) in walk(x0, y0, x1, y1) {
                prop_assert!(x0.min(x1) <= column && column <= x0.max(x1));
                prop_assert!(y0.min(y1) <= row && row <= y0.max(y1));
            }
        }

        #[test]
        fn walk_covers_both_endpoints_once_per_major_step(
            x0 in -50..50i32, y0 in -50..50i32, x1 in -50..50i32, y1 in -50..50i32,
        ) {
            let cells = walk(x0, y0, x1, y1);
            let major = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
            prop_assert_eq!(cells.len(), major + 1);
            prop_assert!(cells.contains(&(x0, y0)));
            prop_assert!(cells.contains(&(x1, y1)));
            let unique: HashSet<_> = cells.iter().collect();
            prop_assert_eq!(unique.len(), cells.len());
        }

        #[test]
        fn consecutive_cells_are_eight_connected(
            x0 in -50..50i32, y0 in -50..50i32, x1 in -50..50i32, y1 in -50..50i32,
        ) {
            let cells = walk(x0, y0, x1, y1);
            for pair in cells.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
                prop_assert_ne!(a, b);
            }
        }

        #[test]
        fn horizontal_and_vertical_lines_stay_on_axis(
            fixed in -50..50i32, a in -50..50i32, b in -50..50i32,
        ) {
            prop_assert!(walk(a, fixed, b, fixed).iter().all(|&(_, row)| row == fixed));
            let vertical = walk(fixed, a, fixed, b);
            prop_assert!(vertical.iter().all(|&(column, _)| column == fixed));
            prop_assert_eq!(vertical.len(), (b - a).unsigned_abs() as usize + 1);
        }
    }
}
