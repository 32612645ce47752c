//! Pixel layout of the board and pointer-to-cell mapping

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::geometry::{point_in_hexagon, Point};

/// Margin between the board and the top/bottom window edges, in pixels
const VERTICAL_MARGIN: f64 = 50.0;

/// Pixel-space placement of the grid: the center of cell (0, 0) and
/// the hexagon side length. Recomputed by the caller whenever the
/// board size or window changes; never stored in the board itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub origin: Point,
    pub tile_size: f64,
}

impl Layout {
    pub fn new(origin: Point, tile_size: f64) -> Self {
        Self { origin, tile_size }
    }

    /// Fit a board of `size` cells per edge into a `width` x `height`
    /// window, leaving the vertical margin. Requires `size >= 2`.
    pub fn fit(width: f64, height: f64, size: usize) -> Self {
        let half = height / 2.0 - VERTICAL_MARGIN;
        let tile_size = 4.0 * half / (3.0 * 3f64.sqrt() * (size - 1) as f64);
        let origin = Point::new(width / 2.0 - half / 3f64.sqrt(), VERTICAL_MARGIN);
        Self { origin, tile_size }
    }

    /// Pixel center of the cell at `coord`, by the flat-top offset
    /// formulas: columns advance x by 1.5 sides, rows advance y by a
    /// full hex height.
    pub fn cell_center(&self, coord: Coord) -> Point {
        let (r, c) = (coord.row as f64, coord.col as f64);
        Point::new(
            self.origin.x + c * 1.5 * self.tile_size,
            self.origin.y + (c + 2.0 * r) * self.tile_size * 3f64.sqrt() / 2.0,
        )
    }

    /// Find the cell whose hexagon contains `pos`, or None when the
    /// pointer is off the board. Scans every cell in row-major order;
    /// the tiling has no gaps or overlaps, so at most one interior
    /// match exists, and the bounded board size keeps the full scan
    /// cheap.
    pub fn locate_cell(&self, pos: Point, size: usize) -> Option<Coord> {
        for row in 0..size as i16 {
            for col in 0..size as i16 {
                let coord = Coord::new(row, col);
                if point_in_hexagon(pos, self.cell_center(coord), self.tile_size) {
                    return Some(coord);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DIRECTIONS;
    use crate::geometry::EPS;

    fn layout() -> Layout {
        Layout::new(Point::new(200.0, 50.0), 40.0)
    }

    #[test]
    fn test_cell_center_formulas() {
        let l = layout();
        let p = l.cell_center(Coord::new(0, 0));
        assert_eq!(p, l.origin);

        let p = l.cell_center(Coord::new(2, 1));
        assert!((p.x - (200.0 + 1.5 * 40.0)).abs() < EPS);
        assert!((p.y - (50.0 + 5.0 * 40.0 * 3f64.sqrt() / 2.0)).abs() < EPS);
    }

    #[test]
    fn test_locate_cell_at_centers() {
        let l = layout();
        for row in 0..5 {
            for col in 0..5 {
                let coord = Coord::new(row, col);
                assert_eq!(l.locate_cell(l.cell_center(coord), 5), Some(coord));
            }
        }
    }

    #[test]
    fn test_locate_cell_off_board() {
        let l = layout();
        assert_eq!(l.locate_cell(Point::new(-500.0, -500.0), 5), None);
    }

    #[test]
    fn test_adjacent_hexagons_do_not_overlap() {
        // A point clearly on one side of the shared edge between two
        // adjacent cells belongs to exactly one of them.
        let l = layout();
        let a = Coord::new(2, 2);
        for dir in 0..6 {
            let b = a.neighbor(dir);
            let ca = l.cell_center(a);
            let cb = l.cell_center(b);
            let mid = Point::new((ca.x + cb.x) / 2.0, (ca.y + cb.y) / 2.0);
            // Nudge the midpoint toward each center by more than EPS
            for (toward, other) in [(ca, cb), (cb, ca)] {
                let p = Point::new(
                    mid.x + (toward.x - mid.x) * 1e-3,
                    mid.y + (toward.y - mid.y) * 1e-3,
                );
                let in_toward =
                    point_in_hexagon(p, toward, l.tile_size);
                let in_other = point_in_hexagon(p, other, l.tile_size);
                assert!(in_toward, "direction {}: nudged point left its own hex", dir);
                assert!(!in_other, "direction {}: nudged point in both hexes", dir);
            }
        }
    }

    #[test]
    fn test_fit_scales_with_board_size() {
        let small = Layout::fit(800.0, 600.0, 5);
        let large = Layout::fit(800.0, 600.0, 11);
        assert!(small.tile_size > large.tile_size);
        assert!(large.tile_size > 0.0);
        // Origin sits at the top margin
        assert_eq!(small.origin.y, 50.0);
        assert_eq!(large.origin, small.origin);

        for dir in [DIRECTIONS[0], DIRECTIONS[2]] {
            // Adjacent centers sit one hex height apart
            let a = small.cell_center(Coord::new(1, 1));
            let b = small.cell_center(Coord::new(1 + dir.0, 1 + dir.1));
            let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            assert!((d - small.tile_size * 3f64.sqrt()).abs() < 1e-9);
        }
    }
}
