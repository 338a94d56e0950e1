//! Grid geometry: the mapping between grid cells, logical pixels, and
//! displayed (zoomed) pixels.
//!
//! Cell `(x, y)` covers the logical pixel rectangle
//! `[x * TILE_WIDTH, (x + 1) * TILE_WIDTH) x [y * TILE_HEIGHT, (y + 1) * TILE_HEIGHT)`.
//! The expand ratio only scales the displayed surface; it never changes the
//! logical coordinate system.

use crate::geom::Point;
use crate::tile::{TILE_HEIGHT, TILE_OFFSET, TILE_WIDTH};

/// Rows, columns and display zoom of a tile map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    pub rows: u32,
    pub cols: u32,
    pub expand_ratio: f64,
}

impl GridGeometry {
    /// Create a new geometry.
    #[inline]
    pub const fn new(rows: u32, cols: u32, expand_ratio: f64) -> Self {
        Self {
            rows,
            cols,
            expand_ratio,
        }
    }

    /// Logical surface size `(cols * TILE_WIDTH, rows * TILE_HEIGHT)`,
    /// or `None` if it does not fit in `u32`.
    #[inline]
    pub const fn checked_logical_size(&self) -> Option<(u32, u32)> {
        match (
            self.cols.checked_mul(TILE_WIDTH),
            self.rows.checked_mul(TILE_HEIGHT),
        ) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    /// Logical surface size `(cols * TILE_WIDTH, rows * TILE_HEIGHT)`,
    /// saturating at `u32::MAX`.
    #[inline]
    pub const fn logical_size(&self) -> (u32, u32) {
        (
            self.cols.saturating_mul(TILE_WIDTH),
            self.rows.saturating_mul(TILE_HEIGHT),
        )
    }

    /// Displayed surface size: the logical size scaled by the expand ratio.
    pub fn display_size(&self) -> (f64, f64) {
        let (w, h) = self.logical_size();
        (
            f64::from(w) * self.expand_ratio,
            f64::from(h) * self.expand_ratio,
        )
    }

    /// Whether `cell` lies inside `[0, cols) x [0, rows)`.
    #[inline]
    pub fn contains(&self, cell: Point) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.cols && (cell.y as u32) < self.rows
    }

    /// Top-left logical pixel `(x, y)` of the cell interior. Computed in
    /// `i64` so that any `i32` cell has an origin.
    #[inline]
    pub const fn cell_origin(cell: Point) -> (i64, i64) {
        (
            cell.x as i64 * TILE_WIDTH as i64,
            cell.y as i64 * TILE_HEIGHT as i64,
        )
    }

    /// Where the top-left pixel of a rendered (bordered) tile image lands
    /// for `cell`: the cell origin moved up-left by the border inset.
    #[inline]
    pub const fn image_origin(cell: Point) -> (i64, i64) {
        let (x, y) = Self::cell_origin(cell);
        (x - TILE_OFFSET as i64, y - TILE_OFFSET as i64)
    }

    /// Map a click on the displayed surface to a grid cell.
    ///
    /// `client_x`/`client_y` are relative to the displayed surface's top-left
    /// corner. The result is not clamped: clicks outside the grid yield
    /// out-of-range cells, which callers validate with [`contains`].
    ///
    /// [`contains`]: GridGeometry::contains
    #[inline]
    pub fn cell_at(&self, client_x: f64, client_y: f64) -> Point {
        cell_at(client_x, client_y, self.expand_ratio)
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(6, 6, 2.0)
    }
}

/// `(floor(client_x / TILE_WIDTH / expand_ratio), floor(client_y / TILE_HEIGHT / expand_ratio))`.
pub fn cell_at(client_x: f64, client_y: f64, expand_ratio: f64) -> Point {
    let x = (client_x / f64::from(TILE_WIDTH) / expand_ratio).floor();
    let y = (client_y / f64::from(TILE_HEIGHT) / expand_ratio).floor();
    Point::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_sizes() {
        let g = GridGeometry::default();
        assert_eq!((g.rows, g.cols), (6, 6));
        assert_eq!(g.logical_size(), (240, 300));
        assert_eq!(g.display_size(), (480.0, 600.0));
    }

    #[test]
    fn image_origin_includes_border() {
        assert_eq!(GridGeometry::cell_origin(Point::new(2, 3)), (80, 150));
        assert_eq!(GridGeometry::image_origin(Point::new(2, 3)), (79, 149));
        assert_eq!(GridGeometry::image_origin(Point::ZERO), (-1, -1));
    }

    #[test]
    fn image_origin_of_extreme_cells() {
        assert_eq!(
            GridGeometry::image_origin(Point::new(i32::MAX, i32::MIN)),
            (i32::MAX as i64 * 40 - 1, i32::MIN as i64 * 50 - 1)
        );
    }

    #[test]
    fn oversized_grid_has_no_logical_size() {
        let g = GridGeometry::new(100_000_000, 1, 1.0);
        assert_eq!(g.checked_logical_size(), None);
        assert_eq!(g.logical_size(), (40, u32::MAX));
        assert_eq!(
            GridGeometry::new(6, 6, 2.0).checked_logical_size(),
            Some((240, 300))
        );
    }

    #[test]
    fn click_scenario() {
        let g = GridGeometry::default();
        assert_eq!(g.cell_at(165.0, 210.0), Point::new(2, 2));
    }

    #[test]
    fn click_is_inverse_of_placement() {
        for &ratio in &[0.5, 1.0, 1.5, 2.0, 3.0, 7.25] {
            for x in 0..12 {
                for y in 0..12 {
                    let px = (f64::from(x) + 0.5) * f64::from(TILE_WIDTH) * ratio;
                    let py = (f64::from(y) + 0.5) * f64::from(TILE_HEIGHT) * ratio;
                    assert_eq!(cell_at(px, py, ratio), Point::new(x, y), "ratio {ratio}");
                }
            }
        }
    }

    #[test]
    fn click_outside_is_not_clamped() {
        let g = GridGeometry::new(2, 2, 1.0);
        let left = g.cell_at(-1.0, 10.0);
        assert_eq!(left, Point::new(-1, 0));
        assert!(!g.contains(left));

        let far = g.cell_at(500.0, 500.0);
        assert_eq!(far, Point::new(12, 10));
        assert!(!g.contains(far));
        assert!(g.contains(g.cell_at(79.0, 99.0)));
    }
}
