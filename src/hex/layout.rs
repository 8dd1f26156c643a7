//! Offset-column hex layout
//!
//! A hex of radius `r` has a bounding box `2r` wide and `√3·r` tall.
//! Columns advance by `1.5r`, so neighbouring columns overlap by `0.5r`.
//! Inside that overlap band the bounding rectangle of one hex also covers two
//! triangular slivers that belong to the hexes of the previous column.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::triangle::point_in_triangle;

/// A (column, row) address in the offset grid
///
/// Coordinates may be negative or beyond the grid when produced from a
/// pixel position; callers bound-check against the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCell {
    pub column: i32,
    pub row: i32,
}

impl HexCell {
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Odd columns are shifted down by half a hex height
    #[inline]
    pub fn is_odd_column(&self) -> bool {
        is_odd(self.column)
    }
}

#[inline]
fn is_odd(column: i32) -> bool {
    column.rem_euclid(2) == 1
}

/// Pixel geometry for a grid of flat-top hexagons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    /// Distance from a hex centre to any corner
    pub radius: f32,
    /// Pixel position of the top-left corner of cell (0, 0)'s bounding box
    pub origin: Vec2,
}

impl HexLayout {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            origin: Vec2::ZERO,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Bounding box height (`√3·r`)
    #[inline]
    pub fn height(&self) -> f32 {
        3.0_f32.sqrt() * self.radius
    }

    /// Bounding box width (`2r`)
    #[inline]
    pub fn width(&self) -> f32 {
        2.0 * self.radius
    }

    /// Horizontal step between column origins (`1.5r`)
    #[inline]
    pub fn side(&self) -> f32 {
        1.5 * self.radius
    }

    /// Width of the band where two columns overlap (`0.5r`)
    #[inline]
    fn inset(&self) -> f32 {
        self.width() - self.side()
    }

    /// Locate the hex containing a pixel position
    ///
    /// The column strip and row are found on a rectangular overlay first.
    /// Points in the left overlap band of a strip are then checked against
    /// the two slivers owned by the previous column.
    pub fn cell_at(&self, point: Vec2) -> HexCell {
        let local = point - self.origin;
        let height = self.height();
        let side = self.side();

        let mut column = (local.x / side).floor() as i32;
        let mut row = if is_odd(column) {
            ((local.y + height * 0.5) / height).floor() as i32 - 1
        } else {
            (local.y / height).floor() as i32
        };

        let band_left = column as f32 * side;
        if local.x > band_left && local.x < band_left + self.inset() {
            let top = self.cell_origin(HexCell::new(column, row)) - self.origin;
            let mid = top + Vec2::new(0.0, height * 0.5);
            let bottom = top + Vec2::new(0.0, height);
            let step = Vec2::new(self.inset(), 0.0);

            if point_in_triangle(local, top, mid, top + step) {
                column -= 1;
                if is_odd(column) {
                    row -= 1;
                }
            } else if point_in_triangle(local, mid, bottom, bottom + step) {
                column -= 1;
                if !is_odd(column) {
                    row += 1;
                }
            }
        }

        HexCell::new(column, row)
    }

    /// Top-left corner of a cell's bounding box
    pub fn cell_origin(&self, cell: HexCell) -> Vec2 {
        let x = cell.column as f32 * self.side();
        let mut y = cell.row as f32 * self.height();
        if cell.is_odd_column() {
            y += self.height() * 0.5;
        }
        self.origin + Vec2::new(x, y)
    }

    /// Centre point of a cell
    pub fn cell_center(&self, cell: HexCell) -> Vec2 {
        self.cell_origin(cell) + Vec2::new(self.width() * 0.5, self.height() * 0.5)
    }

    /// Outline corners, clockwise from the top-left
    pub fn corners(&self, cell: HexCell) -> [Vec2; 6] {
        let o = self.cell_origin(cell);
        let (w, h, side) = (self.width(), self.height(), self.side());
        [
            o + Vec2::new(w - side, 0.0),
            o + Vec2::new(side, 0.0),
            o + Vec2::new(w, h * 0.5),
            o + Vec2::new(side, h),
            o + Vec2::new(w - side, h),
            o + Vec2::new(0.0, h * 0.5),
        ]
    }

    /// Drawing surface size needed to show `cols × rows` hexes
    pub fn surface_size(&self, cols: usize, rows: usize) -> Vec2 {
        let w = cols as f32 * self.width() * 0.75 + self.width() * 0.25;
        let h = rows as f32 * self.height() + self.height() * 0.5;
        Vec2::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout() -> HexLayout {
        HexLayout::new(10.0)
    }

    #[test]
    fn test_derived_metrics() {
        let l = layout();
        assert!((l.height() - 17.320_508).abs() < 1e-4);
        assert_eq!(l.width(), 20.0);
        assert_eq!(l.side(), 15.0);
    }

    #[test]
    fn test_cell_origin_offsets_odd_columns() {
        let l = layout();
        assert_eq!(l.cell_origin(HexCell::new(0, 0)), Vec2::ZERO);
        let odd = l.cell_origin(HexCell::new(1, 0));
        assert_eq!(odd.x, 15.0);
        assert!((odd.y - l.height() * 0.5).abs() < 1e-4);
        let even = l.cell_origin(HexCell::new(2, 3));
        assert_eq!(even.x, 30.0);
        assert!((even.y - 3.0 * l.height()).abs() < 1e-4);
    }

    #[test]
    fn test_centers_map_back() {
        let l = layout();
        for column in 0..6 {
            for row in 0..6 {
                let cell = HexCell::new(column, row);
                assert_eq!(l.cell_at(l.cell_center(cell)), cell);
            }
        }
    }

    #[test]
    fn test_top_sliver_of_even_column() {
        // Top-left corner region of (0, 0) belongs to (-1, -1)
        let l = layout();
        assert_eq!(l.cell_at(Vec2::new(1.0, 1.0)), HexCell::new(-1, -1));
    }

    #[test]
    fn test_bottom_sliver_of_odd_column() {
        // Inside the band of column 1 but below the lower-left edge of (1, -1)
        let l = layout();
        assert_eq!(l.cell_at(Vec2::new(16.0, 5.0)), HexCell::new(0, 0));
        // Above that edge the point stays in (1, -1)
        assert_eq!(l.cell_at(Vec2::new(16.0, 1.0)), HexCell::new(1, -1));
    }

    #[test]
    fn test_slivers_of_odd_column_row_zero() {
        let l = layout();
        let h = l.height();
        // Top sliver of (1, 0) is the lower-right corner of (0, 0)
        assert_eq!(l.cell_at(Vec2::new(15.5, h * 0.5 + 1.0)), HexCell::new(0, 0));
        // Bottom sliver of (1, 0) is the upper-right corner of (0, 1)
        assert_eq!(l.cell_at(Vec2::new(15.5, h * 1.5 - 1.0)), HexCell::new(0, 1));
    }

    #[test]
    fn test_bottom_sliver_of_even_column() {
        let l = layout();
        let h = l.height();
        // Bottom-left corner of (2, 0) belongs to (1, 0)
        assert_eq!(l.cell_at(Vec2::new(30.5, h - 1.0)), HexCell::new(1, 0));
    }

    #[test]
    fn test_origin_shifts_lookup() {
        let l = layout().with_origin(Vec2::new(100.0, 50.0));
        let cell = HexCell::new(3, 2);
        assert_eq!(l.cell_at(l.cell_center(cell)), cell);
        assert_eq!(l.cell_at(Vec2::new(101.0, 51.0)), HexCell::new(-1, -1));
    }

    #[test]
    fn test_corners_span_bounding_box() {
        let l = layout();
        let corners = l.corners(HexCell::new(1, 1));
        let o = l.cell_origin(HexCell::new(1, 1));
        let min = corners.iter().fold(Vec2::splat(f32::MAX), |a, c| a.min(*c));
        let max = corners.iter().fold(Vec2::splat(f32::MIN), |a, c| a.max(*c));
        assert!((min - o).length() < 1e-4);
        assert!((max - (o + Vec2::new(l.width(), l.height()))).length() < 1e-4);
    }

    #[test]
    fn test_surface_size() {
        let l = layout();
        let size = l.surface_size(4, 3);
        assert_eq!(size.x, 4.0 * 15.0 + 5.0);
        assert!((size.y - 3.5 * l.height()).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_interior_points_resolve_to_their_cell(
            column in 0i32..24,
            row in 0i32..24,
            angle in 0.0f32..std::f32::consts::TAU,
            frac in 0.0f32..0.9,
            radius in 8.0f32..60.0,
        ) {
            let l = HexLayout::new(radius);
            let cell = HexCell::new(column, row);
            // Stay within the inscribed circle, which lies inside the hexagon
            let apothem = radius * 3.0_f32.sqrt() * 0.5;
            let offset = Vec2::new(angle.cos(), angle.sin()) * apothem * frac;
            let point = l.cell_center(cell) + offset;
            prop_assert_eq!(l.cell_at(point), cell);
        }
    }
}
