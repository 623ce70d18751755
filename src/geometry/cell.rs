use std::fmt;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

use super::{Edge, HexMetrics};

/// One hexagon of a grid, positioned by its `(row, column)` index.
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    row: u32,
    column: u32,
    center: Point2,
    corners: [Point2; 6],
}

impl HexCell {
    /// Builds the cell at `(row, column)` using the grid's layout constants.
    #[must_use]
    pub fn new(metrics: &HexMetrics, row: u32, column: u32) -> Self {
        let center = metrics.offset(row, column);
        Self {
            row,
            column,
            center,
            corners: metrics.corners(center),
        }
    }

    #[must_use]
    pub fn row(&self) -> u32 {
        self.row
    }

    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the offset the cell was built around.
    ///
    /// Always equal to `corners()[3]` shifted by `+outer_radius` along y.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn corners(&self) -> &[Point2; 6] {
        &self.corners
    }

    /// Returns corner `index`, wrapping around after the sixth.
    #[must_use]
    pub fn corner(&self, index: usize) -> Point2 {
        self.corners[index % 6]
    }

    /// Iterates the six outline edges, corner `i` to corner `(i + 1) % 6`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..6).map(move |i| Edge::new(self.corner(i), self.corner(i + 1)))
    }

    /// Unsigned area enclosed by the corners.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.corners).abs()
    }
}

impl fmt::Display for HexCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) @ ({} , {})",
            self.row, self.column, self.center.x, self.center.y
        )
    }
}
