mod cell;
mod grid;
mod metrics;

pub use cell::HexCell;
pub use grid::HexGrid;
pub use metrics::HexMetrics;

use crate::math::Point2;

/// A straight outline segment between two consecutive hexagon corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the Euclidean length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Builds the tightest box around `points`, or `None` when empty.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        ))
    }

    /// Width of the box along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn edge_length() {
        let e = Edge::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_relative_eq!(e.length(), 5.0);
    }

    #[test]
    fn aabb_of_empty_is_none() {
        assert!(Aabb::from_points(&[] as &[Point2]).is_none());
    }

    #[test]
    fn aabb_spans_points() {
        let pts = [
            Point2::new(1.0, -2.0),
            Point2::new(-3.0, 4.0),
            Point2::new(0.5, 0.5),
        ];
        let bb = Aabb::from_points(&pts).unwrap();
        assert_relative_eq!(bb.min.x, -3.0);
        assert_relative_eq!(bb.min.y, -2.0);
        assert_relative_eq!(bb.max.x, 1.0);
        assert_relative_eq!(bb.max.y, 4.0);
        assert_relative_eq!(bb.width(), 4.0);
        assert_relative_eq!(bb.height(), 6.0);
    }
}
