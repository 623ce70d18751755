use crate::error::{GeometryError, Result};
use crate::math::{Point2, SQRT3_OVER_2};

/// Grid-wide layout constants shared by every cell of one grid.
///
/// `outer_radius` is the centre-to-corner distance, `inner_radius` the
/// apothem (`outer_radius * √3/2`) and `cell_width` is `2 * outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexMetrics {
    outer_radius: f64,
    inner_radius: f64,
    cell_width: f64,
}

impl HexMetrics {
    /// Creates the layout constants for cells of the given outer radius.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `outer_radius` is not
    /// finite and strictly positive, or so large that the cell width is
    /// no longer finite.
    pub fn new(outer_radius: f64) -> Result<Self> {
        let finite_width = (outer_radius * 2.0).is_finite();
        if !outer_radius.is_finite() || outer_radius <= 0.0 || !finite_width {
            return Err(GeometryError::InvalidArgument {
                parameter: "outer_radius",
                value: outer_radius,
            }
            .into());
        }
        Ok(Self {
            outer_radius,
            inner_radius: outer_radius * SQRT3_OVER_2,
            cell_width: outer_radius * 2.0,
        })
    }

    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Returns the planar centre of the cell at `(row, column)`.
    ///
    /// Odd rows are pushed half a cell to the right: `row * 0.5 - row / 2`
    /// (integer halving) is `0` for even rows and `0.5` for odd ones, so the
    /// stagger never accumulates across rows.
    #[must_use]
    pub fn offset(&self, row: u32, column: u32) -> Point2 {
        let stagger = f64::from(row) * 0.5 - f64::from(row / 2);
        let x = (f64::from(column) + stagger) * (self.inner_radius * 2.0);
        let y = f64::from(row) * (self.outer_radius * 1.5) + self.outer_radius;
        Point2::new(x, y)
    }

    /// Returns the six corners of a hexagon centred at `offset`.
    ///
    /// Corner 0 is at the top (largest y) and the rest follow in a fixed
    /// rotation, so corner `i` and corner `(i + 1) % 6` bound one edge.
    #[must_use]
    pub fn corners(&self, offset: Point2) -> [Point2; 6] {
        let outer = self.outer_radius;
        let inner = self.inner_radius;
        [
            Point2::new(offset.x, offset.y + outer),
            Point2::new(offset.x + inner, offset.y + 0.5 * outer),
            Point2::new(offset.x + inner, offset.y - 0.5 * outer),
            Point2::new(offset.x, offset.y - outer),
            Point2::new(offset.x - inner, offset.y - 0.5 * outer),
            Point2::new(offset.x - inner, offset.y + 0.5 * outer),
        ]
    }
}
