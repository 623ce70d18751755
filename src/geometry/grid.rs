use tracing::debug;

use crate::error::{GeometryError, Result};

use super::{Aabb, Edge, HexCell, HexMetrics};

/// A rectangular tiling of hexagonal cells stored in row-major order.
///
/// Cells are built once in [`HexGrid::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HexGrid {
    cell_count_x: u32,
    cell_count_y: u32,
    metrics: HexMetrics,
    cells: Vec<HexCell>,
}

impl HexGrid {
    /// Lays out `cell_count_x` columns by `cell_count_y` rows of hexagons.
    ///
    /// A zero count on either axis produces an empty grid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `outer_radius` is not
    /// finite and positive, or `GeometryError::Overflow` if the cells do
    /// not fit in addressable memory.
    pub fn new(cell_count_x: u32, cell_count_y: u32, outer_radius: f64) -> Result<Self> {
        let metrics = HexMetrics::new(outer_radius)?;
        let len = usize::try_from(cell_count_x)
            .ok()
            .zip(usize::try_from(cell_count_y).ok())
            .and_then(|(x, y)| x.checked_mul(y))
            .ok_or_else(|| {
                GeometryError::Overflow(format!(
                    "{cell_count_x} x {cell_count_y} cells exceed addressable size"
                ))
            })?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|e| {
            GeometryError::Overflow(format!(
                "{cell_count_x} x {cell_count_y} cells cannot be allocated: {e}"
            ))
        })?;
        for row in 0..cell_count_y {
            for column in 0..cell_count_x {
                cells.push(HexCell::new(&metrics, row, column));
            }
        }

        debug!(
            cell_count_x,
            cell_count_y,
            outer_radius,
            cells = cells.len(),
            "built hex grid"
        );

        Ok(Self {
            cell_count_x,
            cell_count_y,
            metrics,
            cells,
        })
    }

    #[must_use]
    pub fn cell_count_x(&self) -> u32 {
        self.cell_count_x
    }

    #[must_use]
    pub fn cell_count_y(&self) -> u32 {
        self.cell_count_y
    }

    /// Returns the layout constants shared by every cell.
    #[must_use]
    pub fn metrics(&self) -> &HexMetrics {
        &self.metrics
    }

    /// Returns all cells: every column of row 0, then row 1, and so on.
    #[must_use]
    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Looks up the cell at `(row, column)`, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, row: u32, column: u32) -> Option<&HexCell> {
        if row >= self.cell_count_y || column >= self.cell_count_x {
            return None;
        }
        let index = usize::try_from(row)
            .ok()?
            .checked_mul(usize::try_from(self.cell_count_x).ok()?)?
            .checked_add(usize::try_from(column).ok()?)?;
        self.cells.get(index)
    }

    /// Iterates the outline edges of every cell in row-major order.
    ///
    /// Edges shared by neighbouring cells appear once per cell.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.cells.iter().flat_map(HexCell::edges)
    }

    /// Bounding box of all corners, or `None` for an empty grid.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.cells.iter().flat_map(HexCell::corners))
    }
}
