use crate::error::{RenderError, Result};
use crate::geometry::HexGrid;

/// Largest side length the raster surface accepts (`i32::MAX / 4`).
pub const MAX_DIMENSION: u32 = 0x1FFF_FFFF;

/// Largest RGBA8 buffer a render may allocate (1 GiB).
pub const MAX_BYTES: u64 = 1 << 30;

/// Pixel dimensions of the rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Computes `ceil(count_x * cell_width) x ceil(count_y * cell_width)`.
    ///
    /// A zero count gives a zero side regardless of the cell width.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::DimensionOverflow` if either side is not finite,
    /// exceeds [`MAX_DIMENSION`], or the RGBA buffer would exceed [`MAX_BYTES`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn for_grid(grid: &HexGrid) -> Result<Self> {
        let cell_width = grid.metrics().cell_width();
        let side = |count: u32| {
            if count == 0 {
                0.0
            } else {
                (f64::from(count) * cell_width).ceil()
            }
        };
        let width = side(grid.cell_count_x());
        let height = side(grid.cell_count_y());

        let limit = f64::from(MAX_DIMENSION);
        if !width.is_finite() || !height.is_finite() || width > limit || height > limit {
            return Err(RenderError::DimensionOverflow { width, height }.into());
        }

        let size = Self {
            width: width as u32,
            height: height as u32,
        };
        match size.byte_len() {
            Some(bytes) if bytes <= MAX_BYTES => Ok(size),
            _ => Err(RenderError::DimensionOverflow { width, height }.into()),
        }
    }

    /// Bytes needed for an RGBA8 buffer of this size, or `None` on overflow.
    #[must_use]
    pub fn byte_len(&self) -> Option<u64> {
        u64::from(self.width)
            .checked_mul(u64::from(self.height))?
            .checked_mul(4)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
