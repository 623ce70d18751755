use std::path::Path;

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{debug, info};

use crate::error::{RenderError, Result};
use crate::geometry::{Edge, HexGrid};
use crate::math::TOLERANCE;

use super::{ImageSize, RenderStyle};

/// Rasterizes the outline of every cell in a grid onto a transparent image.
pub struct RenderGrid<'a> {
    grid: &'a HexGrid,
    style: RenderStyle,
}

impl<'a> RenderGrid<'a> {
    /// Creates a new `RenderGrid` operation with the default style.
    #[must_use]
    pub fn new(grid: &'a HexGrid) -> Self {
        Self {
            grid,
            style: RenderStyle::default(),
        }
    }

    /// Sets a custom stroke style.
    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Draws the grid into a new pixmap.
    ///
    /// An empty grid yields a 1x1 transparent pixmap, since the surface
    /// cannot be zero-sized.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::DimensionOverflow` if the image would be too
    /// large, or `RenderError::SurfaceAllocation` if the pixmap cannot be
    /// allocated.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixmap(&self) -> Result<Pixmap> {
        let size = ImageSize::for_grid(self.grid)?;
        let (width, height) = if size.is_empty() {
            (1, 1)
        } else {
            (size.width, size.height)
        };
        let mut pixmap = Pixmap::new(width, height)
            .ok_or(RenderError::SurfaceAllocation { width, height })?;
        pixmap.fill(Color::TRANSPARENT);

        let [r, g, b, a] = self.style.color();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.style.anti_alias();

        let stroke = Stroke {
            width: self.style.stroke_width() as f32,
            ..Stroke::default()
        };

        let mut drawn = 0_usize;
        for edge in self.grid.edges() {
            if edge.length() < TOLERANCE {
                continue;
            }
            let Some(path) = edge_path(&edge) else {
                continue;
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            drawn += 1;
        }

        debug!(width, height, edges = drawn, "rendered hex grid");
        Ok(pixmap)
    }

    /// Draws the grid and encodes it as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns any error from [`RenderGrid::to_pixmap`], or
    /// `RenderError::Encoding` if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let pixmap = self.to_pixmap()?;
        let bytes = pixmap
            .encode_png()
            .map_err(|e| RenderError::Encoding(e.to_string()))?;
        Ok(bytes)
    }

    /// Draws the grid and writes it as a PNG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`RenderGrid::to_png_bytes`], or
    /// `RenderError::Io` if the file cannot be created or written.
    pub fn execute(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        std::fs::write(path, &bytes).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote hex grid image");
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn edge_path(edge: &Edge) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(edge.start.x as f32, edge.start.y as f32);
    pb.line_to(edge.end.x as f32, edge.end.y as f32);
    pb.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HexGridError;

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hexgrid-{}-{name}.png", std::process::id()))
    }

    #[test]
    fn pixmap_matches_image_size() {
        let grid = HexGrid::new(2, 2, 10.0).unwrap();
        let pixmap = RenderGrid::new(&grid).to_pixmap().unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 40));
    }

    #[test]
    fn cell_interior_stays_transparent() {
        let grid = HexGrid::new(2, 2, 10.0).unwrap();
        let pixmap = RenderGrid::new(&grid).to_pixmap().unwrap();
        // centre of cell (0, 1) is about (17.3, 10), far from any edge
        assert_eq!(pixmap.pixel(17, 10).unwrap().alpha(), 0);
    }

    #[test]
    fn edges_are_drawn_in_black() {
        let grid = HexGrid::new(2, 2, 10.0).unwrap();
        let pixmap = RenderGrid::new(&grid).to_pixmap().unwrap();
        // vertical edge shared by cells (0, 0) and (0, 1) at x ~ 8.66
        let px = pixmap.pixel(8, 10).unwrap();
        assert!(px.alpha() > 0);
        assert_eq!((px.red(), px.green(), px.blue()), (0, 0, 0));
    }

    #[test]
    fn custom_color_is_used() {
        let grid = HexGrid::new(2, 2, 10.0).unwrap();
        let style = RenderStyle::default()
            .with_color([255, 0, 0, 255])
            .with_anti_alias(false);
        let pixmap = RenderGrid::new(&grid).with_style(style).to_pixmap().unwrap();
        let px = pixmap.pixel(8, 10).unwrap();
        assert_eq!(px.alpha(), 255);
        assert_eq!((px.red(), px.green(), px.blue()), (255, 0, 0));
    }

    #[test]
    fn empty_grid_renders_minimal_image() {
        let grid = HexGrid::new(0, 0, 10.0).unwrap();
        let pixmap = RenderGrid::new(&grid).to_pixmap().unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (1, 1));
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn huge_area_fails_without_allocating() {
        let grid = HexGrid::new(1, 1, 1.0e8).unwrap();
        let err = RenderGrid::new(&grid).to_pixmap().unwrap_err();
        assert!(matches!(
            err,
            HexGridError::Render(RenderError::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn empty_row_count_renders_minimal_image() {
        let grid = HexGrid::new(5, 0, 10.0).unwrap();
        let pixmap = RenderGrid::new(&grid).to_pixmap().unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (1, 1));
    }

    #[test]
    fn png_bytes_decode_back() {
        let grid = HexGrid::new(3, 2, 5.0).unwrap();
        let bytes = RenderGrid::new(&grid).to_png_bytes().unwrap();
        let decoded = Pixmap::decode_png(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (30, 20));
    }

    #[test]
    fn execute_writes_png_file() {
        let path = temp_png("execute");
        let grid = HexGrid::new(2, 2, 10.0).unwrap();
        RenderGrid::new(&grid).execute(&path).unwrap();

        let loaded = Pixmap::load_png(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (40, 40));
        assert!(loaded.pixel(8, 10).unwrap().alpha() > 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let path = std::env::temp_dir()
            .join(format!("hexgrid-missing-{}", std::process::id()))
            .join("nested")
            .join("grid.png");
        let grid = HexGrid::new(1, 1, 4.0).unwrap();
        let err = RenderGrid::new(&grid).execute(&path).unwrap_err();
        assert!(matches!(
            err,
            HexGridError::Render(RenderError::Io { .. })
        ));
    }

    #[test]
    fn oversized_grid_is_rejected_before_allocation() {
        let grid = HexGrid::new(1, 1, 1.0e12).unwrap();
        let err = RenderGrid::new(&grid).to_pixmap().unwrap_err();
        assert!(matches!(
            err,
            HexGridError::Render(RenderError::DimensionOverflow { .. })
        ));
    }
}
