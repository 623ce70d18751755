//! Wireframe rasterization of a [`HexGrid`](crate::geometry::HexGrid).
//!
//! Pixel storage, anti-aliased stroking and PNG encoding are delegated to
//! `tiny-skia`; this module only decides the image size and which segments
//! to draw.

mod render_grid;
mod size;
mod style;

pub use render_grid::RenderGrid;
pub use size::{ImageSize, MAX_BYTES, MAX_DIMENSION};
pub use style::RenderStyle;
