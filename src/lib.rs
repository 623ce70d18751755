pub mod error;
pub mod geometry;
pub mod math;
pub mod render;

pub use error::{HexGridError, Result};
pub use geometry::{HexCell, HexGrid, HexMetrics};
pub use render::{ImageSize, RenderGrid, RenderStyle};
