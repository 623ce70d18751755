use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for hex grid generation and rendering.
#[derive(Debug, Error)]
pub enum HexGridError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised while laying out a grid.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid argument: {parameter} = {value} must be finite and positive")]
    InvalidArgument { parameter: &'static str, value: f64 },

    #[error("grid overflow: {0}")]
    Overflow(String),
}

/// Errors raised while rasterizing a grid or writing the image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render style: {0}")]
    InvalidStyle(String),

    #[error("image dimensions {width} x {height} exceed the surface limit")]
    DimensionOverflow { width: f64, height: f64 },

    #[error("could not allocate a {width} x {height} surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("png encoding failed: {0}")]
    Encoding(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`HexGridError`].
pub type Result<T> = std::result::Result<T, HexGridError>;
