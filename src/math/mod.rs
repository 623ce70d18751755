pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Ratio of a regular hexagon's apothem to its circumradius (√3/2).
///
/// Truncated to nine decimal places; every cell of a grid uses this value.
pub const SQRT3_OVER_2: f64 = 0.866_025_404;
