pub mod intersect_2d;
pub mod line_2d;
pub mod offset_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Line classification (vertical/horizontal/oblique) and parallelism
/// checks compare within this tolerance rather than with exact equality.
pub const TOLERANCE: f64 = 1e-10;
