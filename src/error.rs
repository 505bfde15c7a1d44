use thiserror::Error;

/// Top-level error type for the polybuf engine.
#[derive(Debug, Error)]
pub enum PolybufError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// Errors related to geometric computations.
///
/// The unchecked operations in [`crate::math`] never produce these; only
/// their `try_`-prefixed validating counterparts do.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("lines are parallel; no finite intersection")]
    ParallelLines,
}

/// Errors related to polygon construction.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// Convenience type alias for results using [`PolybufError`].
pub type Result<T> = std::result::Result<T, PolybufError>;
