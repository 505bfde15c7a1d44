use crate::error::{PolygonError, Result};
use crate::math::polygon_2d::{signed_area_2d, winding_number_2d};
use crate::math::Point2;

/// An immutable simple closed polygon, the containment oracle for the
/// offset-side disambiguation in [`crate::math::offset_2d`].
///
/// Vertices are stored in caller order; the last vertex implicitly
/// connects back to the first. Both windings are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon directly from a vertex slice, order preserved.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::TooFewVertices` for fewer than 3 vertices.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        if points.len() < 3 {
            return Err(PolygonError::TooFewVertices(points.len()).into());
        }
        Ok(Self {
            vertices: points.to_vec(),
        })
    }

    /// Returns an empty accumulating builder.
    #[must_use]
    pub fn builder() -> PolygonBuilder {
        PolygonBuilder {
            vertices: Vec::new(),
        }
    }

    /// Returns the vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns `true` if `point` lies inside the polygon.
    ///
    /// Uses the nonzero winding number, so the result is independent of
    /// vertex winding. Points exactly on an edge follow the crossing
    /// rules of the winding test and are not given a dedicated boundary
    /// classification.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        winding_number_2d(point.x, point.y, &self.vertices) != 0
    }

    /// Returns the signed area: positive for counter-clockwise vertex
    /// order, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }
}

/// Accumulating builder that appends vertices in order and finalizes into
/// an immutable [`Polygon`].
#[derive(Debug, Default)]
pub struct PolygonBuilder {
    vertices: Vec<Point2>,
}

impl PolygonBuilder {
    /// Appends a vertex.
    #[must_use]
    pub fn add_vertex(mut self, point: Point2) -> Self {
        self.vertices.push(point);
        self
    }

    /// Finalizes the polygon.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::TooFewVertices` for fewer than 3 vertices.
    pub fn build(self) -> Result<Polygon> {
        if self.vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(self.vertices.len()).into());
        }
        Ok(Polygon {
            vertices: self.vertices,
        })
    }
}
