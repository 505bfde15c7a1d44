use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;

use super::line_2d::LineEquation;
use super::polygon_2d::winding_number_2d;
use super::Point2;

/// The two candidate points on `line` at `distance` from `point_on_line`,
/// one on each side.
///
/// Candidates move along the line's direction: `(x ± d, y)` for a
/// horizontal line, `(x, y ± d)` for a vertical one, and
/// `(x ± d/√(1+m²), m·x' + c)` for an oblique one. The first candidate
/// takes the `+` sign. Both are exactly `distance` from `point_on_line`
/// and collinear with it.
#[must_use]
pub fn offset_candidates(
    line: &LineEquation,
    point_on_line: &Point2,
    distance: f64,
) -> (Point2, Point2) {
    match *line {
        LineEquation::Horizontal { y } => (
            Point2::new(point_on_line.x + distance, y),
            Point2::new(point_on_line.x - distance, y),
        ),
        LineEquation::Vertical { x } => (
            Point2::new(x, point_on_line.y + distance),
            Point2::new(x, point_on_line.y - distance),
        ),
        LineEquation::Oblique { m, c } => {
            let dx = distance / (1.0 + m * m).sqrt();
            let x1 = point_on_line.x + dx;
            let x2 = point_on_line.x - dx;
            (Point2::new(x1, m * x1 + c), Point2::new(x2, m * x2 + c))
        }
    }
}

/// Picks the point on `line` at `distance` from `point_on_line` that lies
/// outside the reference polygon.
///
/// Of the two symmetric candidates, the first is tested against the
/// polygon: if it lies inside, the second is returned, otherwise the
/// first. This single containment test selects the outward side for the
/// polygon-buffering loop; for non-convex polygons whose boundary folds
/// back near the edge it can pick the wrong side locally, and callers
/// needing that case handled must disambiguate differently.
///
/// `polygon_vertices` is read in order as a closed ring. The caller must
/// supply a non-negative distance and at least 3 vertices; this unchecked
/// path does not validate (see [`try_point_at_distance`]).
#[must_use]
pub fn point_at_distance(
    line: &LineEquation,
    point_on_line: &Point2,
    distance: f64,
    polygon_vertices: &[Point2],
) -> Point2 {
    let (first, second) = offset_candidates(line, point_on_line, distance);
    if winding_number_2d(first.x, first.y, polygon_vertices) != 0 {
        second
    } else {
        first
    }
}

/// Validating variant of [`point_at_distance`], building the containment
/// oracle through [`Polygon::from_points`].
///
/// # Errors
///
/// Returns `GeometryError::DegenerateInput` for a negative distance or a
/// `point_on_line` that does not lie on `line`, and
/// `PolygonError::TooFewVertices` for a degenerate polygon.
pub fn try_point_at_distance(
    line: &LineEquation,
    point_on_line: &Point2,
    distance: f64,
    polygon_vertices: &[Point2],
) -> Result<Point2> {
    if distance < 0.0 {
        return Err(GeometryError::DegenerateInput(format!("negative distance {distance}")).into());
    }
    if !line.contains_point(point_on_line) {
        return Err(GeometryError::DegenerateInput(format!(
            "point ({}, {}) is not on line {line}",
            point_on_line.x, point_on_line.y
        ))
        .into());
    }
    let polygon = Polygon::from_points(polygon_vertices)?;
    let (first, second) = offset_candidates(line, point_on_line, distance);
    if polygon.contains(&first) {
        Ok(second)
    } else {
        Ok(first)
    }
}
