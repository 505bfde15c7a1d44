use crate::error::{GeometryError, Result};

use super::line_2d::LineEquation;
use super::Point2;

/// Sentinel point signaling "the lines do not intersect at a finite point".
///
/// Returned by [`line_line_intersect_2d`] for parallel (including
/// coincident) lines; callers on the unchecked path must test for it with
/// [`is_parallel_sentinel`] before trusting a result.
#[must_use]
pub fn parallel_sentinel() -> Point2 {
    Point2::new(f64::INFINITY, f64::NEG_INFINITY)
}

/// Returns `true` if `point` is the parallel-lines sentinel.
#[must_use]
pub fn is_parallel_sentinel(point: &Point2) -> bool {
    point.x == f64::INFINITY && point.y == f64::NEG_INFINITY
}

/// Intersects two classified lines.
///
/// Parallel lines (same classification with equal slope within tolerance;
/// two verticals and two horizontals always count) yield the sentinel from
/// [`parallel_sentinel`] rather than an error. Otherwise the intersection
/// is exact per classification: a vertical line pins `x`, a horizontal
/// line pins `y`, and the oblique-oblique case solves
/// `x = (c2 - c1) / (m1 - m2)`.
///
/// Symmetric: swapping the arguments returns the same point.
#[must_use]
pub fn line_line_intersect_2d(line1: &LineEquation, line2: &LineEquation) -> Point2 {
    use LineEquation::{Horizontal, Oblique, Vertical};

    if line1.is_parallel_to(line2) {
        return parallel_sentinel();
    }

    match (*line1, *line2) {
        (Vertical { x }, Horizontal { y }) | (Horizontal { y }, Vertical { x }) => {
            Point2::new(x, y)
        }
        (Vertical { x }, Oblique { m, c }) | (Oblique { m, c }, Vertical { x }) => {
            Point2::new(x, m * x + c)
        }
        (Horizontal { y }, Oblique { m, c }) | (Oblique { m, c }, Horizontal { y }) => {
            Point2::new((y - c) / m, y)
        }
        (Oblique { m: m1, c: c1 }, Oblique { m: m2, c: c2 }) => {
            let x = (c2 - c1) / (m1 - m2);
            Point2::new(x, m1 * x + c1)
        }
        // Same-classification pairs are parallel and already returned.
        _ => parallel_sentinel(),
    }
}

/// Validating variant of [`line_line_intersect_2d`].
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` instead of the sentinel point.
pub fn try_line_line_intersect_2d(line1: &LineEquation, line2: &LineEquation) -> Result<Point2> {
    if line1.is_parallel_to(line2) {
        return Err(GeometryError::ParallelLines.into());
    }
    Ok(line_line_intersect_2d(line1, line2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn vertical_horizontal_cross() {
        let v = LineEquation::Vertical { x: 2.0 };
        let h = LineEquation::Horizontal { y: -3.0 };
        let pt = line_line_intersect_2d(&v, &h);
        assert!((pt.x - 2.0).abs() < TOLERANCE);
        assert!((pt.y + 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn vertical_oblique_cross() {
        let v = LineEquation::Vertical { x: 1.0 };
        let o = LineEquation::Oblique { m: 2.0, c: 1.0 };
        let pt = line_line_intersect_2d(&v, &o);
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn horizontal_oblique_cross() {
        let h = LineEquation::Horizontal { y: 4.0 };
        let o = LineEquation::Oblique { m: 2.0, c: 0.0 };
        let pt = line_line_intersect_2d(&h, &o);
        assert!((pt.x - 2.0).abs() < TOLERANCE);
        assert!((pt.y - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn oblique_oblique_cross() {
        // y = x and y = -x + 2 meet at (1, 1).
        let a = LineEquation::Oblique { m: 1.0, c: 0.0 };
        let b = LineEquation::Oblique { m: -1.0, c: 2.0 };
        let pt = line_line_intersect_2d(&a, &b);
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn intersection_is_symmetric() {
        let pairs = [
            (
                LineEquation::Oblique { m: 0.5, c: 1.0 },
                LineEquation::Oblique { m: -2.0, c: 4.0 },
            ),
            (
                LineEquation::Vertical { x: 3.0 },
                LineEquation::Oblique { m: 1.0, c: 0.0 },
            ),
            (
                LineEquation::Horizontal { y: -1.0 },
                LineEquation::Vertical { x: 0.5 },
            ),
        ];
        for (a, b) in pairs {
            let ab = line_line_intersect_2d(&a, &b);
            let ba = line_line_intersect_2d(&b, &a);
            assert!((ab.x - ba.x).abs() < TOLERANCE, "{a} vs {b}");
            assert!((ab.y - ba.y).abs() < TOLERANCE, "{a} vs {b}");
        }
    }

    #[test]
    fn parallel_lines_yield_sentinel() {
        let a = LineEquation::Oblique { m: 2.0, c: 0.0 };
        let b = LineEquation::Oblique { m: 2.0, c: 5.0 };
        assert!(is_parallel_sentinel(&line_line_intersect_2d(&a, &b)));
        // A line is parallel to itself.
        assert!(is_parallel_sentinel(&line_line_intersect_2d(&a, &a)));
    }

    #[test]
    fn two_verticals_are_parallel() {
        let a = LineEquation::Vertical { x: 0.0 };
        let b = LineEquation::Vertical { x: 5.0 };
        assert!(is_parallel_sentinel(&line_line_intersect_2d(&a, &b)));
    }

    #[test]
    fn two_horizontals_are_parallel() {
        let a = LineEquation::Horizontal { y: 0.0 };
        let b = LineEquation::Horizontal { y: 1.0 };
        assert!(is_parallel_sentinel(&line_line_intersect_2d(&a, &b)));
    }

    #[test]
    fn near_parallel_slopes() {
        let a = LineEquation::Oblique { m: 1.0, c: 0.0 };
        // Below tolerance: treated as parallel.
        let b = LineEquation::Oblique { m: 1.0 + 1e-12, c: 1.0 };
        assert!(is_parallel_sentinel(&line_line_intersect_2d(&a, &b)));
        // Above tolerance: finite (if distant) intersection.
        let c = LineEquation::Oblique { m: 1.0 + 1e-6, c: 1.0 };
        let pt = line_line_intersect_2d(&a, &c);
        assert!(pt.x.is_finite() && pt.y.is_finite());
    }

    #[test]
    fn try_variant_surfaces_parallel_error() {
        let a = LineEquation::Vertical { x: 0.0 };
        let b = LineEquation::Vertical { x: 1.0 };
        assert!(try_line_line_intersect_2d(&a, &b).is_err());

        let h = LineEquation::Horizontal { y: 2.0 };
        let pt = try_line_line_intersect_2d(&a, &h).unwrap();
        assert!((pt.x).abs() < TOLERANCE);
        assert!((pt.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn perpendicular_round_trip() {
        // Line through two points, perpendicular at one of them, then
        // intersecting the two must give that point back.
        let a = p(1.0, 2.0);
        let b = p(4.0, 7.0);
        let line = LineEquation::through_points(&a, &b);
        let perp = line.perpendicular_through(&a);
        let pt = line_line_intersect_2d(&line, &perp);
        assert!((pt.x - a.x).abs() < 1e-9, "x = {}", pt.x);
        assert!((pt.y - a.y).abs() < 1e-9, "y = {}", pt.y);
    }

    #[test]
    fn round_trip_degenerate_classifications() {
        let a = p(2.0, 0.0);
        let b = p(2.0, 6.0);
        let line = LineEquation::through_points(&a, &b);
        let perp = line.perpendicular_through(&a);
        let pt = line_line_intersect_2d(&line, &perp);
        assert!((pt.x - 2.0).abs() < TOLERANCE);
        assert!((pt.y).abs() < TOLERANCE);
    }
}
