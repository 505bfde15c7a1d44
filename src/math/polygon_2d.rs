use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Returns `0.0`
/// for fewer than 3 vertices.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the winding number of `(px, py)` with respect to a closed
/// polygon. Nonzero means the point is inside.
#[must_use]
pub fn winding_number_2d(px: f64, py: f64, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let v0 = verts[i];
        let v1 = verts[(i + 1) % n];

        if v0.y <= py {
            if v1.y > py && cross_2d(v1.x - v0.x, v1.y - v0.y, px - v0.x, py - v0.y) > 0.0 {
                winding += 1;
            }
        } else if v1.y <= py && cross_2d(v1.x - v0.x, v1.y - v0.y, px - v0.x, py - v0.y) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}
