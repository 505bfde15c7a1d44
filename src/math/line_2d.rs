use std::fmt;

use crate::error::{GeometryError, Result};

use super::{Point2, TOLERANCE};

/// Generalized line equation `a·y = m·x + c`, tolerant of vertical lines.
///
/// Rather than encoding the orientation as a flag next to a sentinel slope,
/// the three classifications are distinct variants, so every instance is
/// exactly one of vertical, horizontal, or oblique by construction. All
/// operations branch on this classification instead of relying on
/// floating-point division producing infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// Vertical line `x = x`.
    Vertical { x: f64 },
    /// Horizontal line `y = y`.
    Horizontal { y: f64 },
    /// Line `y = m·x + c` with a nonzero, finite slope.
    Oblique { m: f64, c: f64 },
}

impl LineEquation {
    /// Builds the line through two distinct points.
    ///
    /// Classification is a three-way split evaluated in order: near-equal
    /// x coordinates give a vertical line, near-equal y coordinates a
    /// horizontal one, anything else an oblique line with
    /// `m = Δy / Δx` and `c = y1 - m·x1`.
    ///
    /// Callers must guarantee `p1 != p2`; coincident points fall into the
    /// vertical branch and yield a meaningless but finite result. Use
    /// [`LineEquation::try_through_points`] where that contract cannot be
    /// assumed.
    #[must_use]
    pub fn through_points(p1: &Point2, p2: &Point2) -> Self {
        if (p2.x - p1.x).abs() < TOLERANCE {
            Self::Vertical { x: p1.x }
        } else if (p2.y - p1.y).abs() < TOLERANCE {
            Self::Horizontal { y: p1.y }
        } else {
            let m = (p2.y - p1.y) / (p2.x - p1.x);
            let c = p1.y - m * p1.x;
            Self::Oblique { m, c }
        }
    }

    /// Validating variant of [`LineEquation::through_points`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateInput` if the points coincide
    /// within tolerance.
    pub fn try_through_points(p1: &Point2, p2: &Point2) -> Result<Self> {
        if (p2.x - p1.x).abs() < TOLERANCE && (p2.y - p1.y).abs() < TOLERANCE {
            return Err(GeometryError::DegenerateInput(format!(
                "coincident points ({}, {}) and ({}, {})",
                p1.x, p1.y, p2.x, p2.y
            ))
            .into());
        }
        Ok(Self::through_points(p1, p2))
    }

    /// Returns the line perpendicular to `self` passing through `point`.
    ///
    /// The slope-reciprocal rule `m1·m2 = -1` is undefined for horizontal
    /// and vertical inputs, so those flip classification explicitly:
    /// horizontal becomes vertical and vice versa.
    #[must_use]
    pub fn perpendicular_through(&self, point: &Point2) -> Self {
        match *self {
            Self::Horizontal { .. } => Self::Vertical { x: point.x },
            Self::Vertical { .. } => Self::Horizontal { y: point.y },
            Self::Oblique { m, .. } => {
                let m_perp = -1.0 / m;
                Self::Oblique {
                    m: m_perp,
                    c: point.y - m_perp * point.x,
                }
            }
        }
    }

    /// Returns the line parallel to `self` passing through `point`.
    ///
    /// Classification is always preserved: vertical stays vertical,
    /// horizontal stays horizontal, oblique keeps its slope.
    #[must_use]
    pub fn parallel_through(&self, point: &Point2) -> Self {
        match *self {
            Self::Horizontal { .. } => Self::Horizontal { y: point.y },
            Self::Vertical { .. } => Self::Vertical { x: point.x },
            Self::Oblique { m, .. } => Self::Oblique {
                m,
                c: point.y - m * point.x,
            },
        }
    }

    /// Returns `true` if the line is vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical { .. })
    }

    /// Returns `true` if the line is horizontal.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal { .. })
    }

    /// Returns the slope, or `None` for a vertical line.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            Self::Vertical { .. } => None,
            Self::Horizontal { .. } => Some(0.0),
            Self::Oblique { m, .. } => Some(m),
        }
    }

    /// Evaluates `y` at the given `x`, or `None` for a vertical line.
    #[must_use]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Self::Vertical { .. } => None,
            Self::Horizontal { y } => Some(y),
            Self::Oblique { m, c } => Some(m * x + c),
        }
    }

    /// Returns `true` if `point` lies on the line within tolerance.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        match *self {
            Self::Vertical { x } => (point.x - x).abs() < TOLERANCE,
            Self::Horizontal { y } => (point.y - y).abs() < TOLERANCE,
            Self::Oblique { m, c } => (m * point.x + c - point.y).abs() < TOLERANCE,
        }
    }

    /// Returns `true` if the two lines share classification and slope
    /// within tolerance, meaning they have no finite intersection point
    /// (coincident lines included).
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Vertical { .. }, Self::Vertical { .. })
            | (Self::Horizontal { .. }, Self::Horizontal { .. }) => true,
            (Self::Oblique { m: m1, .. }, Self::Oblique { m: m2, .. }) => {
                (m1 - m2).abs() < TOLERANCE
            }
            _ => false,
        }
    }
}

impl fmt::Display for LineEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Vertical { x } => write!(f, "x = {x}"),
            Self::Horizontal { y } => write!(f, "y = {y}"),
            Self::Oblique { m, c } => write!(f, "y = {m}x + {c}"),
        }
    }
}
