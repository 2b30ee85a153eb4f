use crate::math::{midpoint, Point2, Vector2};

use super::BezierCurve;

/// A quadratic Bézier curve: start point, one control point, end point.
///
/// No constraint is placed on the points; coincident or collinear
/// configurations are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl QuadraticBezier {
    /// Creates a new quadratic curve from its three control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Creates a curve from raw `[x, y]` coordinate pairs.
    #[must_use]
    pub fn from_coords(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2]) -> Self {
        Self::new(Point2::from(p0), Point2::from(p1), Point2::from(p2))
    }

    /// Returns the chord vector from start to end.
    #[must_use]
    pub fn chord(&self) -> Vector2 {
        self.p2 - self.p0
    }
}

impl BezierCurve for QuadraticBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        let a = self.p0 + (self.p1 - self.p0) * t;
        let b = self.p1 + (self.p2 - self.p1) * t;
        a + (b - a) * t
    }

    fn split_half(&self) -> (Self, Self) {
        let p01 = midpoint(&self.p0, &self.p1);
        let p12 = midpoint(&self.p1, &self.p2);
        let p012 = midpoint(&p01, &p12);
        (
            Self::new(self.p0, p01, p012),
            Self::new(p012, p12, self.p2),
        )
    }

    fn start(&self) -> Point2 {
        self.p0
    }

    fn end(&self) -> Point2 {
        self.p2
    }
}
