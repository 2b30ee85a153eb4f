use crate::math::{midpoint, Point2, Vector2};

use super::BezierCurve;

/// A cubic Bézier curve: start point, two control points, end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicBezier {
    /// Creates a new cubic curve from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Creates a curve from raw `[x, y]` coordinate pairs.
    #[must_use]
    pub fn from_coords(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2], p3: [f64; 2]) -> Self {
        Self::new(
            Point2::from(p0),
            Point2::from(p1),
            Point2::from(p2),
            Point2::from(p3),
        )
    }

    /// Returns the chord vector from start to end.
    #[must_use]
    pub fn chord(&self) -> Vector2 {
        self.p3 - self.p0
    }
}

impl BezierCurve for CubicBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        let a = self.p0 + (self.p1 - self.p0) * t;
        let b = self.p1 + (self.p2 - self.p1) * t;
        let c = self.p2 + (self.p3 - self.p2) * t;
        let ab = a + (b - a) * t;
        let bc = b + (c - b) * t;
        ab + (bc - ab) * t
    }

    fn split_half(&self) -> (Self, Self) {
        let p01 = midpoint(&self.p0, &self.p1);
        let p12 = midpoint(&self.p1, &self.p2);
        let p23 = midpoint(&self.p2, &self.p3);
        let p012 = midpoint(&p01, &p12);
        let p123 = midpoint(&p12, &p23);
        let p0123 = midpoint(&p012, &p123);
        (
            Self::new(self.p0, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.p3),
        )
    }

    fn start(&self) -> Point2 {
        self.p0
    }

    fn end(&self) -> Point2 {
        self.p3
    }
}
