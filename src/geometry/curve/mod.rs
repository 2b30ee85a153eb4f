mod cubic;
mod quadratic;

pub use cubic::CubicBezier;
pub use quadratic::QuadraticBezier;

use crate::math::Point2;

/// Trait for polynomial Bézier curves in the plane, parameterized on `[0, 1]`.
pub trait BezierCurve: Copy {
    /// Evaluates the curve at parameter `t` by de Casteljau's algorithm.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    fn evaluate(&self, t: f64) -> Point2;

    /// Splits the curve at `t = 0.5`, returning the left and right halves.
    ///
    /// The shared point `left.end() == right.start()` lies on the curve.
    fn split_half(&self) -> (Self, Self);

    /// Returns the first control point.
    fn start(&self) -> Point2;

    /// Returns the last control point.
    fn end(&self) -> Point2;
}
