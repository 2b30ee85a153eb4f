//! 2D vector helpers shared by the curve flatteners.

use std::f64::consts::PI;

use super::{Point2, Vector2};

/// Returns the z component of the cross product `a × b`.
///
/// Its magnitude is twice the area of the triangle spanned by `a` and `b`,
/// which makes it a cheap off-line distance indicator once divided by the
/// base length.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the midpoint of `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Returns the turning angle at `b` when walking `a → b → c`, in `[0, π]`.
///
/// The angle is the absolute difference of the two `atan2` headings, folded
/// back into `[0, π]` when the difference wraps past `π`.
#[must_use]
pub fn turn_angle(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let heading_in = (b.y - a.y).atan2(b.x - a.x);
    let heading_out = (c.y - b.y).atan2(c.x - b.x);
    let da = (heading_out - heading_in).abs();
    if da >= PI {
        2.0 * PI - da
    } else {
        da
    }
}
