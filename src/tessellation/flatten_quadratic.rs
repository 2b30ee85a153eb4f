use tracing::{debug, trace};

use crate::geometry::{BezierCurve, QuadraticBezier};
use crate::math::{cross_2d, midpoint, turn_angle, Point2};

use super::{FlattenParams, Polyline};

/// Flattens quadratic Bézier curves by adaptive de Casteljau bisection.
///
/// Holds only its parameters, so one instance can be shared across threads
/// and reused for any number of curves.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticFlattener {
    params: FlattenParams,
}

impl QuadraticFlattener {
    /// Creates a new flattener with the given parameters.
    #[must_use]
    pub fn new(params: FlattenParams) -> Self {
        Self { params }
    }

    /// Returns the flattening parameters.
    #[must_use]
    pub fn params(&self) -> &FlattenParams {
        &self.params
    }

    /// Flattens `curve` into a new polyline.
    ///
    /// `scale` is the magnification the output will be drawn at; pass `1.0`
    /// for curve-space output.
    #[must_use]
    pub fn flatten(&self, curve: &QuadraticBezier, scale: f64) -> Polyline {
        let mut polyline = Polyline::new();
        self.flatten_into(curve, scale, &mut polyline);
        polyline
    }

    /// Appends the flattened `curve` to `polyline`.
    ///
    /// The appended run starts with `curve.p0` and ends with `curve.p2`.
    pub fn flatten_into(&self, curve: &QuadraticBezier, scale: f64, polyline: &mut Polyline) {
        let distance_tolerance_sq = self.params.distance_tolerance_sq(scale);
        let before = polyline.len();

        polyline.push(curve.start());
        subdivide(&self.params, curve, distance_tolerance_sq, 0, &mut polyline.points);
        polyline.push(curve.end());

        debug!(points = polyline.len() - before, scale, "flattened quadratic curve");
    }
}

fn subdivide(
    params: &FlattenParams,
    curve: &QuadraticBezier,
    distance_tolerance_sq: f64,
    depth: u32,
    points: &mut Vec<Point2>,
) {
    if depth > params.recursion_limit() {
        trace!(depth, "quadratic subdivision hit the recursion limit");
        return;
    }

    let (left, right) = curve.split_half();
    let mid = left.end();

    if is_flat(params, curve, &mid, distance_tolerance_sq) {
        points.push(mid);
        return;
    }

    subdivide(params, &left, distance_tolerance_sq, depth + 1, points);
    subdivide(params, &right, distance_tolerance_sq, depth + 1, points);
}

/// Decides whether `curve` may be replaced by its bisection point `mid`.
fn is_flat(
    params: &FlattenParams,
    curve: &QuadraticBezier,
    mid: &Point2,
    distance_tolerance_sq: f64,
) -> bool {
    let QuadraticBezier { p0, p1, p2 } = *curve;
    let chord = curve.chord();
    let d = cross_2d(&(p1 - p2), &chord).abs();

    if d > params.epsilon() {
        if d * d > distance_tolerance_sq * chord.norm_squared() {
            return false;
        }
        if !params.angle_refinement_enabled() {
            return true;
        }
        turn_angle(&p0, &p1, &p2) < params.angle_tolerance()
    } else {
        // Collinear: measure how far the bisection point sits from the chord midpoint.
        (mid - midpoint(&p0, &p2)).norm_squared() <= distance_tolerance_sq
    }
}
