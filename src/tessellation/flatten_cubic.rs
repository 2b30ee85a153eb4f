use tracing::{debug, trace};

use crate::geometry::{BezierCurve, CubicBezier};
use crate::math::{cross_2d, midpoint, turn_angle, Point2};

use super::{FlattenParams, Polyline};

/// Flattens cubic Bézier curves by adaptive de Casteljau bisection.
///
/// Like [`QuadraticFlattener`](super::QuadraticFlattener) but with separate
/// handling for a single off-chord control point and optional cusp detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicFlattener {
    params: FlattenParams,
}

impl CubicFlattener {
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
    pub fn flatten(&self, curve: &CubicBezier, scale: f64) -> Polyline {
        let mut polyline = Polyline::new();
        self.flatten_into(curve, scale, &mut polyline);
        polyline
    }

    /// Appends the flattened `curve` to `polyline`.
    ///
    /// The appended run starts with `curve.p0` and ends with `curve.p3`.
    pub fn flatten_into(&self, curve: &CubicBezier, scale: f64, polyline: &mut Polyline) {
        let distance_tolerance_sq = self.params.distance_tolerance_sq(scale);
        let before = polyline.len();

        polyline.push(curve.start());
        subdivide(&self.params, curve, distance_tolerance_sq, 0, &mut polyline.points);
        polyline.push(curve.end());

        debug!(points = polyline.len() - before, scale, "flattened cubic curve");
    }
}

fn subdivide(
    params: &FlattenParams,
    curve: &CubicBezier,
    distance_tolerance_sq: f64,
    depth: u32,
    points: &mut Vec<Point2>,
) {
    if depth > params.recursion_limit() {
        trace!(depth, "cubic subdivision hit the recursion limit");
        return;
    }

    let (left, right) = curve.split_half();

    // A whole cubic is never replaced by a single segment, so the root always splits.
    if depth > 0 && try_finish(params, curve, &left.end(), distance_tolerance_sq, points) {
        return;
    }

    subdivide(params, &left, distance_tolerance_sq, depth + 1, points);
    subdivide(params, &right, distance_tolerance_sq, depth + 1, points);
}

/// Emits the vertices replacing `curve` and returns `true` if it is flat enough,
/// otherwise leaves `points` untouched and returns `false`.
fn try_finish(
    params: &FlattenParams,
    curve: &CubicBezier,
    mid: &Point2,
    distance_tolerance_sq: f64,
    points: &mut Vec<Point2>,
) -> bool {
    let CubicBezier { p0, p1, p2, p3 } = *curve;
    let chord = curve.chord();
    let chord_len_sq = chord.norm_squared();

    let d1 = cross_2d(&(p1 - p3), &chord).abs();
    let d2 = cross_2d(&(p2 - p3), &chord).abs();
    let eps = params.epsilon();

    match (d1 > eps, d2 > eps) {
        (true, true) => {
            if (d1 + d2) * (d1 + d2) > distance_tolerance_sq * chord_len_sq {
                return false;
            }
            if !params.angle_refinement_enabled() {
                points.push(*mid);
                return true;
            }

            let da1 = turn_angle(&p0, &p1, &p2);
            let da2 = turn_angle(&p1, &p2, &p3);
            if da1 + da2 < params.angle_tolerance() {
                points.push(*mid);
                return true;
            }

            if params.cusp_detection_enabled() {
                // The first control point wins when both turns exceed the limit.
                if da1 > params.cusp_limit() {
                    points.push(p1);
                    return true;
                }
                if da2 > params.cusp_limit() {
                    points.push(p2);
                    return true;
                }
            }
            false
        }
        // p0, p2, p3 collinear: the curve is a corner at p1.
        (true, false) => finish_corner(
            params,
            curve,
            mid,
            Corner::First,
            d1,
            distance_tolerance_sq,
            points,
        ),
        // p0, p1, p3 collinear: the curve is a corner at p2.
        (false, true) => finish_corner(
            params,
            curve,
            mid,
            Corner::Second,
            d2,
            distance_tolerance_sq,
            points,
        ),
        (false, false) => {
            if (mid - midpoint(&p0, &p3)).norm_squared() <= distance_tolerance_sq {
                points.push(*mid);
                return true;
            }
            false
        }
    }
}

/// The single control point lying off the chord.
#[derive(Debug, Clone, Copy)]
enum Corner {
    First,
    Second,
}

/// Finishes a cubic whose only off-chord control point is `corner`, at
/// distance indicator `d`.
fn finish_corner(
    params: &FlattenParams,
    curve: &CubicBezier,
    mid: &Point2,
    corner: Corner,
    d: f64,
    distance_tolerance_sq: f64,
    points: &mut Vec<Point2>,
) -> bool {
    let CubicBezier { p0, p1, p2, p3 } = *curve;

    if d * d > distance_tolerance_sq * curve.chord().norm_squared() {
        return false;
    }
    if !params.angle_refinement_enabled() {
        points.push(*mid);
        return true;
    }

    let (da, vertex) = match corner {
        Corner::First => (turn_angle(&p0, &p1, &p2), p1),
        Corner::Second => (turn_angle(&p1, &p2, &p3), p2),
    };
    if da < params.angle_tolerance() {
        points.push(p1);
        points.push(p2);
        return true;
    }

    if params.cusp_detection_enabled() && da > params.cusp_limit() {
        points.push(vertex);
        return true;
    }
    false
}
