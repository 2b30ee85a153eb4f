#![allow(clippy::unwrap_used)]

use adaptive_bezier::geometry::{CubicBezier, QuadraticBezier};
use adaptive_bezier::math::Point2;
use adaptive_bezier::tessellation::{CubicFlattener, FlattenParams, QuadraticFlattener};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point2> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point2::new(x, y))
}

fn quadratic() -> impl Strategy<Value = QuadraticBezier> {
    (point(), point(), point()).prop_map(|(a, b, c)| QuadraticBezier::new(a, b, c))
}

fn cubic() -> impl Strategy<Value = CubicBezier> {
    (point(), point(), point(), point()).prop_map(|(a, b, c, d)| CubicBezier::new(a, b, c, d))
}

fn params(max_recursion: u32) -> impl Strategy<Value = FlattenParams> {
    (0..=max_recursion, 0.01..10.0f64, 0.0..1.0f64, 0.0..3.0f64).prop_map(
        |(recursion, path_epsilon, angle_tolerance, cusp_limit)| {
            FlattenParams::builder()
                .recursion_limit(recursion)
                .path_epsilon(path_epsilon)
                .angle_tolerance(angle_tolerance)
                .cusp_limit(cusp_limit)
                .build()
                .unwrap()
        },
    )
}

fn with_path_epsilon(path_epsilon: f64) -> FlattenParams {
    FlattenParams::builder()
        .path_epsilon(path_epsilon)
        .build()
        .unwrap()
}

/// Every terminated branch emits at most two points, and only branches at
/// depth `<= limit` can terminate.
fn max_points(recursion_limit: u32) -> usize {
    2 + (1usize << (recursion_limit + 1))
}

proptest! {
    #[test]
    fn quadratic_endpoints_are_exact(curve in quadratic(), params in params(12), scale in 0.1..10.0f64) {
        let out = QuadraticFlattener::new(params).flatten(&curve, scale);
        prop_assert_eq!(out.first(), Some(&curve.p0));
        prop_assert_eq!(out.last(), Some(&curve.p2));
    }

    #[test]
    fn cubic_endpoints_are_exact(curve in cubic(), params in params(12), scale in 0.1..10.0f64) {
        let out = CubicFlattener::new(params).flatten(&curve, scale);
        prop_assert_eq!(out.first(), Some(&curve.p0));
        prop_assert_eq!(out.last(), Some(&curve.p3));
    }

    #[test]
    fn recursion_limit_bounds_output(q in quadratic(), c in cubic(), params in params(6)) {
        let bound = max_points(params.recursion_limit());
        prop_assert!(QuadraticFlattener::new(params).flatten(&q, 1.0).len() <= bound);
        prop_assert!(CubicFlattener::new(params).flatten(&c, 1.0).len() <= bound);
    }

    #[test]
    fn tighter_tolerance_never_emits_fewer_points(
        q in quadratic(),
        c in cubic(),
        path_epsilon in 0.1..10.0f64,
        factor in 1.0..8.0f64,
    ) {
        let loose = with_path_epsilon(path_epsilon);
        let tight = with_path_epsilon(path_epsilon / factor);

        let a = QuadraticFlattener::new(loose).flatten(&q, 1.0).len();
        let b = QuadraticFlattener::new(tight).flatten(&q, 1.0).len();
        prop_assert!(b >= a, "quadratic: {} points loose, {} tight", a, b);

        let a = CubicFlattener::new(loose).flatten(&c, 1.0).len();
        let b = CubicFlattener::new(tight).flatten(&c, 1.0).len();
        prop_assert!(b >= a, "cubic: {} points loose, {} tight", a, b);
    }

    #[test]
    fn scale_matches_divided_path_epsilon(
        q in quadratic(),
        c in cubic(),
        path_epsilon in 0.1..10.0f64,
        scale in 0.5..8.0f64,
    ) {
        let base = with_path_epsilon(path_epsilon);
        let divided = with_path_epsilon(path_epsilon / scale);

        prop_assert_eq!(
            QuadraticFlattener::new(base).flatten(&q, scale),
            QuadraticFlattener::new(divided).flatten(&q, 1.0)
        );
        prop_assert_eq!(
            CubicFlattener::new(base).flatten(&c, scale),
            CubicFlattener::new(divided).flatten(&c, 1.0)
        );
    }

    #[test]
    fn collinear_input_stays_on_the_line(
        x0 in -1000.0..1000.0f64,
        steps in prop::collection::vec(0.0..100.0f64, 3),
        y in -100.0..100.0f64,
    ) {
        let x1 = x0 + steps[0];
        let x2 = x1 + steps[1];
        let x3 = x2 + steps[2];
        let q = QuadraticBezier::from_coords([x0, y], [x1, y], [x2, y]);
        let c = CubicBezier::from_coords([x0, y], [x1, y], [x2, y], [x3, y]);

        for point in &QuadraticFlattener::default().flatten(&q, 1.0) {
            prop_assert_eq!(point.y, y);
        }
        for point in &CubicFlattener::default().flatten(&c, 1.0) {
            prop_assert_eq!(point.y, y);
        }
    }
}
