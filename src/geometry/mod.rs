pub mod curve;

pub use curve::{BezierCurve, CubicBezier, QuadraticBezier};
