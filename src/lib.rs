//! Adaptive flattening of quadratic and cubic Bézier curves into polylines.
//!
//! Curves are bisected recursively (de Casteljau at `t = 0.5`) until each
//! piece is flat enough for the configured distance and angle tolerances,
//! so flat stretches produce few points and tight bends produce many.
//!
//! ```
//! use adaptive_bezier::geometry::QuadraticBezier;
//! use adaptive_bezier::math::Point2;
//! use adaptive_bezier::tessellation::QuadraticFlattener;
//!
//! let curve = QuadraticBezier::new(
//!     Point2::new(-300.0, 0.0),
//!     Point2::new(0.0, 500.0),
//!     Point2::new(300.0, 200.0),
//! );
//! let polyline = QuadraticFlattener::default().flatten(&curve, 1.0);
//! assert_eq!(polyline.first(), Some(&curve.p0));
//! assert_eq!(polyline.last(), Some(&curve.p2));
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{FlattenError, ParameterError, Result};
