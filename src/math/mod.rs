pub mod distance_2d;
pub mod vector_2d;

pub use distance_2d::point_to_segment_dist;
pub use vector_2d::{cross_2d, midpoint, turn_angle};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default maximum subdivision depth.
pub const DEFAULT_RECURSION_LIMIT: u32 = 32;

/// Default threshold below which a cross product counts as zero
/// (single-precision machine epsilon).
pub const DEFAULT_EPSILON: f64 = 1.192_092_9e-7;

/// Default flatness tolerance in curve-space distance units.
pub const DEFAULT_PATH_EPSILON: f64 = 1.0;

/// Default angle tolerance below which angle refinement is skipped.
pub const DEFAULT_ANGLE_EPSILON: f64 = 0.01;

/// Default maximum turning angle in radians (`0` disables angle refinement).
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 0.0;

/// Default cusp angle limit in radians (`0` disables cusp detection).
pub const DEFAULT_CUSP_LIMIT: f64 = 0.0;
