mod flatten_cubic;
mod flatten_params;
mod flatten_quadratic;
mod polyline;

pub use flatten_cubic::CubicFlattener;
pub use flatten_params::{FlattenParams, FlattenParamsBuilder};
pub use flatten_quadratic::QuadraticFlattener;
pub use polyline::Polyline;
