use thiserror::Error;

/// Top-level error type for the adaptive Bézier flattener.
///
/// Flattening itself never fails; only parameter construction is checked.
#[derive(Debug, Error)]
pub enum FlattenError {
    #[error(transparent)]
    Parameters(#[from] ParameterError),
}

/// Errors raised while building [`FlattenParams`](crate::tessellation::FlattenParams).
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("parameter {name} = {value} must be finite")]
    NotFinite { name: &'static str, value: f64 },

    #[error("parameter {name} = {value} must be greater than zero")]
    NotPositive { name: &'static str, value: f64 },

    #[error("parameter {name} = {value} must not be negative")]
    Negative { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`FlattenError`].
pub type Result<T> = std::result::Result<T, FlattenError>;
