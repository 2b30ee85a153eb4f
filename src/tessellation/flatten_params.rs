use crate::error::{ParameterError, Result};
use crate::math::{
    DEFAULT_ANGLE_EPSILON, DEFAULT_ANGLE_TOLERANCE, DEFAULT_CUSP_LIMIT, DEFAULT_EPSILON,
    DEFAULT_PATH_EPSILON, DEFAULT_RECURSION_LIMIT,
};

/// Tolerances controlling adaptive curve flattening.
///
/// Immutable once built; a flattener owns one for its whole lifetime.
/// See <https://agg.sourceforge.net/antigrain.com/research/adaptive_bezier/>
/// for the meaning of each tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    recursion_limit: u32,
    epsilon: f64,
    path_epsilon: f64,
    angle_epsilon: f64,
    angle_tolerance: f64,
    cusp_limit: f64,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            epsilon: DEFAULT_EPSILON,
            path_epsilon: DEFAULT_PATH_EPSILON,
            angle_epsilon: DEFAULT_ANGLE_EPSILON,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            cusp_limit: DEFAULT_CUSP_LIMIT,
        }
    }
}

impl FlattenParams {
    /// Starts a builder seeded with the default tolerances.
    #[must_use]
    pub fn builder() -> FlattenParamsBuilder {
        FlattenParamsBuilder::default()
    }

    /// Returns the maximum subdivision depth.
    #[must_use]
    pub fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    /// Returns the threshold below which a cross product counts as zero.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the base flatness tolerance in curve-space units.
    #[must_use]
    pub fn path_epsilon(&self) -> f64 {
        self.path_epsilon
    }

    /// Returns the threshold below which angle refinement is skipped.
    #[must_use]
    pub fn angle_epsilon(&self) -> f64 {
        self.angle_epsilon
    }

    /// Returns the maximum tolerated turning angle in radians.
    #[must_use]
    pub fn angle_tolerance(&self) -> f64 {
        self.angle_tolerance
    }

    /// Returns the cusp angle limit in radians (`0` = disabled).
    #[must_use]
    pub fn cusp_limit(&self) -> f64 {
        self.cusp_limit
    }

    /// Returns `true` if turning angles take part in the flatness test.
    #[must_use]
    pub fn angle_refinement_enabled(&self) -> bool {
        self.angle_tolerance >= self.angle_epsilon
    }

    /// Returns `true` if cusp vertices are emitted verbatim.
    #[must_use]
    pub fn cusp_detection_enabled(&self) -> bool {
        self.cusp_limit > 0.0
    }

    /// Returns the squared distance tolerance for output drawn at `scale`.
    ///
    /// Larger scales tighten the tolerance: `(path_epsilon / scale)²`.
    #[must_use]
    pub fn distance_tolerance_sq(&self, scale: f64) -> f64 {
        let tolerance = self.path_epsilon / scale;
        tolerance * tolerance
    }
}

/// Builder for [`FlattenParams`] that validates every tolerance on
/// [`build`](Self::build).
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenParamsBuilder {
    params: FlattenParams,
}

impl FlattenParamsBuilder {
    /// Sets the maximum subdivision depth.
    #[must_use]
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.params.recursion_limit = limit;
        self
    }

    /// Sets the collinearity threshold. Must be positive.
    #[must_use]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.params.epsilon = epsilon;
        self
    }

    /// Sets the base flatness tolerance. Must be positive.
    #[must_use]
    pub fn path_epsilon(mut self, path_epsilon: f64) -> Self {
        self.params.path_epsilon = path_epsilon;
        self
    }

    /// Sets the angle refinement threshold. Must not be negative.
    #[must_use]
    pub fn angle_epsilon(mut self, angle_epsilon: f64) -> Self {
        self.params.angle_epsilon = angle_epsilon;
        self
    }

    /// Sets the maximum turning angle in radians. Must not be negative.
    #[must_use]
    pub fn angle_tolerance(mut self, angle_tolerance: f64) -> Self {
        self.params.angle_tolerance = angle_tolerance;
        self
    }

    /// Sets the cusp angle limit in radians. Must not be negative; `0` disables it.
    #[must_use]
    pub fn cusp_limit(mut self, cusp_limit: f64) -> Self {
        self.params.cusp_limit = cusp_limit;
        self
    }

    /// Validates the tolerances and returns the finished parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if a tolerance is non-finite, if `epsilon` or
    /// `path_epsilon` is not positive, or if an angle tolerance is negative.
    pub fn build(self) -> Result<FlattenParams> {
        let p = self.params;
        require_positive("epsilon", p.epsilon)?;
        require_positive("path_epsilon", p.path_epsilon)?;
        require_non_negative("angle_epsilon", p.angle_epsilon)?;
        require_non_negative("angle_tolerance", p.angle_tolerance)?;
        require_non_negative("cusp_limit", p.cusp_limit)?;
        tracing::debug!(params = ?p, "built flatten params");
        Ok(p)
    }
}

fn require_finite(name: &'static str, value: f64) -> std::result::Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { name, value })
    }
}

fn require_positive(name: &'static str, value: f64) -> std::result::Result<(), ParameterError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive { name, value })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> std::result::Result<(), ParameterError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::Negative { name, value })
    }
}
