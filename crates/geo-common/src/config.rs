//! Runtime configuration for grid calculus.

use crate::error::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};

/// Default tolerance (degrees) below which a coordinate gradient counts as zero.
pub const DEFAULT_ZERO_GRADIENT_TOLERANCE: f64 = 1e-10;

/// Configuration for the metric engine and operators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculusConfig {
    /// Largest absolute coordinate difference (degrees) treated as "no change"
    /// when inferring which axis carries latitude and which longitude.
    pub zero_gradient_tolerance: f64,

    /// Difference the layers of a 3D field on the rayon thread pool.
    pub parallel_layers: bool,
}

impl Default for CalculusConfig {
    fn default() -> Self {
        Self {
            zero_gradient_tolerance: DEFAULT_ZERO_GRADIENT_TOLERANCE,
            parallel_layers: true,
        }
    }
}

impl CalculusConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GEOGRID_ZERO_GRADIENT_TOLERANCE") {
            if let Ok(tol) = val.parse() {
                config.zero_gradient_tolerance = tol;
            }
        }

        if let Ok(val) = std::env::var("GEOGRID_PARALLEL_LAYERS") {
            config.parallel_layers = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> GeoResult<()> {
        if !self.zero_gradient_tolerance.is_finite() || self.zero_gradient_tolerance < 0.0 {
            return Err(GeoError::invalid_parameter(
                "zero_gradient_tolerance",
                format!(
                    "must be finite and >= 0, got {}",
                    self.zero_gradient_tolerance
                ),
            ));
        }

        Ok(())
    }

    /// Builder-style override of the zero-gradient tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_gradient_tolerance = tolerance;
        self
    }

    /// Builder-style override of layer parallelism.
    pub fn with_parallel_layers(mut self, parallel: bool) -> Self {
        self.parallel_layers = parallel;
        self
    }
}
