//! Error types for geographic grid calculus.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Primary error type for grid metric and operator calls.
///
/// Every variant describes an input problem. Calls are pure, so none of
/// these are retryable with the same arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    // === Shape Errors ===
    #[error("'{name}' must be {expected}D, got {actual}D")]
    Dimensionality {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("dimensions of '{left}' {left_shape:?} and '{right}' {right_shape:?} must match")]
    ShapeMismatch {
        left: String,
        right: String,
        left_shape: Vec<usize>,
        right_shape: Vec<usize>,
    },

    // === Coordinate Errors ===
    #[error("coordinates out of lat/lon range: {0}")]
    CoordinateRange(String),

    #[error("lat and lon must be monotonic grids, as if created by meshgrid ({axis}): {message}")]
    GridLayout { axis: String, message: String },

    // === Option Errors ===
    #[error("invalid value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },
}

impl GeoError {
    /// Create a Dimensionality error.
    pub fn dimensionality(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::Dimensionality {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create a ShapeMismatch error from two array shapes.
    pub fn shape_mismatch(
        left: impl Into<String>,
        left_shape: &[usize],
        right: impl Into<String>,
        right_shape: &[usize],
    ) -> Self {
        Self::ShapeMismatch {
            left: left.into(),
            right: right.into(),
            left_shape: left_shape.to_vec(),
            right_shape: right_shape.to_vec(),
        }
    }

    /// Create a CoordinateRange error.
    pub fn coordinate_range(msg: impl Into<String>) -> Self {
        Self::CoordinateRange(msg.into())
    }

    /// Create a GridLayout error naming the axis that failed.
    pub fn grid_layout(axis: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::GridLayout {
            axis: axis.into(),
            message: msg.into(),
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: msg.into(),
        }
    }

    /// Short category name, used as a structured log field.
    pub fn category(&self) -> &'static str {
        match self {
            GeoError::Dimensionality { .. } | GeoError::ShapeMismatch { .. } => "shape",
            GeoError::CoordinateRange(_) => "coordinate_range",
            GeoError::GridLayout { .. } => "grid_layout",
            GeoError::InvalidParameter { .. } => "invalid_parameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = GeoError::shape_mismatch("lat", &[10, 10], "lon", &[10, 9]);
        assert_eq!(
            err.to_string(),
            "dimensions of 'lat' [10, 10] and 'lon' [10, 9] must match"
        );
        assert_eq!(err.category(), "shape");
    }

    #[test]
    fn test_grid_layout_names_axis() {
        let err = GeoError::grid_layout("lon axis 0", "gradient is not zero");
        assert!(err.to_string().contains("lon axis 0"));
        assert!(err.to_string().contains("meshgrid"));
        assert_eq!(err.category(), "grid_layout");
    }

    #[test]
    fn test_dimensionality_message() {
        let err = GeoError::dimensionality("lat", 2, 1);
        assert_eq!(err.to_string(), "'lat' must be 2D, got 1D");
    }
}
