//! Shared test utilities for the geogrid workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic mesh and field generators
//! - Regional mesh fixtures
//! - Approximate floating-point assertions for scalars and arrays
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{global_mesh, assert_approx_eq};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Element-wise approximate equality of two equally shaped arrays, with a
/// tolerance relative to the larger magnitude of each pair.
///
/// # Usage
///
/// ```
/// use test_utils::assert_all_close;
/// use ndarray::array;
///
/// assert_all_close!(array![1.0, 2.0], array![1.0 + 1e-12, 2.0], 1e-9);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($left:expr, $right:expr, $rel:expr) => {{
        let left = &$left;
        let right = &$right;
        let rel: f64 = $rel as f64;
        assert_eq!(left.shape(), right.shape(), "shape mismatch");
        for (idx, (a, b)) in left.iter().zip(right.iter()).enumerate() {
            let (a, b): (f64, f64) = (*a, *b);
            let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
            if !((a - b).abs() <= rel * scale) {
                panic!(
                    "assertion failed: arrays differ at flat index {}\n  left: `{:?}`,\n right: `{:?}`, rel tol `{:?}`",
                    idx, a, b, rel
                );
            }
        }
    }};
}
