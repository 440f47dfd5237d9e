// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros. Mapping results are
//! built from divisions of page measurements, so tests comparing derived
//! floats should go through these rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f64 comparisons of CSS pixel values.
pub const PX_EPSILON: f64 = 1e-9;
