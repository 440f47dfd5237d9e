// SPDX-License-Identifier: MPL-2.0
//! Lens newtypes.
//!
//! This module provides type-safe wrappers for lens values,
//! ensuring they are always usable by the mapping math.

// =============================================================================
// LensDimension
// =============================================================================

/// A lens edge length in CSS pixels, guaranteed positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensDimension(f64);

impl LensDimension {
    /// Validates a raw value, returning the reason it was rejected.
    pub fn try_new(value: f64) -> Result<Self, &'static str> {
        if !value.is_finite() {
            return Err("must be finite");
        }
        if value <= 0.0 {
            return Err("must be positive");
        }
        Ok(Self(value))
    }

    /// Wraps a value already known to be valid, such as a checked default.
    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Magnification factor applied to the natural image size.
///
/// Guaranteed positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f64);

impl ZoomScale {
    /// Validates a raw value, returning the reason it was rejected.
    pub fn try_new(value: f64) -> Result<Self, &'static str> {
        if !value.is_finite() {
            return Err("must be finite");
        }
        if value <= 0.0 {
            return Err("must be positive");
        }
        Ok(Self(value))
    }

    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}
