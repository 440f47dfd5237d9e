// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Profiles**: Lens size and magnification for desktop and mobile
//! - **Responsive**: Viewport breakpoint separating the two profiles
//! - **DOM**: Element ids and class names written to the page
//! - **Lens style**: Inline style applied when the lens is created

// ==========================================================================
// Profile Defaults
// ==========================================================================

/// Default lens width on desktop viewports (CSS pixels).
pub const DEFAULT_DESKTOP_WIDTH: f64 = 200.0;

/// Default lens height on desktop viewports (CSS pixels).
pub const DEFAULT_DESKTOP_HEIGHT: f64 = 200.0;

/// Default magnification on desktop viewports.
pub const DEFAULT_DESKTOP_SCALE: f64 = 2.0;

/// Default lens width on mobile viewports (CSS pixels).
pub const DEFAULT_MOBILE_WIDTH: f64 = 100.0;

/// Default lens height on mobile viewports (CSS pixels).
pub const DEFAULT_MOBILE_HEIGHT: f64 = 100.0;

/// Default magnification on mobile viewports.
pub const DEFAULT_MOBILE_SCALE: f64 = 2.0;

// ==========================================================================
// Responsive Defaults
// ==========================================================================

/// Viewports at least this wide (CSS pixels) use the desktop profile.
pub const DESKTOP_BREAKPOINT_PX: u32 = 769;

// ==========================================================================
// DOM Defaults
// ==========================================================================

/// Prefix of the per-instance lens element id (`magnifier-lens-<n>`).
pub const LENS_ID_PREFIX: &str = "magnifier-lens";

/// Class carried by every lens element.
pub const LENS_CLASS: &str = "magnifier-lens";

/// Class toggled on the lens while the mobile profile is active.
pub const MOBILE_CLASS: &str = "magnifier-lens--mobile";

/// Marker class added to every source image.
///
/// A touch that starts outside an element with this class hides the lens.
pub const SOURCE_IMAGE_CLASS: &str = "magnifier-source";

// ==========================================================================
// Lens Style Defaults
// ==========================================================================

/// Stacking order of the lens, above almost any page content.
pub const LENS_Z_INDEX: u32 = 999_999;

/// Lens border.
pub const LENS_BORDER: &str = "5px solid #FFF";

/// Lens corner radius. 50% renders a circle for square lenses.
pub const LENS_BORDER_RADIUS: &str = "50%";

/// Lens drop shadow.
pub const LENS_BOX_SHADOW: &str = "0 8px 17px 0 rgba(0, 0, 0, 0.2)";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DESKTOP_WIDTH > 0.0);
    assert!(DEFAULT_DESKTOP_HEIGHT > 0.0);
    assert!(DEFAULT_DESKTOP_SCALE > 0.0);
    assert!(DEFAULT_MOBILE_WIDTH > 0.0);
    assert!(DEFAULT_MOBILE_HEIGHT > 0.0);
    assert!(DEFAULT_MOBILE_SCALE > 0.0);

    assert!(DESKTOP_BREAKPOINT_PX > 0);
};
