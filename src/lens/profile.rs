// SPDX-License-Identifier: MPL-2.0
//! Desktop and mobile lens profiles.
//!
//! A [`Profile`] is the lens width, height and magnification used while the
//! viewport sits on one side of the breakpoint. Callers customize profiles
//! with a [`ProfileOverride`], merged field by field over the defaults.

use crate::config::defaults::{
    DEFAULT_DESKTOP_HEIGHT, DEFAULT_DESKTOP_SCALE, DEFAULT_DESKTOP_WIDTH, DEFAULT_MOBILE_HEIGHT,
    DEFAULT_MOBILE_SCALE, DEFAULT_MOBILE_WIDTH, DESKTOP_BREAKPOINT_PX,
};
use crate::domain::geometry::Size;
use crate::domain::lens::{LensDimension, ZoomScale};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which side of the breakpoint the viewport is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    /// Media query that matches desktop viewports.
    #[must_use]
    pub fn media_query() -> String {
        format!("(min-width: {DESKTOP_BREAKPOINT_PX}px)")
    }

    /// Maps the result of evaluating [`Viewport::media_query`].
    #[must_use]
    pub fn from_media_match(matches: bool) -> Self {
        if matches {
            Viewport::Desktop
        } else {
            Viewport::Mobile
        }
    }

    /// Classifies a viewport width in CSS pixels.
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        Self::from_media_match(width >= f64::from(DESKTOP_BREAKPOINT_PX))
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == Viewport::Mobile
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Mobile => "mobile",
        }
    }
}

/// Partial profile. Missing fields keep the default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Lens geometry for one viewport class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    width: LensDimension,
    height: LensDimension,
    scale: ZoomScale,
}

impl Profile {
    /// Builds a profile, rejecting values the lens cannot render.
    pub fn new(width: f64, height: f64, scale: f64) -> Result<Self> {
        Ok(Self {
            width: dimension("width", width)?,
            height: dimension("height", height)?,
            scale: zoom_scale(scale)?,
        })
    }

    /// 200×200 lens at 2x.
    #[must_use]
    pub fn desktop() -> Self {
        Self::from_defaults(DEFAULT_DESKTOP_WIDTH, DEFAULT_DESKTOP_HEIGHT, DEFAULT_DESKTOP_SCALE)
    }

    /// 100×100 lens at 2x.
    #[must_use]
    pub fn mobile() -> Self {
        Self::from_defaults(DEFAULT_MOBILE_WIDTH, DEFAULT_MOBILE_HEIGHT, DEFAULT_MOBILE_SCALE)
    }

    fn from_defaults(width: f64, height: f64, scale: f64) -> Self {
        // Defaults are checked at compile time in `config::defaults`.
        Self {
            width: LensDimension::new_unchecked(width),
            height: LensDimension::new_unchecked(height),
            scale: ZoomScale::new_unchecked(scale),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width.value()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.value()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Lens box size.
    #[must_use]
    pub fn lens_size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Applies an override, failing on the first invalid field.
    pub fn merged(self, overrides: &ProfileOverride) -> Result<Self> {
        let mut merged = self;
        if let Some(width) = overrides.width {
            merged.width = dimension("width", width)?;
        }
        if let Some(height) = overrides.height {
            merged.height = dimension("height", height)?;
        }
        if let Some(scale) = overrides.scale {
            merged.scale = zoom_scale(scale)?;
        }
        Ok(merged)
    }

    /// Applies an override, keeping the current value for any invalid field.
    ///
    /// Used for options coming from page scripts, where a bad value must not
    /// take the widget down.
    #[must_use]
    pub fn merged_lenient(self, overrides: &ProfileOverride) -> Self {
        let mut merged = self;
        if let Some(width) = overrides.width {
            match dimension("width", width) {
                Ok(width) => merged.width = width,
                Err(err) => tracing::warn!(%err, "ignoring lens option"),
            }
        }
        if let Some(height) = overrides.height {
            match dimension("height", height) {
                Ok(height) => merged.height = height,
                Err(err) => tracing::warn!(%err, "ignoring lens option"),
            }
        }
        if let Some(scale) = overrides.scale {
            match zoom_scale(scale) {
                Ok(scale) => merged.scale = scale,
                Err(err) => tracing::warn!(%err, "ignoring lens option"),
            }
        }
        merged
    }
}

fn dimension(field: &'static str, value: f64) -> Result<LensDimension> {
    LensDimension::try_new(value).map_err(|reason| Error::InvalidProfile {
        field,
        value,
        reason,
    })
}

fn zoom_scale(value: f64) -> Result<ZoomScale> {
    ZoomScale::try_new(value).map_err(|reason| Error::InvalidProfile {
        field: "scale",
        value,
        reason,
    })
}

/// The desktop and mobile profiles of one magnifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profiles {
    pub desktop: Profile,
    pub mobile: Profile,
}

impl Default for Profiles {
    fn default() -> Self {
        Self {
            desktop: Profile::desktop(),
            mobile: Profile::mobile(),
        }
    }
}

impl Profiles {
    /// Profile to use for the given viewport.
    #[must_use]
    pub fn for_viewport(&self, viewport: Viewport) -> &Profile {
        match viewport {
            Viewport::Desktop => &self.desktop,
            Viewport::Mobile => &self.mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_presets() {
        let desktop = Profile::desktop();
        assert_eq!((desktop.width(), desktop.height(), desktop.scale()), (200.0, 200.0, 2.0));
        let mobile = Profile::mobile();
        assert_eq!((mobile.width(), mobile.height(), mobile.scale()), (100.0, 100.0, 2.0));
    }

    #[test]
    fn media_query_uses_breakpoint() {
        assert_eq!(Viewport::media_query(), "(min-width: 769px)");
    }

    #[test]
    fn from_width_splits_at_breakpoint() {
        assert_eq!(Viewport::from_width(768.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(768.9), Viewport::Mobile);
        assert_eq!(Viewport::from_width(769.0), Viewport::Desktop);
        assert_eq!(Viewport::from_width(1920.0), Viewport::Desktop);
    }

    #[test]
    fn merged_replaces_only_given_fields() {
        let overrides = ProfileOverride {
            width: Some(300.0),
            height: None,
            scale: Some(3.0),
        };
        let merged = Profile::desktop().merged(&overrides).expect("valid override");
        assert_eq!(merged.width(), 300.0);
        assert_eq!(merged.height(), 200.0);
        assert_eq!(merged.scale(), 3.0);
    }

    #[test]
    fn merged_rejects_invalid_field() {
        let overrides = ProfileOverride {
            scale: Some(0.0),
            ..ProfileOverride::default()
        };
        let err = Profile::mobile().merged(&overrides).unwrap_err();
        assert!(matches!(err, Error::InvalidProfile { field: "scale", .. }));
    }

    #[test]
    fn merged_lenient_skips_invalid_field_but_keeps_valid_ones() {
        let overrides = ProfileOverride {
            width: Some(-10.0),
            height: Some(150.0),
            scale: Some(f64::NAN),
        };
        let merged = Profile::mobile().merged_lenient(&overrides);
        assert_eq!(merged.width(), 100.0);
        assert_eq!(merged.height(), 150.0);
        assert_eq!(merged.scale(), 2.0);
    }

    #[test]
    fn large_overrides_are_honored() {
        let overrides = ProfileOverride {
            width: Some(5000.0),
            height: None,
            scale: Some(100.0),
        };
        let lenient = Profile::desktop().merged_lenient(&overrides);
        assert_eq!(lenient.width(), 5000.0);
        assert_eq!(lenient.scale(), 100.0);

        let strict = Profile::desktop().merged(&overrides).expect("large values are valid");
        assert_eq!(strict.width(), 5000.0);
        assert_eq!(strict.scale(), 100.0);
    }

    #[test]
    fn profiles_select_by_viewport() {
        let profiles = Profiles::default();
        assert_eq!(profiles.for_viewport(Viewport::Desktop).width(), 200.0);
        assert_eq!(profiles.for_viewport(Viewport::Mobile).width(), 100.0);
    }
}
