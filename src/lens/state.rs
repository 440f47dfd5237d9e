// SPDX-License-Identifier: MPL-2.0
//! Lens state management
//!
//! [`LensController`] owns everything a magnifier remembers between events:
//! its profiles, the current viewport class and whether the lens is showing.
//! Event handlers feed it measurements and apply the [`LensUpdate`] it
//! returns; it never touches the page itself.

use super::mapping::{compute_frame, LensFrame};
use super::profile::{Profile, Profiles, Viewport};
use crate::domain::geometry::{PageRect, Point, Size};

/// What the lens element should do after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LensUpdate {
    /// Show the lens with this frame.
    Show(LensFrame),
    /// Hide the lens.
    Hide,
}

/// Result of re-evaluating the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportChange {
    pub viewport: Viewport,
    /// Whether the viewport class differs from the previous one.
    pub changed: bool,
}

impl ViewportChange {
    /// Whether the mobile class should be present on the lens.
    #[must_use]
    pub fn mobile_class(&self) -> bool {
        self.viewport.is_mobile()
    }
}

/// Manages the lens state of one magnifier
#[derive(Debug, Clone)]
pub struct LensController {
    profiles: Profiles,
    viewport: Viewport,
    visible: bool,
}

impl LensController {
    #[must_use]
    pub fn new(profiles: Profiles, viewport: Viewport) -> Self {
        Self {
            profiles,
            viewport,
            visible: false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Profile for the current viewport.
    #[must_use]
    pub fn active_profile(&self) -> &Profile {
        self.profiles.for_viewport(self.viewport)
    }

    /// Handles a pointer or touch move at `pointer` (page coordinates).
    ///
    /// `source` is the measured source image and `natural` the natural size
    /// of the zoom image.
    pub fn on_move(&mut self, pointer: Point, source: &PageRect, natural: Size) -> LensUpdate {
        match compute_frame(pointer, source, natural, self.active_profile()) {
            Some(frame) => {
                if !self.visible {
                    tracing::debug!(x = pointer.x, y = pointer.y, "lens shown");
                }
                self.visible = true;
                LensUpdate::Show(frame)
            }
            None => self.on_leave(),
        }
    }

    /// Handles the pointer leaving the source image.
    pub fn on_leave(&mut self) -> LensUpdate {
        if self.visible {
            tracing::debug!("lens hidden");
        }
        self.visible = false;
        LensUpdate::Hide
    }

    /// Records the viewport class reported by the media query.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ViewportChange {
        let changed = viewport != self.viewport;
        if changed {
            tracing::debug!(viewport = viewport.label(), "viewport changed");
        }
        self.viewport = viewport;
        ViewportChange { viewport, changed }
    }
}
