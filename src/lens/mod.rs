// SPDX-License-Identifier: MPL-2.0
//! Platform-independent magnifier logic.
//!
//! Nothing in here talks to the browser. The `web` module measures the page,
//! calls into [`LensController`] and writes the resulting [`LensStyle`] back.

pub mod mapping;
pub mod profile;
pub mod state;
pub mod style;

pub use mapping::{compute_frame, BackgroundOffset, LensFrame};
pub use profile::{Profile, ProfileOverride, Profiles, Viewport};
pub use state::{LensController, LensUpdate, ViewportChange};
pub use style::{Declaration, LensStyle};
