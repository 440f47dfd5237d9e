// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no browser or file-system access.
//!
//! # Modules
//!
//! - [`geometry`]: Page-space types ([`Point`](geometry::Point),
//!   [`Size`](geometry::Size), [`PageRect`](geometry::PageRect))
//! - [`lens`]: Lens value objects ([`LensDimension`](lens::LensDimension),
//!   [`ZoomScale`](lens::ZoomScale))

pub mod geometry;
pub mod lens;
