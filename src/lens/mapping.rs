// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-lens coordinate mapping.
//!
//! Given where the pointer is on the page, where the source image is and how
//! large the zoom image really is, this module computes everything the lens
//! element needs for one frame:
//!
//! - the lens box, centered on the pointer;
//! - the background size, the natural zoom image size times the profile scale;
//! - the background offset, chosen so that the point under the cursor in the
//!   source image sits at the center of the lens.
//!
//! The background offset for one axis is
//!
//! ```text
//! offset = -floor(rel / rendered * natural * scale - lens / 2)
//! ```
//!
//! where `rel` is the pointer position relative to the source image.

use super::profile::Profile;
use crate::domain::geometry::{PageRect, Point, Size};

/// Integer pixel offset of the lens background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackgroundOffset {
    pub x: i64,
    pub y: i64,
}

/// Placement of the lens for a single pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensFrame {
    /// Lens top-left corner in page coordinates.
    pub position: Point,
    /// Lens box size, straight from the active profile.
    pub size: Size,
    /// CSS `background-position`.
    pub background_offset: BackgroundOffset,
    /// CSS `background-size`.
    pub background_size: Size,
}

/// Computes the lens frame, or `None` when the pointer is not strictly inside
/// the source image.
#[must_use]
pub fn compute_frame(
    pointer: Point,
    source: &PageRect,
    natural: Size,
    profile: &Profile,
) -> Option<LensFrame> {
    let rel = source.relative(pointer);
    if !source.contains_relative(rel) {
        return None;
    }

    let lens = profile.lens_size();
    let background_size = natural.scaled(profile.scale());

    Some(LensFrame {
        position: Point::new(pointer.x - lens.width / 2.0, pointer.y - lens.height / 2.0),
        size: lens,
        background_offset: BackgroundOffset {
            x: pan_offset(rel.x, source.size.width, background_size.width, lens.width),
            y: pan_offset(rel.y, source.size.height, background_size.height, lens.height),
        },
        background_size,
    })
}

/// One axis of the background offset.
fn pan_offset(rel: f64, rendered: f64, zoomed: f64, lens: f64) -> i64 {
    let zoomed_point = rel / rendered * zoomed;
    // `as` saturates, which is what we want for absurd inputs.
    -((zoomed_point - lens / 2.0).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, PX_EPSILON};

    fn worked_example_source() -> PageRect {
        PageRect::new(Point::new(10.0, 10.0), Size::new(400.0, 300.0))
    }

    #[test]
    fn worked_example_matches_expected_css_values() {
        let frame = compute_frame(
            Point::new(210.0, 160.0),
            &worked_example_source(),
            Size::new(800.0, 600.0),
            &Profile::desktop(),
        )
        .expect("pointer is inside the image");

        assert_eq!(frame.background_offset, BackgroundOffset { x: -700, y: -500 });
        assert_eq!(frame.background_size, Size::new(1600.0, 1200.0));
        assert_eq!(frame.position, Point::new(110.0, 60.0));
        assert_eq!(frame.size, Size::new(200.0, 200.0));
    }

    #[test]
    fn center_pointer_centers_background_under_lens() {
        let source = PageRect::new(Point::default(), Size::new(500.0, 250.0));
        let natural = Size::new(1000.0, 500.0);
        let profile = Profile::desktop();
        let frame = compute_frame(Point::new(250.0, 125.0), &source, natural, &profile)
            .expect("center is inside");

        // Center of the background lands on the center of the lens.
        let bg_center_x = frame.background_offset.x as f64 + frame.background_size.width / 2.0;
        let bg_center_y = frame.background_offset.y as f64 + frame.background_size.height / 2.0;
        assert_abs_diff_eq!(bg_center_x, profile.width() / 2.0, epsilon = PX_EPSILON);
        assert_abs_diff_eq!(bg_center_y, profile.height() / 2.0, epsilon = PX_EPSILON);
    }

    #[test]
    fn offsets_are_floored_before_negation() {
        // rel 1 of 3 over 100px zoomed: 33.33.. - 50 = -16.66.., floor -17, negated 17.
        let source = PageRect::new(Point::default(), Size::new(3.0, 3.0));
        let profile = Profile::new(100.0, 100.0, 1.0).expect("valid profile");
        let frame = compute_frame(Point::new(1.0, 1.0), &source, Size::new(100.0, 100.0), &profile)
            .expect("inside");
        assert_eq!(frame.background_offset, BackgroundOffset { x: 17, y: 17 });
    }

    #[test]
    fn pointer_on_any_edge_produces_no_frame() {
        let source = worked_example_source();
        let natural = Size::new(800.0, 600.0);
        let profile = Profile::desktop();
        let edges = [
            Point::new(10.0, 100.0),
            Point::new(410.0, 100.0),
            Point::new(100.0, 10.0),
            Point::new(100.0, 310.0),
            Point::new(5.0, 5.0),
            Point::new(900.0, 900.0),
        ];
        for pointer in edges {
            assert!(
                compute_frame(pointer, &source, natural, &profile).is_none(),
                "expected no frame at {pointer:?}"
            );
        }
    }

    #[test]
    fn background_size_ignores_pointer_position() {
        let source = worked_example_source();
        let natural = Size::new(640.0, 480.0);
        let profile = Profile::mobile();
        for pointer in [Point::new(11.0, 11.0), Point::new(200.0, 150.0), Point::new(409.0, 309.0)] {
            let frame = compute_frame(pointer, &source, natural, &profile).expect("inside");
            assert_eq!(frame.background_size, Size::new(1280.0, 960.0));
        }
    }

    #[test]
    fn unloaded_zoom_image_still_positions_lens() {
        let frame = compute_frame(
            Point::new(210.0, 160.0),
            &worked_example_source(),
            Size::default(),
            &Profile::desktop(),
        )
        .expect("inside");
        assert_eq!(frame.background_size, Size::default());
        assert_eq!(frame.background_offset, BackgroundOffset { x: 100, y: 100 });
    }
}
