// SPDX-License-Identifier: MPL-2.0
//! Offline lens inspection.
//!
//! Runs the magnifier math for a single pointer position without a browser,
//! so profile files can be checked against real images. Backs the
//! `magnify-lens` binary.

use crate::config::MagnifierOptions;
use crate::domain::geometry::{PageRect, Point, Size};
use crate::error::{Error, Result};
use crate::lens::style::{frame_style, hidden_style};
use crate::lens::{LensController, LensStyle, LensUpdate, Profile, Viewport};
use std::fmt;
use std::path::Path;

/// Where the zoom image size comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum NaturalSource {
    /// Given explicitly, in pixels.
    Size(Size),
    /// Read from an image file header.
    File(std::path::PathBuf),
}

/// One inspection run.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectRequest {
    pub options: MagnifierOptions,
    pub viewport_width: f64,
    pub source: PageRect,
    pub pointer: Point,
    pub natural: NaturalSource,
}

/// What the widget would do for the request.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub viewport: Viewport,
    pub profile: Profile,
    pub natural: Size,
    pub visible: bool,
    pub style: LensStyle,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "viewport: {} ({}x{} @{}x)",
            self.viewport.label(),
            self.profile.width(),
            self.profile.height(),
            self.profile.scale()
        )?;
        writeln!(f, "natural: {}x{}", self.natural.width, self.natural.height)?;
        writeln!(f, "lens: {}", if self.visible { "visible" } else { "hidden" })?;
        write!(f, "{}", self.style.to_css_text())
    }
}

/// Runs the request through a fresh [`LensController`].
pub fn inspect(request: &InspectRequest) -> Result<InspectReport> {
    let profiles = request.options.resolve()?;
    let natural = match &request.natural {
        NaturalSource::Size(size) => *size,
        NaturalSource::File(path) => image_size(path)?,
    };
    let viewport = Viewport::from_width(request.viewport_width);
    let mut controller = LensController::new(profiles, viewport);
    let update = controller.on_move(request.pointer, &request.source, natural);
    let style = match update {
        LensUpdate::Show(frame) => frame_style(&frame),
        LensUpdate::Hide => hidden_style(),
    };
    Ok(InspectReport {
        viewport,
        profile: *controller.active_profile(),
        natural,
        visible: controller.is_visible(),
        style,
    })
}

/// Pixel dimensions of an image file, read from its header.
pub fn image_size(path: &Path) -> Result<Size> {
    let (width, height) = image_rs::image_dimensions(path)?;
    tracing::debug!(path = %path.display(), width, height, "read image size");
    Ok(Size::new(f64::from(width), f64::from(height)))
}

/// Parses `WxH`.
pub fn parse_size(input: &str) -> Result<Size> {
    let (width, height) = split_pair(input, 'x')?;
    let size = Size::new(width, height);
    if !size.is_positive() {
        return Err(Error::Argument(format!("size must be positive: {input}")));
    }
    Ok(size)
}

/// Parses `X,Y`.
pub fn parse_point(input: &str) -> Result<Point> {
    let (x, y) = split_pair(input, ',')?;
    Ok(Point::new(x, y))
}

/// Parses `WxH+X+Y`, the rendered size and page offset of the source image.
pub fn parse_placement(input: &str) -> Result<PageRect> {
    let mut parts = input.splitn(3, '+');
    let size = parse_size(parts.next().unwrap_or_default())?;
    let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
        return Err(Error::Argument(format!("expected WxH+X+Y, got {input}")));
    };
    Ok(PageRect::new(Point::new(number(x)?, number(y)?), size))
}

fn split_pair(input: &str, separator: char) -> Result<(f64, f64)> {
    let (first, second) = input
        .split_once(separator)
        .ok_or_else(|| Error::Argument(format!("expected two values separated by '{separator}', got {input}")))?;
    Ok((number(first)?, number(second)?))
}

fn number(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::Argument(format!("not a number: {input}")))
}
