// SPDX-License-Identifier: MPL-2.0
//! Page-space geometry.
//!
//! All values are CSS pixels. Page coordinates include the document scroll
//! offset, which is what pointer events report as `pageX`/`pageY`.

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Multiplies both edges by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Whether both edges are strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Where the source image sits on the page and how large it renders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageRect {
    /// Top-left corner in page coordinates.
    pub origin: Point,
    /// Rendered size.
    pub size: Size,
}

impl PageRect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Converts a page position into coordinates relative to the top-left corner.
    #[must_use]
    pub fn relative(&self, page: Point) -> Point {
        Point::new(page.x - self.origin.x, page.y - self.origin.y)
    }

    /// Whether a relative position lies strictly inside the rectangle.
    ///
    /// Both edges are exclusive: a pointer sitting exactly on the left/top
    /// border counts as outside, as does one on the right/bottom border.
    #[must_use]
    pub fn contains_relative(&self, rel: Point) -> bool {
        rel.x > 0.0 && rel.y > 0.0 && rel.x < self.size.width && rel.y < self.size.height
    }
}
