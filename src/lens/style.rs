// SPDX-License-Identifier: MPL-2.0
//! Inline style of the lens element.
//!
//! Styles are produced as ordered `(property, value)` declarations so the
//! browser binding can hand them to `style.setProperty` one by one and the
//! CLI can print them as CSS text.

use super::mapping::LensFrame;
use crate::config::defaults::{LENS_BORDER, LENS_BORDER_RADIUS, LENS_BOX_SHADOW, LENS_Z_INDEX};

/// One CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// An ordered set of declarations applied together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LensStyle(Vec<Declaration>);

impl LensStyle {
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.0
    }

    /// Value of a property, if this style sets it.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// Renders as `prop: value;` lines.
    #[must_use]
    pub fn to_css_text(&self) -> String {
        self.0
            .iter()
            .map(|decl| format!("{}: {};", decl.property, decl.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Style applied once, when the lens element is created. The lens starts hidden.
#[must_use]
pub fn base_style() -> LensStyle {
    LensStyle(vec![
        Declaration::new("position", "absolute"),
        Declaration::new("display", "none"),
        Declaration::new("pointer-events", "none"),
        Declaration::new("z-index", LENS_Z_INDEX.to_string()),
        Declaration::new("border", LENS_BORDER),
        Declaration::new("border-radius", LENS_BORDER_RADIUS),
        Declaration::new("box-shadow", LENS_BOX_SHADOW),
        Declaration::new("background-repeat", "no-repeat"),
    ])
}

/// Style for one visible frame.
#[must_use]
pub fn frame_style(frame: &LensFrame) -> LensStyle {
    LensStyle(vec![
        Declaration::new("display", "block"),
        Declaration::new("left", px(frame.position.x)),
        Declaration::new("top", px(frame.position.y)),
        Declaration::new("width", px(frame.size.width)),
        Declaration::new("height", px(frame.size.height)),
        Declaration::new(
            "background-position",
            format!("{}px {}px", frame.background_offset.x, frame.background_offset.y),
        ),
        Declaration::new(
            "background-size",
            format!(
                "{} {}",
                px(frame.background_size.width),
                px(frame.background_size.height)
            ),
        ),
    ])
}

#[must_use]
pub fn hidden_style() -> LensStyle {
    LensStyle(vec![Declaration::new("display", "none")])
}

/// `background-image` value for an already URI-encoded source.
#[must_use]
pub fn background_image(encoded_src: &str) -> String {
    format!("url({encoded_src})")
}

/// Formats a CSS pixel length. Whole numbers print without a fraction.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Parses a computed CSS length the way `parseInt(value, 10)` does.
///
/// Leading whitespace and an optional sign are accepted, then as many
/// decimal digits as follow. Anything after the digits (a fraction, `px`)
/// is ignored. Returns `None` when no digit is found, e.g. for `"auto"`.
#[must_use]
pub fn parse_css_px(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: f64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::{Point, Size};
    use crate::lens::mapping::BackgroundOffset;

    #[test]
    fn base_style_starts_hidden_and_click_through() {
        let style = base_style();
        assert_eq!(style.get("display"), Some("none"));
        assert_eq!(style.get("pointer-events"), Some("none"));
        assert_eq!(style.get("position"), Some("absolute"));
        assert_eq!(style.get("z-index"), Some("999999"));
        assert_eq!(style.get("background-repeat"), Some("no-repeat"));
    }

    #[test]
    fn frame_style_formats_pixels() {
        let frame = LensFrame {
            position: Point::new(110.0, 60.5),
            size: Size::new(200.0, 200.0),
            background_offset: BackgroundOffset { x: -700, y: -500 },
            background_size: Size::new(1600.0, 1200.0),
        };
        let style = frame_style(&frame);
        assert_eq!(style.get("display"), Some("block"));
        assert_eq!(style.get("left"), Some("110px"));
        assert_eq!(style.get("top"), Some("60.5px"));
        assert_eq!(style.get("width"), Some("200px"));
        assert_eq!(style.get("background-position"), Some("-700px -500px"));
        assert_eq!(style.get("background-size"), Some("1600px 1200px"));
    }

    #[test]
    fn css_text_lists_declarations_in_order() {
        assert_eq!(hidden_style().to_css_text(), "display: none;");
    }

    #[test]
    fn background_image_wraps_url() {
        assert_eq!(background_image("a%20b.png"), "url(a%20b.png)");
    }

    #[test]
    fn parse_css_px_follows_parse_int() {
        assert_eq!(parse_css_px("400px"), Some(400.0));
        assert_eq!(parse_css_px("400.75px"), Some(400.0));
        assert_eq!(parse_css_px("  12"), Some(12.0));
        assert_eq!(parse_css_px("-3px"), Some(-3.0));
        assert_eq!(parse_css_px("auto"), None);
        assert_eq!(parse_css_px(""), None);
        assert_eq!(parse_css_px("px"), None);
    }
}
