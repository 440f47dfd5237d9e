// SPDX-License-Identifier: MPL-2.0
//! Page measurement and style writes.

use crate::domain::geometry::{PageRect, Point, Size};
use crate::error::{Error, Result};
use crate::lens::style::{parse_css_px, LensStyle};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlImageElement, Window};

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Dom("no global window".into()))
}

/// Intrinsic pixel size of an image. Zero until the image has loaded.
pub(crate) fn natural_size(image: &HtmlImageElement) -> Size {
    Size::new(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    )
}

/// Top-left corner of `element` in page coordinates.
pub(crate) fn page_offset(window: &Window, element: &Element) -> Point {
    let rect = element.get_bounding_client_rect();
    let (scroll_left, scroll_top) = scroll_offset(window);
    Point::new(rect.left() + scroll_left, rect.top() + scroll_top)
}

/// Document scroll offset, falling back to the root element for old engines
/// that report a zero window offset.
fn scroll_offset(window: &Window) -> (f64, f64) {
    let root = window.document().and_then(|doc| doc.document_element());
    let axis = |window_offset: Option<f64>, root_offset: fn(&Element) -> i32| {
        window_offset
            .filter(|offset| *offset != 0.0)
            .or_else(|| root.as_ref().map(|el| f64::from(root_offset(el))))
            .unwrap_or(0.0)
    };
    (
        axis(window.page_x_offset().ok(), Element::scroll_left),
        axis(window.page_y_offset().ok(), Element::scroll_top),
    )
}

/// Rendered size of the source image.
///
/// Reads the computed width/height. When the browser offers no computed
/// style at all, the natural size of the zoom image stands in; when a value
/// does not parse (`auto`), the bounding box is used for that edge.
pub(crate) fn rendered_size(window: &Window, element: &Element, fallback: Size) -> Size {
    let style = match window.get_computed_style(element) {
        Ok(Some(style)) => style,
        _ => return fallback,
    };
    let rect = element.get_bounding_client_rect();
    let edge = |property: &str, boxed: f64| {
        style
            .get_property_value(property)
            .ok()
            .and_then(|value| parse_css_px(&value))
            .unwrap_or(boxed)
    };
    Size::new(edge("width", rect.width()), edge("height", rect.height()))
}

/// Measures where the source image sits on the page.
pub(crate) fn measure_source(
    window: &Window,
    source: &HtmlImageElement,
    fallback: Size,
) -> PageRect {
    PageRect::new(
        page_offset(window, source),
        rendered_size(window, source, fallback),
    )
}

/// Writes every declaration of `style` onto the element.
pub(crate) fn apply_style(element: &HtmlElement, style: &LensStyle) -> Result<()> {
    let inline = element.style();
    for decl in style.declarations() {
        inline.set_property(decl.property, &decl.value)?;
    }
    Ok(())
}
