// SPDX-License-Identifier: MPL-2.0
//! Reading the JavaScript construction object.
//!
//! ```js
//! new Magnifier({
//!   sourceImage: document.querySelector("#photo"),
//!   zoomImage: hiResImage,                // optional
//!   options: { desktop: { scale: 3 }, mobile: { width: 80, height: 80 } },
//! });
//! ```
//!
//! Which fields count is decided in [`crate::config::source`]; this module
//! only classifies JavaScript values.

use crate::config::{MagnifierOptions, OptionSource, RawValue};
use crate::error::{Error, Result};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

pub(crate) struct MagnifierInit {
    pub source: HtmlImageElement,
    pub zoom: Option<HtmlImageElement>,
    pub options: MagnifierOptions,
}

pub(crate) fn parse_init(init: &JsValue) -> Result<MagnifierInit> {
    let source = get(init, "sourceImage")
        .and_then(|value| value.dyn_into::<HtmlImageElement>().ok())
        .ok_or_else(|| Error::Dom("sourceImage must be an <img> element".into()))?;
    let zoom = get(init, "zoomImage").and_then(|value| value.dyn_into::<HtmlImageElement>().ok());
    let options = init
        .object("options")
        .map(|options| MagnifierOptions::from_source(&options))
        .unwrap_or_default();

    Ok(MagnifierInit {
        source,
        zoom,
        options,
    })
}

fn classify(value: &JsValue) -> RawValue {
    if value.is_undefined() {
        RawValue::Undefined
    } else if value.is_null() {
        RawValue::Null
    } else if let Some(number) = value.as_f64() {
        RawValue::Number(number)
    } else if value.is_object() {
        RawValue::Object
    } else {
        RawValue::Other
    }
}

/// Property lookup that treats `undefined`/`null` and non-objects as absent.
fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| classify(value).is_present())
}

impl OptionSource for JsValue {
    fn value(&self, key: &str) -> RawValue {
        get(self, key).map_or(RawValue::Undefined, |value| classify(&value))
    }

    fn object(&self, key: &str) -> Option<Self> {
        get(self, key).filter(|value| classify(value) == RawValue::Object)
    }
}
