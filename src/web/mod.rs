// SPDX-License-Identifier: MPL-2.0
//! Browser binding.
//!
//! [`Magnifier`] is exported to JavaScript. It creates the lens element,
//! registers the pointer, touch and media-query listeners, and forwards every
//! event to a shared [`LensController`]. Dropping it (or calling `free()` from
//! JavaScript) unregisters the listeners and removes the lens.

mod dom;
mod options;

use crate::config::defaults::{LENS_CLASS, LENS_ID_PREFIX, MOBILE_CLASS, SOURCE_IMAGE_CLASS};
use crate::domain::geometry::Point;
use crate::error::{Error, Result};
use crate::lens::style::{background_image, base_style, frame_style, hidden_style};
use crate::lens::{LensController, LensUpdate, Profiles, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, HtmlImageElement,
    MediaQueryList, MouseEvent, TouchEvent, Window,
};

static NEXT_LENS_ID: AtomicU32 = AtomicU32::new(0);

/// Magnifying lens attached to one image.
#[wasm_bindgen]
pub struct Magnifier {
    attached: Option<Attached>,
}

#[wasm_bindgen]
impl Magnifier {
    /// Attaches a lens to `init.sourceImage`.
    ///
    /// Never throws: if the page cannot host the lens, the returned
    /// magnifier is inert.
    #[wasm_bindgen(constructor)]
    pub fn new(init: JsValue) -> Magnifier {
        let attached = options::parse_init(&init).and_then(|init| {
            let profiles = init.options.resolve_lenient();
            Attached::attach(init.source, init.zoom, profiles)
        });
        match attached {
            Ok(attached) => Magnifier {
                attached: Some(attached),
            },
            Err(err) => {
                tracing::warn!(%err, "magnifier disabled");
                Magnifier { attached: None }
            }
        }
    }

    /// Whether the lens is currently showing.
    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.attached
            .as_ref()
            .is_some_and(|attached| attached.shared.controller.borrow().is_visible())
    }

    /// Whether the mobile profile is active.
    #[wasm_bindgen(getter)]
    pub fn mobile(&self) -> bool {
        self.attached
            .as_ref()
            .is_some_and(|attached| attached.shared.controller.borrow().viewport().is_mobile())
    }
}

/// State reachable from every event closure.
struct Shared {
    window: Window,
    lens: HtmlElement,
    source: HtmlImageElement,
    /// Image whose natural size drives the math: the zoom image, or the source.
    zoom: HtmlImageElement,
    media: MediaQueryList,
    controller: RefCell<LensController>,
}

impl Shared {
    fn on_move(&self, pointer: Point) {
        self.sync_viewport();
        let natural = dom::natural_size(&self.zoom);
        let source = dom::measure_source(&self.window, &self.source, natural);
        let update = self.controller.borrow_mut().on_move(pointer, &source, natural);
        self.apply(update);
    }

    fn on_leave(&self) {
        let update = self.controller.borrow_mut().on_leave();
        self.apply(update);
    }

    /// Re-reads the media query and toggles the mobile class.
    fn sync_viewport(&self) {
        let viewport = Viewport::from_media_match(self.media.matches());
        let change = self.controller.borrow_mut().set_viewport(viewport);
        if let Err(err) = self
            .lens
            .class_list()
            .toggle_with_force(MOBILE_CLASS, change.mobile_class())
        {
            tracing::debug!(err = %Error::from(err), "could not toggle mobile class");
        }
    }

    fn apply(&self, update: LensUpdate) {
        let style = match update {
            LensUpdate::Show(frame) => frame_style(&frame),
            LensUpdate::Hide => hidden_style(),
        };
        if let Err(err) = dom::apply_style(&self.lens, &style) {
            tracing::debug!(%err, "could not style lens");
        }
    }
}

/// A listener to unregister on drop.
enum Registration {
    Event {
        target: EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    },
    /// `MediaQueryList.addListener`, for engines without `addEventListener` on it.
    LegacyMedia {
        media: MediaQueryList,
        callback: Closure<dyn FnMut(Event)>,
    },
}

impl Registration {
    fn remove(&self) {
        let result = match self {
            Registration::Event {
                target,
                kind,
                callback,
            } => target.remove_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()),
            Registration::LegacyMedia { media, callback } => {
                media.remove_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()))
            }
        };
        if let Err(err) = result {
            tracing::debug!(err = %Error::from(err), "could not remove listener");
        }
    }
}

struct Attached {
    shared: Rc<Shared>,
    registrations: Vec<Registration>,
}

impl Attached {
    fn attach(
        source: HtmlImageElement,
        zoom: Option<HtmlImageElement>,
        profiles: Profiles,
    ) -> Result<Self> {
        let window = dom::window()?;
        let document = window
            .document()
            .ok_or_else(|| Error::Dom("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| Error::Dom("document has no body".into()))?;

        let id = format!(
            "{LENS_ID_PREFIX}-{}",
            NEXT_LENS_ID.fetch_add(1, Ordering::Relaxed)
        );
        let lens: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| Error::Dom("lens is not an HTML element".into()))?;
        lens.set_id(&id);
        lens.class_list().add_1(LENS_CLASS)?;
        body.append_child(&lens)?;
        if !lens.is_connected() {
            return Err(Error::Dom(format!("lens #{id} missing after attach")));
        }

        let zoom = zoom.unwrap_or_else(|| source.clone());
        let prepared = (|| -> Result<MediaQueryList> {
            let encoded: String = js_sys::encode_uri(&zoom.src()).into();
            dom::apply_style(&lens, &base_style())?;
            lens.style()
                .set_property("background-image", &background_image(&encoded))?;
            source.class_list().add_1(SOURCE_IMAGE_CLASS)?;
            window
                .match_media(&Viewport::media_query())?
                .ok_or_else(|| Error::Dom("matchMedia unavailable".into()))
        })();
        let media = match prepared {
            Ok(media) => media,
            Err(err) => {
                lens.remove();
                return Err(err);
            }
        };
        let viewport = Viewport::from_media_match(media.matches());

        let shared = Rc::new(Shared {
            window,
            lens,
            source,
            zoom,
            media,
            controller: RefCell::new(LensController::new(profiles, viewport)),
        });
        shared.sync_viewport();

        let mut attached = Attached {
            shared,
            registrations: Vec::new(),
        };
        // Listeners registered so far are removed by `Drop` if a later one fails.
        attached.register_listeners(&document)?;
        tracing::info!(%id, viewport = viewport.label(), "magnifier attached");
        Ok(attached)
    }

    fn register_listeners(&mut self, document: &web_sys::Document) -> Result<()> {
        let source: EventTarget = self.shared.source.clone().into();

        self.listen(&source, "dragstart", |_, event| event.prevent_default())?;

        for kind in ["mousemove", "pointermove"] {
            self.listen(&source, kind, |shared, event| {
                event.prevent_default();
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    shared.on_move(Point::new(
                        f64::from(mouse.page_x()),
                        f64::from(mouse.page_y()),
                    ));
                }
            })?;
        }

        let non_passive = AddEventListenerOptions::new();
        non_passive.set_passive(false);
        self.listen_with(&source, "touchmove", Some(&non_passive), |shared, event| {
            event.prevent_default();
            let first = event
                .dyn_ref::<TouchEvent>()
                .and_then(|touch| touch.touches().get(0));
            if let Some(touch) = first {
                shared.on_move(Point::new(
                    f64::from(touch.page_x()),
                    f64::from(touch.page_y()),
                ));
            }
        })?;

        self.listen(&source, "mouseleave", |shared, _| shared.on_leave())?;

        let marker = format!(".{SOURCE_IMAGE_CLASS}");
        self.listen(document, "touchstart", move |shared, event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Ok(None) = target.closest(&marker) {
                shared.on_leave();
            }
        })?;

        self.listen_media()
    }

    fn listen_media(&mut self) -> Result<()> {
        let media = self.shared.media.clone();
        let has_event_target =
            js_sys::Reflect::has(&media, &JsValue::from_str("addEventListener")).unwrap_or(false);
        if has_event_target {
            return self.listen(&media, "change", |shared, _| shared.sync_viewport());
        }

        let callback = self.callback(|shared, _| shared.sync_viewport());
        media.add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()))?;
        self.registrations
            .push(Registration::LegacyMedia { media, callback });
        Ok(())
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(&Shared, &Event) + 'static,
    ) -> Result<()> {
        self.listen_with(target, kind, None, handler)
    }

    fn listen_with(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        options: Option<&AddEventListenerOptions>,
        handler: impl FnMut(&Shared, &Event) + 'static,
    ) -> Result<()> {
        let callback = self.callback(handler);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        match options {
            Some(options) => target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    kind, function, options,
                )?,
            None => target.add_event_listener_with_callback(kind, function)?,
        }
        self.registrations.push(Registration::Event {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    /// Wraps a handler so it only holds a weak reference to the shared state.
    fn callback(
        &self,
        mut handler: impl FnMut(&Shared, &Event) + 'static,
    ) -> Closure<dyn FnMut(Event)> {
        let shared = Rc::downgrade(&self.shared);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(shared) = shared.upgrade() {
                handler(&shared, &event);
            }
        })
    }
}

impl Drop for Attached {
    fn drop(&mut self) {
        for registration in &self.registrations {
            registration.remove();
        }
        self.shared.lens.remove();
        if let Err(err) = self.shared.source.class_list().remove_1(SOURCE_IMAGE_CLASS) {
            tracing::debug!(err = %Error::from(err), "could not remove marker class");
        }
        tracing::info!(id = %self.shared.lens.id(), "magnifier detached");
    }
}
