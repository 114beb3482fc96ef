// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM queries.
//!
//! [`DomHost`] answers the engine's [`Host`] queries from the live document:
//! element lookup, children, `data-*` attributes, computed position, rendered
//! boxes, page scroll, focus and screen rotation.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use js_sys::Reflect;
use kurbo::{Size, Vec2};
use parallax_core::geometry::{ElementBox, OffsetMetrics, page_position, page_scroll};
use parallax_core::host::Host;
use parallax_core::input::{ScreenRotation, fallback_rotation};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

/// Media query matched by a landscape screen.
const LANDSCAPE_QUERY: &str = "(orientation: landscape)";

/// Reads the inline style object of any element, HTML or SVG.
pub(crate) fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
    Reflect::get(element, &JsValue::from_str("style"))
        .ok()?
        .dyn_into::<CssStyleDeclaration>()
        .ok()
}

/// Reads a property of a JS object if it is present at all.
fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    let key = JsValue::from_str(name);
    if !Reflect::has(target, &key).unwrap_or(false) {
        return None;
    }
    Reflect::get(target, &key).ok()
}

/// A [`Host`] backed by the browser document.
pub struct DomHost {
    window: Window,
    document: Document,
}

impl core::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomHost").finish_non_exhaustive()
    }
}

impl DomHost {
    /// Creates a host for `window`'s document.
    ///
    /// Fails if the window has no document.
    pub fn new(window: Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self { window, document })
    }

    /// Returns the window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Resolves the rotation from `screen.orientation`, or the prefixed
    /// variants, when the screen reports one.
    ///
    /// The value is either an orientation type string or an object carrying
    /// one under `type`.
    fn screen_orientation(&self) -> Option<ScreenRotation> {
        let screen = self.window.screen().ok()?;
        let value = ["orientation", "mozOrientation", "msOrientation"]
            .iter()
            .find_map(|name| property(&screen, name).filter(JsValue::is_truthy))?;
        let kind = value
            .as_string()
            .or_else(|| property(&value, "type").and_then(|t| t.as_string()))
            .unwrap_or_default();
        Some(ScreenRotation::from_orientation_type(&kind).unwrap_or_default())
    }

    /// Whether the screen looks landscape when no orientation is reported.
    fn looks_landscape(&self) -> bool {
        if property(&self.window, "matchMedia").is_some()
            && let Ok(Some(query)) = self.window.match_media(LANDSCAPE_QUERY)
            && query.matches()
        {
            return true;
        }
        let Ok(screen) = self.window.screen() else {
            return false;
        };
        let width = screen.avail_width().unwrap_or(0);
        let height = screen.avail_height().unwrap_or(0);
        width > height
    }

    fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }
}

impl Host for DomHost {
    type Element = Element;

    fn lookup(&self, id: &str) -> Option<Element> {
        // An empty id never resolves.
        if id.is_empty() {
            return None;
        }
        self.document.get_element_by_id(id)
    }

    fn children(&self, element: &Element) -> Vec<Element> {
        let children = element.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(&format!("data-{name}"))
    }

    fn is_fixed(&self, element: &Element) -> bool {
        self.window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("position").ok())
            .is_some_and(|position| position == "fixed")
    }

    fn element_box(&self, element: &Element) -> ElementBox {
        let size = Size::new(
            f64::from(element.client_width().max(0)),
            f64::from(element.client_height().max(0)),
        );

        let mut chain = Vec::new();
        let mut current = Some(element.clone());
        while let Some(el) = current {
            let html = el.dyn_ref::<HtmlElement>();
            chain.push(OffsetMetrics {
                offset: html.map_or(Vec2::ZERO, |h| {
                    Vec2::new(f64::from(h.offset_left()), f64::from(h.offset_top()))
                }),
                scroll: Vec2::new(f64::from(el.scroll_left()), f64::from(el.scroll_top())),
                client: Vec2::new(f64::from(el.client_left()), f64::from(el.client_top())),
            });
            current = html.and_then(HtmlElement::offset_parent);
        }

        ElementBox {
            size,
            origin: page_position(chain),
        }
    }

    fn scroll_offset(&self) -> Vec2 {
        let root = self.document.document_element();
        let body = self.document.body();
        let first_nonzero = |values: [f64; 3]| values.into_iter().find(|v| *v != 0.0).unwrap_or(0.0);

        let page = Vec2::new(
            first_nonzero([
                self.window.page_x_offset().unwrap_or(0.0),
                root.as_ref().map_or(0.0, |r| f64::from(r.scroll_left())),
                body.as_ref().map_or(0.0, |b| f64::from(b.scroll_left())),
            ]),
            first_nonzero([
                self.window.page_y_offset().unwrap_or(0.0),
                root.as_ref().map_or(0.0, |r| f64::from(r.scroll_top())),
                body.as_ref().map_or(0.0, |b| f64::from(b.scroll_top())),
            ]),
        );
        let client = root.as_ref().map_or(Vec2::ZERO, |r| {
            Vec2::new(f64::from(r.client_left()), f64::from(r.client_top()))
        });
        page_scroll(page, client)
    }

    fn has_focus(&self) -> bool {
        self.document.has_focus().unwrap_or(false)
    }

    fn screen_rotation(&self) -> ScreenRotation {
        if let Some(degrees) = property(&self.window, "orientation") {
            return ScreenRotation::from_degrees(degrees.as_f64().unwrap_or(0.0));
        }
        if let Some(rotation) = self.screen_orientation() {
            return rotation;
        }
        fallback_rotation(self.looks_landscape(), &self.user_agent())
    }
}
