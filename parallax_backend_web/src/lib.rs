// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for parallax.
//!
//! This crate connects [`parallax_core`] to the browser:
//!
//! - [`DomHost`]: element lookup, `data-*` overrides, rendered boxes, page
//!   scroll, focus and screen rotation
//! - [`DomProbe`]: transform-capability probe over a scratch element
//! - [`DomPresenter`]: inline style writes
//! - [`WebDriver`]: `requestAnimationFrame` ticks (with a timer fallback) and
//!   window listeners
//! - [`ParallaxHandle`]: the JavaScript-facing object
//!
//! From JavaScript:
//!
//! ```js
//! const parallax = new ParallaxHandle("stage", { easingSpeed: 0.1 });
//! parallax.enable();
//! parallax.getOption("layerGrowSize", 50);
//! parallax.disable();
//! ```

#![no_std]

extern crate alloc;

mod dom;
mod driver;
mod events;
mod presenter;
mod probe;
mod raf;

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

pub use dom::DomHost;
pub use driver::{WebDriver, WebParallax, bind};
pub use events::{WindowEvents, event_name, mouse_position, orientation_sample};
pub use parallax_core::backend::Presenter;
pub use presenter::DomPresenter;
pub use probe::DomProbe;
pub use raf::{FALLBACK_INTERVAL_MS, RafScheduler, TickHandle};

use parallax_core::attr::AttrValue;
use parallax_core::config::{OptionKey, OptionsPatch};
use parallax_core::{ContainerRef, Parallax};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Decodes a JS options object.
///
/// Anything that is not an object (including `undefined` and `null`) counts
/// as no options. Unknown keys are ignored; known keys with the wrong type are
/// an error.
pub fn decode_options(options: JsValue) -> Result<OptionsPatch, JsValue> {
    if !options.is_object() {
        return Ok(OptionsPatch::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

/// Interprets a JS container argument: a string is an element id, an
/// element is used directly, anything else resolves to nothing.
#[must_use]
pub fn container_ref(container: JsValue) -> ContainerRef<Element> {
    if let Some(id) = container.as_string() {
        return ContainerRef::Id(id);
    }
    match container.dyn_into::<Element>() {
        Ok(element) => ContainerRef::Element(element),
        Err(_) => ContainerRef::Id(String::new()),
    }
}

/// Converts an option value to JS.
#[must_use]
pub fn attr_to_js(value: &AttrValue) -> JsValue {
    match value {
        AttrValue::Bool(b) => JsValue::from_bool(*b),
        AttrValue::Null => JsValue::NULL,
        AttrValue::Number(n) => JsValue::from_f64(*n),
        AttrValue::Text(s) => JsValue::from_str(s),
    }
}

/// A parallax engine bound to one container, as seen from JavaScript.
///
/// Dropping (or `free()`-ing) the handle disables the engine.
#[wasm_bindgen]
pub struct ParallaxHandle {
    engine: Rc<RefCell<WebParallax>>,
}

impl core::fmt::Debug for ParallaxHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParallaxHandle")
            .field("engine", &self.engine)
            .finish()
    }
}

#[wasm_bindgen]
impl ParallaxHandle {
    /// Creates an engine for `container` (an element or an element id).
    ///
    /// A container that cannot be found yields an inert engine, not an
    /// error. Fails only when there is no document or `options` is
    /// malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(container: JsValue, options: JsValue) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let patch = decode_options(options)?;
        let capability = DomProbe::new(&window)?.run();
        let host = DomHost::new(window.clone())?;

        let engine = Rc::new(RefCell::new(Parallax::new(
            host,
            DomPresenter::new(capability),
            WebDriver::new(&window),
            container_ref(container),
            &patch,
        )));
        bind(&engine);
        Ok(Self { engine })
    }

    /// Starts listening and animating. Does nothing if already enabled.
    pub fn enable(&self) {
        self.engine.borrow_mut().enable();
    }

    /// Stops listening and animating. Does nothing if already disabled.
    pub fn disable(&self) {
        self.engine.borrow_mut().disable();
    }

    /// Merges `options` over the current options and lays the layers out
    /// again.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&self, options: JsValue) -> Result<(), JsValue> {
        let patch = decode_options(options)?;
        self.engine.borrow_mut().set_options(&patch);
        Ok(())
    }

    /// Returns an option by name, or `fallback` for unknown names.
    #[wasm_bindgen(js_name = getOption)]
    pub fn get_option(&self, name: &str, fallback: JsValue) -> JsValue {
        match name.parse::<OptionKey>() {
            Ok(key) => attr_to_js(&self.engine.borrow().config().get(key)),
            Err(_) => fallback,
        }
    }

    /// Re-measures the container and lays the layers out again.
    #[wasm_bindgen(js_name = updateLayers)]
    pub fn update_layers(&self) {
        self.engine.borrow_mut().on_resize();
    }

    /// Returns whether the engine is enabled.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.engine.borrow().is_active()
    }

    /// Returns the number of registered layers.
    #[wasm_bindgen(js_name = layerCount)]
    pub fn layer_count(&self) -> u32 {
        u32::try_from(self.engine.borrow().layers().len()).unwrap_or(u32::MAX)
    }
}

impl Drop for ParallaxHandle {
    fn drop(&mut self) {
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.disable();
        }
    }
}
