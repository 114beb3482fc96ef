// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform-capability probe over a scratch `<div>`.

use alloc::string::String;

use js_sys::Reflect;
use parallax_core::capability::{CapabilityDescriptor, StyleProbe, TransformProperty, probe};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::dom::style_of;

/// A [`StyleProbe`] that tests a detached scratch element.
pub struct DomProbe {
    window: Window,
    document: Document,
    scratch: Element,
}

impl core::fmt::Debug for DomProbe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomProbe").finish_non_exhaustive()
    }
}

impl DomProbe {
    /// Creates a probe with a fresh scratch element.
    pub fn new(window: &Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let scratch = document.create_element("div")?;
        Ok(Self {
            window: window.clone(),
            document,
            scratch,
        })
    }

    /// Runs the probe.
    pub fn run(mut self) -> CapabilityDescriptor {
        probe(&mut self)
    }
}

impl StyleProbe for DomProbe {
    fn has_property(&self, property: &TransformProperty) -> bool {
        style_of(&self.scratch).is_some_and(|style| {
            Reflect::get(&style, &JsValue::from_str(property.script_name))
                .is_ok_and(|value| !value.is_undefined())
        })
    }

    fn computed_after_set(
        &mut self,
        property: &TransformProperty,
        value: &str,
    ) -> Option<String> {
        let body = self.document.body()?;
        body.append_child(&self.scratch).ok()?;

        let computed = style_of(&self.scratch)
            .and_then(|style| style.set_property(property.css_name, value).ok())
            .and_then(|()| self.window.get_computed_style(&self.scratch).ok().flatten())
            .and_then(|style| style.get_property_value(property.css_name).ok());

        let _ = body.remove_child(&self.scratch);
        computed
    }
}
