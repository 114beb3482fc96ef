// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM style writes.
//!
//! Translates [`LayerStore`] state into inline styles on the layer elements,
//! writing only what [`FrameChanges`] lists.

use alloc::string::ToString;

use parallax_core::backend::Presenter;
use parallax_core::capability::CapabilityDescriptor;
use parallax_core::layer::{FrameChanges, LayerStore};
use parallax_core::style::{
    ACCELERATION_HINTS, PositionStyle, STACKING_PROPERTIES, px, z_index,
};
use web_sys::Element;

use crate::dom::style_of;

/// Elements whose `width`/`height` attributes size their content.
const SIZED_BY_ATTRIBUTE: [&str; 2] = ["CANVAS", "IMG"];

/// Writes layer styles through the element's inline style.
#[derive(Debug)]
pub struct DomPresenter {
    capability: CapabilityDescriptor,
}

impl DomPresenter {
    /// Creates a presenter that positions layers with `capability`.
    #[must_use]
    pub fn new(capability: CapabilityDescriptor) -> Self {
        Self { capability }
    }
}

impl Presenter<Element> for DomPresenter {
    fn capability(&self) -> &CapabilityDescriptor {
        &self.capability
    }

    fn accelerate(&mut self, element: &Element) {
        let Some(style) = style_of(element) else {
            return;
        };
        for (property, value) in ACCELERATION_HINTS {
            let _ = style.set_property(property, value);
        }
    }

    fn apply(&mut self, store: &LayerStore<Element>, changes: &FrameChanges) {
        // 1. Stacking
        for &idx in &changes.indexed {
            let Some(style) = style_of(store.element_at(idx)) else {
                continue;
            };
            for (property, value) in STACKING_PROPERTIES {
                let _ = style.set_property(property, value);
            }
            let z = z_index(store.state_at(idx)).to_string();
            let _ = style.set_property("z-index", &z);
        }

        // 2. Sizes
        for &idx in &changes.resized {
            let element = store.element_at(idx);
            let size = store.state_at(idx).size;
            if let Some(style) = style_of(element) {
                let _ = style.set_property("width", &px(size.width));
                let _ = style.set_property("height", &px(size.height));
            }
            if SIZED_BY_ATTRIBUTE
                .iter()
                .any(|tag| element.tag_name().eq_ignore_ascii_case(tag))
            {
                let _ = element.set_attribute("width", &size.width.to_string());
                let _ = element.set_attribute("height", &size.height.to_string());
            }
        }

        // 3. Positions
        for &idx in &changes.moved {
            let Some(style) = style_of(store.element_at(idx)) else {
                continue;
            };
            match PositionStyle::for_offset(store.state_at(idx).offset, &self.capability) {
                PositionStyle::Transform { property, value } => {
                    let _ = style.set_property(property, &value);
                }
                PositionStyle::Offset { left, top } => {
                    let _ = style.set_property("left", &left);
                    let _ = style.set_property("top", &top);
                }
            }
        }
    }
}
