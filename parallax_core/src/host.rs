// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform queries the engine depends on.
//!
//! A [`Host`] answers everything the engine needs to know about the
//! presentation tree and the surrounding surface: element lookup, children,
//! attributes, rendered boxes, page scroll, focus and screen rotation. It is
//! read-only; style writes go through [`Presenter`](crate::backend::Presenter).

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::geometry::ElementBox;
use crate::input::ScreenRotation;

/// Read-only access to the host's element tree and surface state.
pub trait Host {
    /// Handle to a host element.
    type Element: Clone;

    /// Looks up an element by identifier.
    fn lookup(&self, id: &str) -> Option<Self::Element>;

    /// Returns the direct children of `element` in document order.
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

    /// Returns the element's tag name, in any case.
    fn tag_name(&self, element: &Self::Element) -> String;

    /// Reads a per-layer override attribute by bare name (`"grow"`, ...).
    ///
    /// The host decides how the name maps onto its own attribute namespace;
    /// the DOM host reads `data-{name}`.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Returns whether the element's computed position is `fixed`.
    fn is_fixed(&self, element: &Self::Element) -> bool;

    /// Returns the element's content size and page position.
    fn element_box(&self, element: &Self::Element) -> ElementBox;

    /// Returns the current page scroll offset.
    fn scroll_offset(&self) -> Vec2;

    /// Returns whether the surface currently has input focus.
    fn has_focus(&self) -> bool;

    /// Returns the current screen rotation.
    fn screen_rotation(&self) -> ScreenRotation;
}
