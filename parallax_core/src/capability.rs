// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform-capability detection.
//!
//! The host is asked, once, which of a fixed list of (possibly vendor
//! prefixed) transform properties it understands. The first one present wins
//! and implies 2D support; 3D support is then confirmed by applying a
//! `translate3d` value to a scratch element and checking that the computed
//! style is neither empty nor `none`.
//!
//! The resolved [`CapabilityDescriptor`] is stored by the engine and never
//! re-probed per frame.

use alloc::string::String;

/// A transform property under its scripting and stylesheet names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransformProperty {
    /// Name as a style-object key (`WebkitTransform`).
    pub script_name: &'static str,
    /// Name as a CSS property (`-webkit-transform`).
    pub css_name: &'static str,
}

/// Transform properties in probe order.
pub const TRANSFORM_PROPERTIES: [TransformProperty; 5] = [
    TransformProperty {
        script_name: "transform",
        css_name: "transform",
    },
    TransformProperty {
        script_name: "WebkitTransform",
        css_name: "-webkit-transform",
    },
    TransformProperty {
        script_name: "MozTransform",
        css_name: "-moz-transform",
    },
    TransformProperty {
        script_name: "msTransform",
        css_name: "-ms-transform",
    },
    TransformProperty {
        script_name: "OTransform",
        css_name: "-o-transform",
    },
];

/// Value applied to the scratch element when confirming 3D support.
pub const PROBE_3D_VALUE: &str = "translate3d(1px,1px,1px)";

/// The host side of capability detection.
pub trait StyleProbe {
    /// Returns whether a fresh element's style object exposes `property`.
    fn has_property(&self, property: &TransformProperty) -> bool;

    /// Attaches a scratch element, sets `property` to `value`, reads the
    /// computed value back and detaches the element again.
    ///
    /// Returns `None` if the host cannot compute styles.
    fn computed_after_set(
        &mut self,
        property: &TransformProperty,
        value: &str,
    ) -> Option<String>;
}

/// How layer offsets get written, in order of preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderPath {
    /// `translate3d(x, y, 0)` through the detected transform property.
    Translate3d,
    /// `translate(x, y)` through the detected transform property.
    Translate2d,
    /// Plain `left`/`top` offsets.
    Offset,
}

/// The result of a capability probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    /// The transform property to write through.
    pub property: TransformProperty,
    /// Whether 2D transforms are available.
    pub supports_2d: bool,
    /// Whether 3D transforms are available.
    pub supports_3d: bool,
}

impl CapabilityDescriptor {
    /// A descriptor for hosts without any transform support.
    pub const NONE: Self = Self {
        property: TRANSFORM_PROPERTIES[0],
        supports_2d: false,
        supports_3d: false,
    };

    /// A descriptor for hosts with unprefixed 3D transforms.
    pub const FULL_3D: Self = Self {
        property: TRANSFORM_PROPERTIES[0],
        supports_2d: true,
        supports_3d: true,
    };

    /// Returns the best available way to position a layer.
    #[must_use]
    pub const fn render_path(&self) -> RenderPath {
        if self.supports_3d {
            RenderPath::Translate3d
        } else if self.supports_2d {
            RenderPath::Translate2d
        } else {
            RenderPath::Offset
        }
    }
}

impl Default for CapabilityDescriptor {
    fn default() -> Self {
        Self::NONE
    }
}

/// Runs the capability probe against `host`.
///
/// Never fails: a host without any transform property yields
/// [`CapabilityDescriptor::NONE`].
pub fn probe(host: &mut impl StyleProbe) -> CapabilityDescriptor {
    let Some(property) = TRANSFORM_PROPERTIES
        .iter()
        .copied()
        .find(|p| host.has_property(p))
    else {
        return CapabilityDescriptor::NONE;
    };

    let supports_3d = host
        .computed_after_set(&property, PROBE_3D_VALUE)
        .is_some_and(|value| !value.is_empty() && value != "none");

    CapabilityDescriptor {
        property,
        supports_2d: true,
        supports_3d,
    }
}
