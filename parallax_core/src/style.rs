// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style values written by presenters.
//!
//! Presenters call these helpers so every backend formats sizes, stacking and
//! positions the same way. Positioning picks exactly one of three paths from
//! the [`CapabilityDescriptor`]: a 3D translate, a 2D translate, or plain
//! `left`/`top` offsets.

use alloc::format;
use alloc::string::String;

use kurbo::Vec2;

use crate::capability::{CapabilityDescriptor, RenderPath};
use crate::layer::LayerState;

/// Style properties every layer receives along with its z-index.
pub const STACKING_PROPERTIES: [(&str, &str); 2] = [("display", "block"), ("position", "absolute")];

/// Acceleration hints applied when 3D transforms are supported.
///
/// Each entry is a `(property, value)` pair; the prefixed variants are
/// written alongside the standard ones.
pub const ACCELERATION_HINTS: [(&str, &str); 9] = [
    ("-webkit-transform", "translate3d(0,0,0)"),
    ("-webkit-transform-style", "preserve-3d"),
    ("-webkit-backface-visibility", "hidden"),
    ("-moz-transform", "translate3d(0,0,0)"),
    ("-moz-transform-style", "preserve-3d"),
    ("-moz-backface-visibility", "hidden"),
    ("transform", "translate3d(0,0,0)"),
    ("transform-style", "preserve-3d"),
    ("backface-visibility", "hidden"),
];

/// Formats a length in CSS pixels.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Returns the z-index written for a layer: its index, but at least 1.
///
/// The first two layers therefore share z-index 1.
#[must_use]
pub fn z_index(state: &LayerState) -> u32 {
    state.index.max(1)
}

/// How a layer's offset is written.
#[derive(Clone, Debug, PartialEq)]
pub enum PositionStyle {
    /// Set the transform property to this value.
    Transform {
        /// CSS name of the transform property.
        property: &'static str,
        /// `translate3d(..)` or `translate(..)`.
        value: String,
    },
    /// Set `left` and `top`.
    Offset {
        /// `left` value.
        left: String,
        /// `top` value.
        top: String,
    },
}

impl PositionStyle {
    /// Chooses the write path for `offset` from `capability`.
    #[must_use]
    pub fn for_offset(offset: Vec2, capability: &CapabilityDescriptor) -> Self {
        let property = capability.property.css_name;
        match capability.render_path() {
            RenderPath::Translate3d => Self::Transform {
                property,
                value: format!("translate3d({}px, {}px, 0)", offset.x, offset.y),
            },
            RenderPath::Translate2d => Self::Transform {
                property,
                value: format!("translate({}px, {}px)", offset.x, offset.y),
            },
            RenderPath::Offset => Self::Offset {
                left: px(offset.x),
                top: px(offset.y),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::capability::TRANSFORM_PROPERTIES;
    use crate::config::EngineConfig;
    use crate::layer::LayerSettings;

    fn state(index: u32) -> LayerState {
        LayerState {
            index,
            z_order: index + 1,
            size: Size::new(450.0, 350.0),
            offset: Vec2::new(-12.5, -40.0),
            settings: LayerSettings::from_config(&EngineConfig::default()),
        }
    }

    #[test]
    fn z_index_has_floor_of_one() {
        assert_eq!(z_index(&state(0)), 1);
        assert_eq!(z_index(&state(1)), 1);
        assert_eq!(z_index(&state(4)), 4);
    }

    #[test]
    fn position_paths() {
        let offset = state(0).offset;

        assert_eq!(
            PositionStyle::for_offset(offset, &CapabilityDescriptor::FULL_3D),
            PositionStyle::Transform {
                property: "transform",
                value: "translate3d(-12.5px, -40px, 0)".into(),
            }
        );

        let webkit_2d = CapabilityDescriptor {
            property: TRANSFORM_PROPERTIES[1],
            supports_2d: true,
            supports_3d: false,
        };
        assert_eq!(
            PositionStyle::for_offset(offset, &webkit_2d),
            PositionStyle::Transform {
                property: "-webkit-transform",
                value: "translate(-12.5px, -40px)".into(),
            }
        );

        assert_eq!(
            PositionStyle::for_offset(offset, &CapabilityDescriptor::NONE),
            PositionStyle::Offset {
                left: "-12.5px".into(),
                top: "-40px".into(),
            }
        );
    }

    #[test]
    fn px_formatting() {
        assert_eq!(px(450.0), "450px");
        assert_eq!(px(0.25), "0.25px");
    }
}
