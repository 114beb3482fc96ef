// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance-level options.
//!
//! [`EngineConfig`] holds the defaults every layer inherits unless it carries
//! its own override attribute. Options are changed by merging an
//! [`OptionsPatch`]; fields left as `None` keep their current value.
//!
//! Out-of-range values (negative grow, speed above 1) are accepted as given.
//! Callers are responsible for sane inputs; nothing here clamps.

use core::str::FromStr;

use crate::attr::AttrValue;

/// Easing speed used when a layer's own speed is zero or not a number.
pub const DEFAULT_EASING_SPEED: f64 = 0.075;

/// Instance-level engine options.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct EngineConfig {
    /// Subtracted from vertical orientation input to account for the usual
    /// viewing angle of a handheld device (0 means held flat).
    pub angle_offset: f64,
    /// Scales orientation input; higher is more sensitive.
    pub motion_factor: f64,
    /// Default per-tick easing factor in `(0, 1]`; higher converges faster.
    pub easing_speed: f64,
    /// Default amount each layer grows per depth step.
    pub layer_grow_size: f64,
    /// Whether layers may travel past the container edges.
    pub allow_overflow: bool,
    /// Mirrors horizontal travel for all layers.
    pub invert_x: bool,
    /// Mirrors vertical travel for all layers.
    pub invert_y: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            angle_offset: 1.0,
            motion_factor: 0.075,
            easing_speed: DEFAULT_EASING_SPEED,
            layer_grow_size: 50.0,
            allow_overflow: true,
            invert_x: false,
            invert_y: false,
        }
    }
}

impl EngineConfig {
    /// Overwrites every field that is present in `patch`.
    pub fn merge(&mut self, patch: &OptionsPatch) {
        if let Some(v) = patch.angle_offset {
            self.angle_offset = v;
        }
        if let Some(v) = patch.motion_factor {
            self.motion_factor = v;
        }
        if let Some(v) = patch.easing_speed {
            self.easing_speed = v;
        }
        if let Some(v) = patch.layer_grow_size {
            self.layer_grow_size = v;
        }
        if let Some(v) = patch.allow_overflow {
            self.allow_overflow = v;
        }
        if let Some(v) = patch.invert_x {
            self.invert_x = v;
        }
        if let Some(v) = patch.invert_y {
            self.invert_y = v;
        }
    }

    /// Returns the current value of a single option.
    #[must_use]
    pub fn get(&self, key: OptionKey) -> AttrValue {
        match key {
            OptionKey::AngleOffset => self.angle_offset.into(),
            OptionKey::MotionFactor => self.motion_factor.into(),
            OptionKey::EasingSpeed => self.easing_speed.into(),
            OptionKey::LayerGrowSize => self.layer_grow_size.into(),
            OptionKey::AllowOverflow => self.allow_overflow.into(),
            OptionKey::InvertX => self.invert_x.into(),
            OptionKey::InvertY => self.invert_y.into(),
        }
    }

    /// Looks up an option by name, returning `default` for unknown names.
    ///
    /// Both the camelCase names (`easingSpeed`) and the field names
    /// (`easing_speed`) are accepted.
    #[must_use]
    pub fn get_or(&self, name: &str, default: AttrValue) -> AttrValue {
        match name.parse::<OptionKey>() {
            Ok(key) => self.get(key),
            Err(UnknownOption) => default,
        }
    }
}

/// A partial set of options, merged over the current [`EngineConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct OptionsPatch {
    /// See [`EngineConfig::angle_offset`].
    pub angle_offset: Option<f64>,
    /// See [`EngineConfig::motion_factor`].
    pub motion_factor: Option<f64>,
    /// See [`EngineConfig::easing_speed`].
    pub easing_speed: Option<f64>,
    /// See [`EngineConfig::layer_grow_size`].
    pub layer_grow_size: Option<f64>,
    /// See [`EngineConfig::allow_overflow`].
    pub allow_overflow: Option<bool>,
    /// See [`EngineConfig::invert_x`].
    pub invert_x: Option<bool>,
    /// See [`EngineConfig::invert_y`].
    pub invert_y: Option<bool>,
}

impl OptionsPatch {
    /// Returns whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Names of the instance-level options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `angleOffset`
    AngleOffset,
    /// `motionFactor`
    MotionFactor,
    /// `easingSpeed`
    EasingSpeed,
    /// `layerGrowSize`
    LayerGrowSize,
    /// `allowOverflow`
    AllowOverflow,
    /// `invertX`
    InvertX,
    /// `invertY`
    InvertY,
}

impl OptionKey {
    /// All keys, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::AngleOffset,
        Self::MotionFactor,
        Self::EasingSpeed,
        Self::LayerGrowSize,
        Self::AllowOverflow,
        Self::InvertX,
        Self::InvertY,
    ];

    /// Returns the camelCase option name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AngleOffset => "angleOffset",
            Self::MotionFactor => "motionFactor",
            Self::EasingSpeed => "easingSpeed",
            Self::LayerGrowSize => "layerGrowSize",
            Self::AllowOverflow => "allowOverflow",
            Self::InvertX => "invertX",
            Self::InvertY => "invertY",
        }
    }
}

/// Returned when parsing an option name that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownOption;

impl FromStr for OptionKey {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "angleOffset" | "angle_offset" => Self::AngleOffset,
            "motionFactor" | "motion_factor" => Self::MotionFactor,
            "easingSpeed" | "easing_speed" => Self::EasingSpeed,
            "layerGrowSize" | "layer_grow_size" => Self::LayerGrowSize,
            "allowOverflow" | "allow_overflow" => Self::AllowOverflow,
            "invertX" | "invert_x" => Self::InvertX,
            "invertY" | "invert_y" => Self::InvertY,
            _ => return Err(UnknownOption),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.layer_grow_size, 50.0);
        assert_eq!(config.easing_speed, 0.075);
        assert!(config.allow_overflow, "overflow is allowed unless overridden");
        assert!(!config.invert_x && !config.invert_y);
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut config = EngineConfig::default();
        config.merge(&OptionsPatch {
            easing_speed: Some(0.5),
            invert_y: Some(true),
            ..OptionsPatch::default()
        });
        assert_eq!(config.easing_speed, 0.5);
        assert!(config.invert_y);
        assert_eq!(config.layer_grow_size, 50.0);
        assert_eq!(config.angle_offset, 1.0);
    }

    #[test]
    fn merge_accepts_out_of_range_values() {
        let mut config = EngineConfig::default();
        config.merge(&OptionsPatch {
            easing_speed: Some(4.0),
            layer_grow_size: Some(-10.0),
            ..OptionsPatch::default()
        });
        assert_eq!(config.easing_speed, 4.0);
        assert_eq!(config.layer_grow_size, -10.0);
    }

    #[test]
    fn get_or_known_and_unknown_names() {
        let config = EngineConfig::default();
        assert_eq!(
            config.get_or("layerGrowSize", AttrValue::Null),
            AttrValue::Number(50.0)
        );
        assert_eq!(
            config.get_or("allow_overflow", AttrValue::Null),
            AttrValue::Bool(true)
        );
        assert_eq!(
            config.get_or("bogus", AttrValue::Number(7.0)),
            AttrValue::Number(7.0)
        );
    }

    #[test]
    fn key_names_round_trip() {
        for key in OptionKey::ALL {
            assert_eq!(key.name().parse::<OptionKey>(), Ok(key));
        }
    }

    #[test]
    fn empty_patch() {
        assert!(OptionsPatch::default().is_empty());
        let patch = OptionsPatch {
            invert_x: Some(false),
            ..OptionsPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
