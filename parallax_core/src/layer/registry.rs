// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer qualification and per-layer settings.

use alloc::string::String;

use crate::attr::AttrValue;
use crate::config::{DEFAULT_EASING_SPEED, EngineConfig};

/// Element kinds that become layers. Anything else is skipped.
pub const LAYER_TAGS: [&str; 11] = [
    "div", "ol", "ul", "li", "section", "canvas", "img", "svg", "figure", "article", "p",
];

/// Names of the per-layer override attributes, without any host prefix.
pub const OVERRIDE_NAMES: [&str; 5] = ["grow", "speed", "overflow", "invertx", "inverty"];

/// Returns whether an element with this tag qualifies as a layer.
///
/// Matching ignores ASCII case, so `DIV` and `div` both qualify.
#[must_use]
pub fn is_layer_tag(tag: &str) -> bool {
    LAYER_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Raw override values read from a layer element.
///
/// Each field is `None` when the attribute is absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerOverrides {
    /// `grow`
    pub grow: Option<AttrValue>,
    /// `speed`
    pub speed: Option<AttrValue>,
    /// `overflow`
    pub overflow: Option<AttrValue>,
    /// `invertx`
    pub invert_x: Option<AttrValue>,
    /// `inverty`
    pub invert_y: Option<AttrValue>,
}

impl LayerOverrides {
    /// Reads and coerces every override through `lookup`, which receives the
    /// bare attribute name (`"grow"`, `"invertx"`, ...).
    pub fn read(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let [grow, speed, overflow, invert_x, invert_y] =
            OVERRIDE_NAMES.map(|name| lookup(name).map(|raw| AttrValue::coerce(&raw)));
        Self {
            grow,
            speed,
            overflow,
            invert_x,
            invert_y,
        }
    }

    /// Resolves the overrides over the instance defaults in `config`.
    ///
    /// - `grow` takes any numeric reading (`null` is `0`); text falls back to
    ///   the instance default.
    /// - `speed` takes the numeric reading as is; see
    ///   [`LayerSettings::effective_speed`] for what happens with zero or
    ///   `NaN`.
    /// - `overflow` allows overflow only for an exact `true`. `null`, numbers
    ///   and text all mean "clamp".
    /// - `invertx`/`inverty` use loose truthiness.
    #[must_use]
    pub fn resolve(&self, config: &EngineConfig) -> LayerSettings {
        let grow = match &self.grow {
            None | Some(AttrValue::Text(_)) => config.layer_grow_size,
            Some(v) => v.to_number(),
        };
        LayerSettings {
            grow,
            speed: self
                .speed
                .as_ref()
                .map_or(config.easing_speed, AttrValue::to_number),
            allow_overflow: self
                .overflow
                .as_ref()
                .map_or(config.allow_overflow, AttrValue::is_true),
            invert_x: self
                .invert_x
                .as_ref()
                .map_or(config.invert_x, AttrValue::truthy),
            invert_y: self
                .invert_y
                .as_ref()
                .map_or(config.invert_y, AttrValue::truthy),
        }
    }
}

/// Resolved per-layer settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSettings {
    /// Grow step; the layer at index `i` grows by `grow * (i + 1)`.
    pub grow: f64,
    /// Per-tick easing factor.
    pub speed: f64,
    /// Whether the layer may travel past the container edges.
    pub allow_overflow: bool,
    /// Mirrors horizontal travel.
    pub invert_x: bool,
    /// Mirrors vertical travel.
    pub invert_y: bool,
}

impl LayerSettings {
    /// Settings taken straight from the instance defaults.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        LayerOverrides::default().resolve(config)
    }

    /// Returns the easing factor used during a tick.
    ///
    /// A speed of zero or `NaN` would freeze the layer, so those fall back to
    /// [`DEFAULT_EASING_SPEED`]. Any other value, in range or not, is used as
    /// given.
    #[must_use]
    pub fn effective_speed(&self) -> f64 {
        if self.speed == 0.0 || self.speed.is_nan() {
            DEFAULT_EASING_SPEED
        } else {
            self.speed
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> LayerOverrides {
        LayerOverrides::read(|name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn reads_each_override_name_once() {
        let mut asked = alloc::vec::Vec::new();
        let read = LayerOverrides::read(|name| {
            asked.push(name.to_string());
            (name == "inverty").then(|| "true".to_string())
        });
        assert_eq!(asked, OVERRIDE_NAMES);
        assert_eq!(read.invert_y, Some(AttrValue::Bool(true)));
        assert_eq!(read.grow, None);
    }

    #[test]
    fn tag_filter() {
        for tag in ["div", "IMG", "Section", "svg", "p"] {
            assert!(is_layer_tag(tag), "{tag} should qualify");
        }
        for tag in ["span", "script", "a", "video", ""] {
            assert!(!is_layer_tag(tag), "{tag} should not qualify");
        }
    }

    #[test]
    fn missing_attributes_fall_back_to_config() {
        let config = EngineConfig::default();
        let settings = overrides(&[]).resolve(&config);
        assert_eq!(settings, LayerSettings::from_config(&config));
        assert_eq!(settings.grow, 50.0);
        assert!(settings.allow_overflow);
    }

    #[test]
    fn attribute_coercion() {
        let config = EngineConfig::default();
        let o = overrides(&[
            ("grow", "42"),
            ("speed", "0.5"),
            ("invertx", "true"),
            ("inverty", "none"),
        ]);
        assert_eq!(o.grow, Some(AttrValue::Number(42.0)));
        assert_eq!(o.invert_x, Some(AttrValue::Bool(true)));
        assert_eq!(o.invert_y, Some(AttrValue::Text("none".into())));

        let s = o.resolve(&config);
        assert_eq!(s.grow, 42.0);
        assert_eq!(s.speed, 0.5);
        assert!(s.invert_x);
        assert!(s.invert_y, "non-empty text is truthy");
    }

    #[test]
    fn overflow_only_allows_exact_true() {
        let config = EngineConfig::default();
        for raw in ["null", "1", "yes", "false"] {
            let s = overrides(&[("overflow", raw)]).resolve(&config);
            assert!(!s.allow_overflow, "{raw} must clamp");
        }
        let s = overrides(&[("overflow", "true")]).resolve(&config);
        assert!(s.allow_overflow);
    }

    #[test]
    fn text_grow_falls_back_and_null_grow_is_zero() {
        let config = EngineConfig::default();
        assert_eq!(overrides(&[("grow", "big")]).resolve(&config).grow, 50.0);
        assert_eq!(overrides(&[("grow", "null")]).resolve(&config).grow, 0.0);
    }

    #[test]
    fn degenerate_speed_uses_default_during_tick() {
        let config = EngineConfig::default();
        let zero = overrides(&[("speed", "0")]).resolve(&config);
        assert_eq!(zero.speed, 0.0);
        assert_eq!(zero.effective_speed(), DEFAULT_EASING_SPEED);

        let text = overrides(&[("speed", "fast")]).resolve(&config);
        assert!(text.speed.is_nan());
        assert_eq!(text.effective_speed(), DEFAULT_EASING_SPEED);

        let big = overrides(&[("speed", "3")]).resolve(&config);
        assert_eq!(big.effective_speed(), 3.0, "out of range is kept");
    }
}
