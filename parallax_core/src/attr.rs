// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute values and their coercion rules.
//!
//! Layer overrides arrive as strings (`data-grow="80"`). [`AttrValue::coerce`]
//! turns them into typed values once, and the conversion helpers below
//! reproduce the loose comparisons the per-layer settings rely on:
//!
//! - [`truthy`](AttrValue::truthy) for axis inversion,
//! - [`is_true`](AttrValue::is_true) for the overflow flag, which only counts
//!   an exact boolean `true`,
//! - [`to_number`](AttrValue::to_number) for grow size and easing speed.

use alloc::string::String;
use core::fmt;

/// A coerced attribute or option value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// `"true"` or `"false"`.
    Bool(bool),
    /// `"null"`.
    Null,
    /// A string that reads as a finite number.
    Number(f64),
    /// Anything else, kept verbatim.
    Text(String),
}

impl AttrValue {
    /// Coerces a raw attribute string.
    ///
    /// `"true"`/`"false"` become booleans, `"null"` becomes [`Null`](Self::Null),
    /// strings that parse as a finite number (surrounding whitespace allowed)
    /// become [`Number`](Self::Number), and everything else is kept as text.
    /// Only decimal notation counts as a number: hex and binary literals such
    /// as `"0x10"`, and strings with trailing junk such as `"12px"`, stay text.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            "null" => return Self::Null,
            _ => {}
        }
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw.into()),
        }
    }

    /// Returns whether the value is the boolean `true`, and nothing else.
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Loose truthiness: `false`, `null`, `0`, `NaN` and the empty string are
    /// false; everything else is true.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Null => false,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Loose numeric conversion: `null` and `false` are `0`, `true` is `1`,
    /// text is `NaN`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Null => 0.0,
            Self::Number(n) => *n,
            Self::Text(_) => f64::NAN,
        }
    }

    /// Returns the number if this is a [`Number`](Self::Number).
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Bool`](Self::Bool).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
