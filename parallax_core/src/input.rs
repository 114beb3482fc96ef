// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input normalization.
//!
//! Pointer positions and device-orientation readings are both reduced to an
//! [`InputVector`]: roughly `[-1, 1]` on each axis while the pointer is over
//! the container, unclamped beyond it.
//!
//! Orientation readings depend on how the screen is rotated. The rotation
//! itself is resolved by the host; [`ScreenRotation::from_orientation_type`]
//! and [`is_mobile_user_agent`] are the pure pieces of that resolution.

use kurbo::{Point, Vec2};

use crate::config::EngineConfig;
use crate::geometry::ContainerGeometry;

/// Normalized input, `x` to the right and `y` down.
pub type InputVector = Vec2;

/// Damping applied to raw tilt angles before the configured motion factor.
pub const ORIENTATION_DAMPING: f64 = 0.35;

/// Screen rotation relative to the device's natural orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScreenRotation {
    /// 0°.
    #[default]
    Portrait,
    /// 180°.
    PortraitFlipped,
    /// 90°.
    Landscape,
    /// -90°.
    LandscapeFlipped,
}

impl ScreenRotation {
    /// Maps a rotation in degrees; anything other than ±90 or ±180 is
    /// [`Portrait`](Self::Portrait).
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        if degrees == 90.0 || degrees == -270.0 {
            Self::Landscape
        } else if degrees == -90.0 || degrees == 270.0 {
            Self::LandscapeFlipped
        } else if degrees == 180.0 || degrees == -180.0 {
            Self::PortraitFlipped
        } else {
            Self::Portrait
        }
    }

    /// Maps a screen orientation type string (`"landscape-primary"`, ...).
    #[must_use]
    pub fn from_orientation_type(kind: &str) -> Option<Self> {
        match kind {
            "portrait-primary" => Some(Self::Portrait),
            "portrait-secondary" => Some(Self::PortraitFlipped),
            "landscape-primary" => Some(Self::Landscape),
            "landscape-secondary" => Some(Self::LandscapeFlipped),
            _ => None,
        }
    }

    /// Returns the rotation in degrees.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Portrait => 0,
            Self::PortraitFlipped => 180,
            Self::Landscape => 90,
            Self::LandscapeFlipped => -90,
        }
    }

    /// Returns whether the long axis of the screen is horizontal.
    #[must_use]
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape | Self::LandscapeFlipped)
    }
}

/// Agent fragments that mark a handheld device.
const MOBILE_AGENTS: [&str; 12] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "phone",
    "playbook",
    "xda",
    "xiino",
    "silk",
    "mobile",
];

/// Returns whether a user-agent string looks like a handheld device.
///
/// Matching is case-insensitive.
#[must_use]
pub fn is_mobile_user_agent(agent: &str) -> bool {
    let agent = agent.to_ascii_lowercase();
    MOBILE_AGENTS.iter().any(|needle| agent.contains(needle))
}

/// Resolves the rotation when the platform only reports whether the screen is
/// landscape.
///
/// Only handheld devices are taken to be rotated; a landscape desktop screen
/// is in its natural orientation.
#[must_use]
pub fn fallback_rotation(landscape: bool, user_agent: &str) -> ScreenRotation {
    if landscape && is_mobile_user_agent(user_agent) {
        ScreenRotation::Landscape
    } else {
        ScreenRotation::Portrait
    }
}

/// Picks the pointer position from a pointer event's page and client
/// coordinates.
///
/// Each axis uses the page coordinate unless it is zero or `NaN`, then the
/// client coordinate, and is floored at zero.
#[must_use]
pub fn pointer_position(page: Point, client: Point) -> Point {
    fn pick(page: f64, client: f64) -> f64 {
        let value = if page != 0.0 && !page.is_nan() {
            page
        } else {
            client
        };
        // `f64::max` ignores a NaN operand.
        value.max(0.0)
    }
    Point::new(pick(page.x, client.x), pick(page.y, client.y))
}

/// One device-orientation reading, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    /// Front-to-back tilt.
    pub beta: Option<f64>,
    /// Left-to-right tilt.
    pub gamma: Option<f64>,
}

/// Normalizes a pointer position (page coordinates) against the container.
///
/// A zero range (empty container) yields a zero component rather than a
/// division by zero.
#[must_use]
pub fn from_pointer(page: Point, geometry: &ContainerGeometry) -> InputVector {
    let rel = page - geometry.page_center();
    Vec2::new(
        normalize(rel.x, geometry.range.x),
        normalize(rel.y, geometry.range.y),
    )
}

fn normalize(delta: f64, range: f64) -> f64 {
    if range > 0.0 { delta / range } else { 0.0 }
}

/// Normalizes a device-orientation reading.
///
/// At 0° and 180° the left-right tilt drives horizontal input and the
/// front-back tilt drives vertical input; at ±90° the axes swap. Both are
/// damped by [`ORIENTATION_DAMPING`]. At -90° the horizontal sign is flipped,
/// at 90° the vertical one. The result is scaled by
/// [`motion_factor`](EngineConfig::motion_factor) and
/// [`angle_offset`](EngineConfig::angle_offset) is subtracted from `y`.
///
/// Returns a zero vector when either tilt is missing.
#[must_use]
pub fn from_orientation(
    sample: OrientationSample,
    config: &EngineConfig,
    rotation: ScreenRotation,
) -> InputVector {
    let (Some(beta), Some(gamma)) = (sample.beta, sample.gamma) else {
        return Vec2::ZERO;
    };

    let (mut horizontal, mut vertical) = if rotation.is_landscape() {
        (beta, gamma)
    } else {
        (gamma, beta)
    };
    horizontal *= ORIENTATION_DAMPING;
    vertical *= ORIENTATION_DAMPING;

    match rotation {
        ScreenRotation::LandscapeFlipped => horizontal = -horizontal,
        ScreenRotation::Landscape => vertical = -vertical,
        ScreenRotation::Portrait | ScreenRotation::PortraitFlipped => {}
    }

    Vec2::new(
        horizontal * config.motion_factor,
        vertical * config.motion_factor - config.angle_offset,
    )
}
