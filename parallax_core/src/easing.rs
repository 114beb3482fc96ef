// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick layer motion.
//!
//! Every tick, each layer moves a fraction of the way toward a target offset
//! derived from the current input:
//!
//! 1. `overhang = layer size - container size` (never negative for a
//!    non-negative grow).
//! 2. `depth = invert ? overhang : -overhang`, per axis.
//! 3. `target = depth * (input * 50 / 100) - overhang / 2`, so full input
//!    moves a layer by at most half its overhang either side of centered.
//! 4. `offset += (target - offset) * speed`, a first-order low-pass filter.
//!    After `k` ticks toward a fixed target the remaining distance has shrunk
//!    by `(1 - speed)^k`.
//! 5. Unless the layer allows overflow, `offset` is clamped into
//!    `[-overhang, 0]` so no container edge is ever exposed.
//! 6. For a fixed-position container the page scroll is subtracted so the
//!    effect stays anchored to the viewport.
//!
//! The result of step 6 is what the layer keeps as its offset for the next
//! tick.

use kurbo::{Size, Vec2};

use crate::geometry::overhang;
use crate::input::InputVector;
use crate::layer::{FrameChanges, LayerState};

/// Share of the overhang one unit of input travels.
const INPUT_SCALE: f64 = 50.0 / 100.0;

/// Computes the offset a layer is easing toward.
#[must_use]
pub fn target(state: &LayerState, input: InputVector, container: Size) -> Vec2 {
    let over = overhang(state.size, container);
    let depth = Vec2::new(
        if state.settings.invert_x { over.x } else { -over.x },
        if state.settings.invert_y { over.y } else { -over.y },
    );
    Vec2::new(
        depth.x * (input.x * INPUT_SCALE) - over.x * 0.5,
        depth.y * (input.y * INPUT_SCALE) - over.y * 0.5,
    )
}

/// Advances one layer by one tick.
///
/// `scroll` is the page scroll to compensate for; pass `None` unless the
/// container is fixed-position.
pub fn step(state: &mut LayerState, input: InputVector, container: Size, scroll: Option<Vec2>) {
    let goal = target(state, input, container);
    let speed = state.settings.effective_speed();
    let mut offset = state.offset + (goal - state.offset) * speed;

    if !state.settings.allow_overflow {
        let over = overhang(state.size, container);
        offset.x = clamp(offset.x, -over.x, 0.0);
        offset.y = clamp(offset.y, -over.y, 0.0);
    }

    if let Some(scroll) = scroll {
        offset -= scroll;
    }
    state.offset = offset;
}

/// Advances every layer by one tick, recording each as moved.
pub fn tick(
    states: &mut [LayerState],
    input: InputVector,
    container: Size,
    scroll: Option<Vec2>,
    changes: &mut FrameChanges,
) {
    for state in states {
        step(state, input, container, scroll);
        changes.moved.push(state.index);
    }
}

/// `max` then `min`, so an inverted range (negative overhang) resolves to
/// `max` instead of panicking like [`f64::clamp`].
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
