// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer-transform engine for pointer and device-orientation parallax.
//!
//! `parallax_core` takes a container and its direct children ("layers"),
//! oversizes every layer by a per-layer grow factor, and shifts each one
//! against the latest pointer or orientation input so deeper layers travel
//! further. It is `no_std` compatible (with `alloc`) and knows nothing about
//! any particular platform: element discovery, geometry queries, style
//! writes, frame scheduling and event subscription are reached through the
//! traits in [`host`] and [`backend`].
//!
//! # Architecture
//!
//! ```text
//!   ContainerRef + OptionsPatch
//!       │
//!       ▼
//!   Parallax::new ──► registry (set_container) ──► LayerStore
//!       │                                             │
//!       ▼                                             ▼
//!   geometry (update_layers, on resize) ──► ContainerGeometry + layer frames
//!       │
//!   pointer / orientation ──► input ──► InputVector
//!       │
//!   FrameScheduler tick ──► easing::step per layer ──► FrameChanges
//!                                                          │
//!                                                          ▼
//!                                               Presenter::apply (style)
//! ```
//!
//! **[`config`]**: Instance options, partial patches and `getOption` lookup.
//!
//! **[`attr`]**: Textual attribute coercion into [`AttrValue`](attr::AttrValue).
//!
//! **[`capability`]**: Transform-capability probe and the resolved
//! [`CapabilityDescriptor`](capability::CapabilityDescriptor).
//!
//! **[`layer`]**: Layer registry and side-table state keyed by
//! [`LayerId`](layer::LayerId).
//!
//! **[`geometry`]**: Container geometry and oversized layer frames.
//!
//! **[`input`]**: Pointer and orientation normalization.
//!
//! **[`easing`]**: Per-tick target computation, easing and clamping.
//!
//! **[`style`]**: Capability-aware style values for the presenter.
//!
//! **[`engine`]**: [`Parallax`](engine::Parallax), the lifecycle controller
//! wiring everything together.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) hooks for diagnostics.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `serde` (disabled by default): Derives `Deserialize`/`Serialize` for
//!   [`EngineConfig`](config::EngineConfig) and
//!   [`OptionsPatch`](config::OptionsPatch).
//! - `trace` (disabled by default): Enables `Tracer` method bodies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod attr;
pub mod backend;
pub mod capability;
pub mod config;
pub mod easing;
pub mod engine;
pub mod geometry;
pub mod host;
pub mod input;
pub mod layer;
pub mod style;
pub mod trace;

pub use engine::{ContainerRef, Parallax};
