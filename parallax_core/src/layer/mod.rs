// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer registry and per-layer state.
//!
//! A *layer* is a direct child of the container whose tag is in
//! [`LAYER_TAGS`]. Each layer has:
//!
//! - An identity ([`LayerId`]): its registration index plus the epoch of
//!   the registration that produced it. Re-registering a container starts a
//!   new epoch, so handles from an earlier container become stale.
//! - **Settings** ([`LayerSettings`]) resolved from the element's override
//!   attributes over the instance defaults.
//! - **State** ([`LayerState`]) owned by the engine: oversized size and the
//!   current eased offset.
//!
//! Elements and their state live side by side in a [`LayerStore`]; nothing
//! is attached to the foreign element itself.

mod id;
mod registry;
mod store;

pub use id::LayerId;
pub use registry::{LAYER_TAGS, LayerOverrides, LayerSettings, OVERRIDE_NAMES, is_layer_tag};
pub use store::{FrameChanges, LayerState, LayerStore};
