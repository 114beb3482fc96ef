// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-table storage for layers and their state.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Size, Vec2};

use super::id::LayerId;
use super::registry::LayerSettings;
use crate::geometry::layer_frame;

/// Engine-owned state of one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerState {
    /// Registration index (0-based).
    pub index: u32,
    /// Stacking order, always `index + 1`.
    pub z_order: u32,
    /// Oversized layer size.
    pub size: Size,
    /// Current eased offset (left/top).
    pub offset: Vec2,
    /// Resolved settings.
    pub settings: LayerSettings,
}

/// Layers whose styles must be written this frame, by registration index.
///
/// Produced by the engine and consumed by
/// [`Presenter::apply`](crate::backend::Presenter::apply).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameChanges {
    /// Layers whose stacking (display, position, z-index) must be written.
    pub indexed: Vec<u32>,
    /// Layers whose size changed.
    pub resized: Vec<u32>,
    /// Layers whose offset changed.
    pub moved: Vec<u32>,
}

impl FrameChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.indexed.clear();
        self.resized.clear();
        self.moved.clear();
    }

    /// Returns whether there is nothing to write.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexed.is_empty() && self.resized.is_empty() && self.moved.is_empty()
    }
}

/// Registered layers: host elements and engine state, stored side by side.
///
/// Layers are addressed by [`LayerId`] handles or, inside a frame, by raw
/// registration index (as found in [`FrameChanges`]).
pub struct LayerStore<E> {
    elements: Vec<E>,
    state: Vec<LayerState>,
    epoch: u32,
}

impl<E> Default for LayerStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for LayerStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerStore")
            .field("len", &self.state.len())
            .field("epoch", &self.epoch)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<E> LayerStore<E> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            state: Vec::new(),
            epoch: 0,
        }
    }

    /// Returns the number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns whether no layers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the current registration epoch.
    #[must_use]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Drops every layer and starts a new epoch, invalidating all handles.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.state.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Registers `element` as the next layer.
    ///
    /// Its size and offset stay zero until the engine next lays out the
    /// layers.
    pub fn register(&mut self, element: E, settings: LayerSettings) -> LayerId {
        let idx = u32::try_from(self.state.len()).expect("layer count exceeds u32");
        self.elements.push(element);
        self.state.push(LayerState {
            index: idx,
            z_order: idx + 1,
            size: Size::ZERO,
            offset: Vec2::ZERO,
            settings,
        });
        LayerId {
            idx,
            epoch: self.epoch,
        }
    }

    /// Returns whether the handle refers to a layer of the current epoch.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        id.epoch == self.epoch && (id.idx as usize) < self.state.len()
    }

    /// Returns handles for every layer in registration order.
    pub fn ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.state.iter().map(|state| LayerId {
            idx: state.index,
            epoch: self.epoch,
        })
    }

    /// Returns the element of a layer.
    #[must_use]
    pub fn element(&self, id: LayerId) -> &E {
        self.validate(id);
        &self.elements[id.idx as usize]
    }

    /// Returns the state of a layer.
    #[must_use]
    pub fn state(&self, id: LayerId) -> &LayerState {
        self.validate(id);
        &self.state[id.idx as usize]
    }

    /// Returns all elements in registration order.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Returns all layer states in registration order.
    #[must_use]
    pub fn states(&self) -> &[LayerState] {
        &self.state
    }

    /// Iterates over `(element, state)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &LayerState)> {
        self.elements.iter().zip(self.state.iter())
    }

    // -- Raw-index accessors for presenters --

    /// Returns the element at raw index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn element_at(&self, idx: u32) -> &E {
        assert!(
            (idx as usize) < self.elements.len(),
            "layer index {idx} out of range (len {})",
            self.elements.len()
        );
        &self.elements[idx as usize]
    }

    /// Returns the state at raw index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn state_at(&self, idx: u32) -> &LayerState {
        assert!(
            (idx as usize) < self.state.len(),
            "layer index {idx} out of range (len {})",
            self.state.len()
        );
        &self.state[idx as usize]
    }

    // -- Engine-side mutation --

    pub(crate) fn states_mut(&mut self) -> &mut [LayerState] {
        &mut self.state
    }

    pub(crate) fn set_settings_at(&mut self, idx: usize, settings: LayerSettings) {
        self.state[idx].settings = settings;
    }

    /// Sizes and centers every layer over a container of size `container`,
    /// recording each one in all three change lists.
    pub(crate) fn layout(&mut self, container: Size, changes: &mut FrameChanges) {
        for (i, state) in self.state.iter_mut().enumerate() {
            let frame = layer_frame(container, state.settings.grow, i);
            state.size = frame.size;
            state.offset = frame.offset;
            changes.indexed.push(state.index);
            changes.resized.push(state.index);
            changes.moved.push(state.index);
        }
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: LayerId) {
        assert!(
            self.is_alive(id),
            "stale LayerId: {id:?} (current epoch: {}, len: {})",
            self.epoch,
            self.state.len()
        );
    }
}
