// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Besides a [`Host`](crate::host::Host), a backend provides:
//!
//! - **Presenter**: implements [`Presenter`] to write layer styles into the
//!   platform's presentation tree.
//! - **Driver**: implements [`FrameScheduler`] and [`EventSource`]. The
//!   driver owns the platform callbacks and routes them back into
//!   [`Parallax::on_tick`](crate::Parallax::on_tick),
//!   [`on_resize`](crate::Parallax::on_resize),
//!   [`on_pointer_move`](crate::Parallax::on_pointer_move) and
//!   [`on_orientation`](crate::Parallax::on_orientation).
//!
//! # Crate boundaries
//!
//! `parallax_core` owns the data model, the easing engine and this contract.
//! Backend crates depend on `parallax_core` and provide the platform glue.

use crate::capability::CapabilityDescriptor;
use crate::layer::{FrameChanges, LayerStore};

/// Writes layer styles to a platform-native presentation tree.
///
/// # Frame pseudocode
///
/// ```rust,ignore
/// fn on_tick(engine: &mut Parallax<..>) {
///     // Ease: every layer moves toward its target offset.
///     easing::tick(states, input, container, scroll, &mut changes);
///
///     // Present: write exactly the changed properties.
///     presenter.apply(&layers, &changes);
/// }
/// ```
pub trait Presenter<E> {
    /// Returns the transform capability this presenter writes with.
    ///
    /// Resolved once when the presenter is created.
    fn capability(&self) -> &CapabilityDescriptor;

    /// Applies 3D acceleration hints to `element`.
    ///
    /// Only called when [`capability`](Self::capability) reports 3D support.
    fn accelerate(&mut self, element: &E);

    /// Applies the given [`FrameChanges`], reading current layer state from
    /// `store`.
    fn apply(&mut self, store: &LayerStore<E>, changes: &FrameChanges);
}

/// Platform events the engine listens to while enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Viewport resize.
    Resize,
    /// Pointer movement anywhere on the surface.
    PointerMove,
    /// Device orientation change.
    Orientation,
}

impl EventKind {
    /// Every kind, in subscription order.
    pub const ALL: [Self; 3] = [Self::Resize, Self::PointerMove, Self::Orientation];
}

/// Schedules the per-tick callback.
pub trait FrameScheduler {
    /// Handle to a pending tick.
    type TickHandle: Copy;

    /// Requests one call to the engine's tick at the next display refresh.
    fn request_tick(&mut self) -> Self::TickHandle;

    /// Cancels a pending tick. Cancelling a tick that already fired is a
    /// no-op.
    fn cancel_tick(&mut self, handle: Self::TickHandle);
}

/// Subscribes the engine to platform events.
pub trait EventSource {
    /// Starts delivering `kind`.
    fn subscribe(&mut self, kind: EventKind);

    /// Stops delivering `kind`.
    fn unsubscribe(&mut self, kind: EventKind);
}

/// A [`FrameScheduler`] that is also an [`EventSource`].
pub trait Driver: FrameScheduler + EventSource {}

impl<T: FrameScheduler + EventSource> Driver for T {}
