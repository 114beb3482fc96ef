// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing hooks for the engine.
//!
//! The engine reports registration, geometry, input, tick and lifecycle
//! events to a [`TraceSink`]. All sink methods default to no-ops, so a sink
//! only overrides the events it cares about.
//!
//! [`Tracer`] wraps an optional boxed sink. With the `trace` feature **off**
//! every `Tracer` method compiles to nothing; with it **on** each method is a
//! single `Option` branch before dispatch.

use alloc::boxed::Box;

use kurbo::{Point, Size, Vec2};

/// Where an input sample came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Pointer movement.
    Pointer,
    /// Device orientation.
    Orientation,
}

/// Lifecycle transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `Disabled → Enabled`.
    Enabled,
    /// `Enabled → Disabled`.
    Disabled,
}

/// Emitted after the container's children have been scanned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayersRegisteredEvent {
    /// Whether a container was found at all.
    pub container_found: bool,
    /// Number of qualifying layers.
    pub layer_count: u32,
    /// Whether the container is fixed-position.
    pub fixed: bool,
    /// Registration epoch of the new layers.
    pub epoch: u32,
}

/// Emitted after container geometry is resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryEvent {
    /// Container size.
    pub size: Size,
    /// Container page position.
    pub origin: Point,
    /// Normalization range.
    pub range: Vec2,
    /// Number of layers laid out.
    pub layer_count: u32,
}

/// Emitted when an input sample updates the input vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    /// Sample source.
    pub source: InputSource,
    /// The resulting input vector.
    pub input: Vec2,
}

/// Emitted once per scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickEvent {
    /// Monotonic tick counter.
    pub frame_index: u64,
    /// Whether layers were eased (false when the surface had no focus).
    pub eased: bool,
    /// Number of layers written.
    pub moved: u32,
}

/// Emitted on every enable/disable transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifecycleEvent {
    /// Tick counter at the time of the transition.
    pub frame_index: u64,
    /// Which transition happened.
    pub transition: Transition,
}

/// Receives trace events from the engine.
pub trait TraceSink {
    /// Called after layer registration.
    fn on_layers_registered(&mut self, e: &LayersRegisteredEvent) {
        _ = e;
    }

    /// Called after geometry resolution.
    fn on_geometry(&mut self, e: &GeometryEvent) {
        _ = e;
    }

    /// Called after an input sample is accepted.
    fn on_input(&mut self, e: &InputEvent) {
        _ = e;
    }

    /// Called once per tick.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called on enable/disable.
    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional owned [`TraceSink`].
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Removes and returns the sink, if any.
    ///
    /// Always `None` without the `trace` feature.
    pub fn take_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        #[cfg(feature = "trace")]
        {
            self.sink.take()
        }
        #[cfg(not(feature = "trace"))]
        {
            None
        }
    }

    /// Emits a [`LayersRegisteredEvent`].
    #[inline]
    pub fn layers_registered(&mut self, e: &LayersRegisteredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layers_registered(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GeometryEvent`].
    #[inline]
    pub fn geometry(&mut self, e: &GeometryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_geometry(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InputEvent`].
    #[inline]
    pub fn input(&mut self, e: &InputEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LifecycleEvent`].
    #[inline]
    pub fn lifecycle(&mut self, e: &LifecycleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_lifecycle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    struct Counting(Rc<RefCell<Vec<&'static str>>>);

    impl TraceSink for Counting {
        fn on_tick(&mut self, _: &TickEvent) {
            self.0.borrow_mut().push("tick");
        }

        fn on_lifecycle(&mut self, _: &LifecycleEvent) {
            self.0.borrow_mut().push("lifecycle");
        }
    }

    #[test]
    fn dispatches_to_overridden_methods_only() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tracer = Tracer::new(Box::new(Counting(log.clone())));
        tracer.tick(&TickEvent {
            frame_index: 0,
            eased: true,
            moved: 2,
        });
        tracer.input(&InputEvent {
            source: InputSource::Pointer,
            input: Vec2::ZERO,
        });
        tracer.lifecycle(&LifecycleEvent {
            frame_index: 1,
            transition: Transition::Disabled,
        });
        assert_eq!(*log.borrow(), ["tick", "lifecycle"]);
    }

    #[test]
    fn none_discards() {
        let mut tracer = Tracer::none();
        tracer.geometry(&GeometryEvent {
            size: Size::ZERO,
            origin: Point::ORIGIN,
            range: Vec2::ZERO,
            layer_count: 0,
        });
        assert!(tracer.take_sink().is_none(), "no sink installed");
    }
}
