// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] by appending every event to a
//! shared log. The engine owns the boxed sink it is given, so keep a clone of
//! the recorder to read the log back:
//!
//! ```ignore
//! let recorder = RecorderSink::new();
//! engine.set_tracer(Tracer::new(Box::new(recorder.clone())));
//! // ... drive the engine ...
//! let events = recorder.events();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use parallax_core::trace::{
    GeometryEvent, InputEvent, LayersRegisteredEvent, LifecycleEvent, TickEvent, TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`LayersRegisteredEvent`].
    LayersRegistered(LayersRegisteredEvent),
    /// A [`GeometryEvent`].
    Geometry(GeometryEvent),
    /// An [`InputEvent`].
    Input(InputEvent),
    /// A [`TickEvent`].
    Tick(TickEvent),
    /// A [`LifecycleEvent`].
    Lifecycle(LifecycleEvent),
}

impl RecordedEvent {
    /// Returns the event's name as used in exports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LayersRegistered(_) => "LayersRegistered",
            Self::Geometry(_) => "Geometry",
            Self::Input(_) => "Input",
            Self::Tick(_) => "Tick",
            Self::Lifecycle(_) => "Lifecycle",
        }
    }
}

/// A [`TraceSink`] that appends events to a shared in-memory log.
///
/// Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    log: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.log.borrow().clone()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    fn push(&self, event: RecordedEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_layers_registered(&mut self, e: &LayersRegisteredEvent) {
        self.push(RecordedEvent::LayersRegistered(*e));
    }

    fn on_geometry(&mut self, e: &GeometryEvent) {
        self.push(RecordedEvent::Geometry(*e));
    }

    fn on_input(&mut self, e: &InputEvent) {
        self.push(RecordedEvent::Input(*e));
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.push(RecordedEvent::Tick(*e));
    }

    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        self.push(RecordedEvent::Lifecycle(*e));
    }
}
