// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use parallax_core::trace::{
    GeometryEvent, InputEvent, InputSource, LayersRegisteredEvent, LifecycleEvent, TickEvent,
    TraceSink, Transition,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub(crate) fn source_name(source: InputSource) -> &'static str {
    match source {
        InputSource::Pointer => "pointer",
        InputSource::Orientation => "orientation",
    }
}

pub(crate) fn transition_name(transition: Transition) -> &'static str {
    match transition {
        Transition::Enabled => "enabled",
        Transition::Disabled => "disabled",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layers_registered(&mut self, e: &LayersRegisteredEvent) {
        if !e.container_found {
            let _ = writeln!(self.writer, "[layers] no container");
            return;
        }
        let _ = writeln!(
            self.writer,
            "[layers] count={} fixed={} epoch={}",
            e.layer_count, e.fixed, e.epoch,
        );
    }

    fn on_geometry(&mut self, e: &GeometryEvent) {
        let _ = writeln!(
            self.writer,
            "[geometry] size={}x{} origin=({}, {}) range=({}, {}) layers={}",
            e.size.width,
            e.size.height,
            e.origin.x,
            e.origin.y,
            e.range.x,
            e.range.y,
            e.layer_count,
        );
    }

    fn on_input(&mut self, e: &InputEvent) {
        let _ = writeln!(
            self.writer,
            "[input] {} ({:.3}, {:.3})",
            source_name(e.source),
            e.input.x,
            e.input.y,
        );
    }

    fn on_tick(&mut self, e: &TickEvent) {
        let state = if e.eased { "eased" } else { "idle" };
        let _ = writeln!(
            self.writer,
            "[tick] frame={} {state} moved={}",
            e.frame_index, e.moved,
        );
    }

    fn on_lifecycle(&mut self, e: &LifecycleEvent) {
        let _ = writeln!(
            self.writer,
            "[lifecycle] frame={} {}",
            e.frame_index,
            transition_name(e.transition),
        );
    }
}
