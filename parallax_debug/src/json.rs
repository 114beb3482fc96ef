// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export.
//!
//! [`export`] writes recorded events from a
//! [`RecorderSink`](super::recorder::RecorderSink) as a single JSON array,
//! one object per event. Every object carries an `"event"` name and the
//! event's fields; vectors become `{ "x", "y" }` objects and sizes
//! `{ "width", "height" }` objects.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::{source_name, transition_name};
use crate::recorder::RecordedEvent;

/// Converts one recorded event to a JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    let name = event.name();
    match event {
        RecordedEvent::LayersRegistered(e) => json!({
            "event": name,
            "container_found": e.container_found,
            "layer_count": e.layer_count,
            "fixed": e.fixed,
            "epoch": e.epoch,
        }),
        RecordedEvent::Geometry(e) => json!({
            "event": name,
            "size": { "width": e.size.width, "height": e.size.height },
            "origin": { "x": e.origin.x, "y": e.origin.y },
            "range": { "x": e.range.x, "y": e.range.y },
            "layer_count": e.layer_count,
        }),
        RecordedEvent::Input(e) => json!({
            "event": name,
            "source": source_name(e.source),
            "input": { "x": e.input.x, "y": e.input.y },
        }),
        RecordedEvent::Tick(e) => json!({
            "event": name,
            "frame_index": e.frame_index,
            "eased": e.eased,
            "moved": e.moved,
        }),
        RecordedEvent::Lifecycle(e) => json!({
            "event": name,
            "frame_index": e.frame_index,
            "transition": transition_name(e.transition),
        }),
    }
}

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let array = Value::Array(events.iter().map(to_value).collect());
    serde_json::to_writer_pretty(&mut *writer, &array).map_err(io::Error::other)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use parallax_core::trace::{
        GeometryEvent, InputEvent, InputSource, LayersRegisteredEvent, LifecycleEvent,
        TickEvent, Transition,
    };

    use super::*;

    fn exported(events: &[RecordedEvent]) -> Vec<Value> {
        let mut buf = Vec::new();
        export(events, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        match serde_json::from_str::<Value>(&text).unwrap() {
            Value::Array(items) => items,
            other => panic!("expected an array, got {other}"),
        }
    }

    #[test]
    fn empty_log_is_empty_array() {
        assert!(exported(&[]).is_empty(), "no events");
    }

    #[test]
    fn events_keep_their_fields() {
        let items = exported(&[
            RecordedEvent::LayersRegistered(LayersRegisteredEvent {
                container_found: true,
                layer_count: 3,
                fixed: false,
                epoch: 2,
            }),
            RecordedEvent::Geometry(GeometryEvent {
                size: Size::new(400.0, 300.0),
                origin: Point::new(8.0, 16.0),
                range: Vec2::new(200.0, 150.0),
                layer_count: 3,
            }),
            RecordedEvent::Input(InputEvent {
                source: InputSource::Pointer,
                input: Vec2::new(-0.5, 1.0),
            }),
            RecordedEvent::Tick(TickEvent {
                frame_index: 9,
                eased: true,
                moved: 3,
            }),
            RecordedEvent::Lifecycle(LifecycleEvent {
                frame_index: 10,
                transition: Transition::Disabled,
            }),
        ]);
        assert_eq!(items.len(), 5);

        assert_eq!(items[0]["event"], "LayersRegistered");
        assert_eq!(items[0]["layer_count"], 3);
        assert_eq!(items[0]["epoch"], 2);

        assert_eq!(items[1]["size"]["width"], 400.0);
        assert_eq!(items[1]["origin"]["y"], 16.0);
        assert_eq!(items[1]["range"]["x"], 200.0);

        assert_eq!(items[2]["source"], "pointer");
        assert_eq!(items[2]["input"]["x"], -0.5);

        assert_eq!(items[3]["frame_index"], 9);
        assert_eq!(items[3]["eased"], true);

        assert_eq!(items[4]["transition"], "disabled");
    }

    #[test]
    fn non_finite_input_exports_as_null() {
        let items = exported(&[RecordedEvent::Input(InputEvent {
            source: InputSource::Orientation,
            input: Vec2::new(f64::NAN, 0.0),
        })]);
        assert!(items[0]["input"]["x"].is_null(), "NaN has no JSON form");
        assert_eq!(items[0]["input"]["y"], 0.0);
    }
}
