// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window event listeners.

use alloc::boxed::Box;
use core::cell::RefCell;

use js_sys::Function;
use kurbo::Point;
use parallax_core::backend::{EventKind, EventSource};
use parallax_core::input::{OrientationSample, pointer_position};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{DeviceOrientationEvent, MouseEvent, Window};

/// Returns the DOM event name for `kind`.
#[must_use]
pub fn event_name(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Resize => "resize",
        EventKind::PointerMove => "mousemove",
        EventKind::Orientation => "deviceorientation",
    }
}

/// Extracts the page position the engine expects from a mouse event.
#[must_use]
pub fn mouse_position(event: &MouseEvent) -> Point {
    pointer_position(
        Point::new(f64::from(event.page_x()), f64::from(event.page_y())),
        Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
    )
}

/// Extracts the tilt angles from a device-orientation event.
#[must_use]
pub fn orientation_sample(event: &DeviceOrientationEvent) -> OrientationSample {
    OrientationSample {
        beta: event.beta(),
        gamma: event.gamma(),
    }
}

#[derive(Default)]
struct Listeners {
    resize: Option<Closure<dyn FnMut()>>,
    pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
    orientation: Option<Closure<dyn FnMut(DeviceOrientationEvent)>>,
}

impl Listeners {
    fn function(&self, kind: EventKind) -> Option<&Function> {
        match kind {
            EventKind::Resize => self.resize.as_ref().map(|c| c.as_ref().unchecked_ref()),
            EventKind::PointerMove => self.pointer.as_ref().map(|c| c.as_ref().unchecked_ref()),
            EventKind::Orientation => self
                .orientation
                .as_ref()
                .map(|c| c.as_ref().unchecked_ref()),
        }
    }
}

/// Adds and removes the engine's listeners on the window.
pub struct WindowEvents {
    window: Window,
    listeners: RefCell<Listeners>,
}

impl core::fmt::Debug for WindowEvents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowEvents").finish_non_exhaustive()
    }
}

impl WindowEvents {
    /// Creates an unbound listener set for `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listeners: RefCell::new(Listeners::default()),
        }
    }

    /// Binds the handlers the listeners forward to.
    pub fn bind(
        &self,
        resize: impl FnMut() + 'static,
        pointer: impl FnMut(Point) + 'static,
        orientation: impl FnMut(OrientationSample) + 'static,
    ) {
        let mut pointer = pointer;
        let mut orientation = orientation;
        let mut listeners = self.listeners.borrow_mut();
        listeners.resize = Some(Closure::wrap(Box::new(resize) as Box<dyn FnMut()>));
        listeners.pointer = Some(Closure::wrap(Box::new(move |event: MouseEvent| {
            pointer(mouse_position(&event));
        }) as Box<dyn FnMut(MouseEvent)>));
        listeners.orientation = Some(Closure::wrap(Box::new(
            move |event: DeviceOrientationEvent| {
                orientation(orientation_sample(&event));
            },
        )
            as Box<dyn FnMut(DeviceOrientationEvent)>));
    }

    /// Drops every bound handler.
    pub(crate) fn unbind(&self) {
        *self.listeners.borrow_mut() = Listeners::default();
    }
}

impl EventSource for WindowEvents {
    fn subscribe(&mut self, kind: EventKind) {
        if let Some(function) = self.listeners.borrow().function(kind) {
            let _ = self
                .window
                .add_event_listener_with_callback(event_name(kind), function);
        }
    }

    fn unsubscribe(&mut self, kind: EventKind) {
        if let Some(function) = self.listeners.borrow().function(kind) {
            let _ = self
                .window
                .remove_event_listener_with_callback(event_name(kind), function);
        }
    }
}

impl Drop for WindowEvents {
    fn drop(&mut self) {
        for kind in EventKind::ALL {
            self.unsubscribe(kind);
        }
        self.unbind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names() {
        assert_eq!(event_name(EventKind::Resize), "resize");
        assert_eq!(event_name(EventKind::PointerMove), "mousemove");
        assert_eq!(event_name(EventKind::Orientation), "deviceorientation");
    }
}
