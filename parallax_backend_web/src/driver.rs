// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The browser [`Driver`](parallax_core::backend::Driver).

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use parallax_core::Parallax;
use parallax_core::backend::{EventKind, EventSource, FrameScheduler};
use web_sys::Window;

use crate::dom::DomHost;
use crate::events::WindowEvents;
use crate::presenter::DomPresenter;
use crate::raf::{RafScheduler, TickHandle};

/// A parallax engine running against the live document.
pub type WebParallax = Parallax<DomHost, DomPresenter, WebDriver>;

/// Animation-frame ticks plus window listeners.
#[derive(Debug)]
pub struct WebDriver {
    scheduler: RafScheduler,
    events: WindowEvents,
}

impl WebDriver {
    /// Creates an unbound driver for `window`.
    ///
    /// Nothing is delivered until [`bind`] connects it to an engine.
    #[must_use]
    pub fn new(window: &Window) -> Self {
        Self {
            scheduler: RafScheduler::new(window.clone()),
            events: WindowEvents::new(window.clone()),
        }
    }

    /// Returns the tick scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &RafScheduler {
        &self.scheduler
    }
}

impl FrameScheduler for WebDriver {
    type TickHandle = TickHandle;

    fn request_tick(&mut self) -> TickHandle {
        self.scheduler.request_tick()
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.scheduler.cancel_tick(handle);
    }
}

impl EventSource for WebDriver {
    fn subscribe(&mut self, kind: EventKind) {
        self.events.subscribe(kind);
    }

    fn unsubscribe(&mut self, kind: EventKind) {
        self.events.unsubscribe(kind);
    }
}

/// Routes the driver's callbacks into `engine`.
///
/// The callbacks hold a weak reference, so dropping the last strong
/// reference to the engine drops the driver and its closures with it. A
/// callback that finds the engine already borrowed is skipped.
pub fn bind(engine: &Rc<RefCell<WebParallax>>) {
    let shared = engine.borrow();
    let driver = shared.driver();

    let weak = Rc::downgrade(engine);
    driver
        .scheduler
        .bind(move || with_engine(&weak, WebParallax::on_tick));

    let on_resize = Rc::downgrade(engine);
    let on_pointer = Rc::downgrade(engine);
    let on_orientation = Rc::downgrade(engine);
    driver.events.bind(
        move || with_engine(&on_resize, WebParallax::on_resize),
        move |page| with_engine(&on_pointer, |e| e.on_pointer_move(page)),
        move |sample| with_engine(&on_orientation, |e| e.on_orientation(sample)),
    );
}

fn with_engine(engine: &Weak<RefCell<WebParallax>>, f: impl FnOnce(&mut WebParallax)) {
    if let Some(engine) = engine.upgrade()
        && let Ok(mut engine) = engine.try_borrow_mut()
    {
        f(&mut engine);
    }
}
