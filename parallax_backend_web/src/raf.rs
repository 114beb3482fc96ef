// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafScheduler`] requests one engine tick per display refresh. Pages
//! without `requestAnimationFrame` get a timer at roughly the same rate
//! instead.

use alloc::boxed::Box;
use core::cell::RefCell;

use js_sys::{Function, Reflect};
use parallax_core::backend::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::Window;

/// Timer interval used without `requestAnimationFrame`, in milliseconds.
pub const FALLBACK_INTERVAL_MS: i32 = 1000 / 60;

pub(crate) type TickClosure = Closure<dyn FnMut()>;

/// A pending tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickHandle {
    /// A `requestAnimationFrame` id.
    Frame(i32),
    /// A `setTimeout` id.
    Timeout(i32),
    /// Nothing was scheduled (no callback bound, or the request failed).
    Unscheduled,
}

/// Schedules engine ticks on the window.
pub struct RafScheduler {
    window: Window,
    has_raf: bool,
    /// The JS closure handed to the browser. Bound once, after the engine
    /// that it calls into exists.
    callback: RefCell<Option<TickClosure>>,
    /// The last tick handed to the browser. It may already have fired.
    pending: Option<TickHandle>,
}

impl core::fmt::Debug for RafScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafScheduler")
            .field("has_raf", &self.has_raf)
            .field("bound", &self.callback.borrow().is_some())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl RafScheduler {
    /// Creates an unbound scheduler for `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        let has_raf =
            Reflect::has(&window, &JsValue::from_str("requestAnimationFrame")).unwrap_or(false);
        Self {
            window,
            has_raf,
            callback: RefCell::new(None),
            pending: None,
        }
    }

    /// Returns whether ticks come from `requestAnimationFrame`.
    #[must_use]
    pub fn uses_animation_frame(&self) -> bool {
        self.has_raf
    }

    /// Returns the last tick requested and not cancelled since.
    #[must_use]
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Binds the function every tick calls.
    pub fn bind(&self, tick: impl FnMut() + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(tick) as Box<dyn FnMut()>));
    }

    /// Drops the bound closure.
    pub(crate) fn unbind(&self) {
        self.callback.borrow_mut().take();
    }

    fn schedule(&self) -> TickHandle {
        let slot = self.callback.borrow();
        let Some(closure) = slot.as_ref() else {
            return TickHandle::Unscheduled;
        };
        let function: &Function = closure.as_ref().unchecked_ref();
        if self.has_raf {
            self.window
                .request_animation_frame(function)
                .map_or(TickHandle::Unscheduled, TickHandle::Frame)
        } else {
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    function,
                    FALLBACK_INTERVAL_MS,
                )
                .map_or(TickHandle::Unscheduled, TickHandle::Timeout)
        }
    }
}

impl FrameScheduler for RafScheduler {
    type TickHandle = TickHandle;

    fn request_tick(&mut self) -> TickHandle {
        let handle = self.schedule();
        self.pending = (handle != TickHandle::Unscheduled).then_some(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        match handle {
            TickHandle::Frame(id) => {
                let _ = self.window.cancel_animation_frame(id);
            }
            TickHandle::Timeout(id) => self.window.clear_timeout_with_handle(id),
            TickHandle::Unscheduled => {}
        }
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        // The browser must not call back into a freed closure.
        if let Some(handle) = self.pending.take() {
            self.cancel_tick(handle);
        }
        self.unbind();
    }
}
