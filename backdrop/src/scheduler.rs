//! Frame scheduling capability.
//!
//! The redraw loop is expressed against [`FrameScheduler`] so tests can
//! drive frames synchronously; [`RafScheduler`] is the browser
//! implementation over `requestAnimationFrame`, which tracks the display
//! refresh rate instead of a fixed timer.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Schedules at most one pending frame callback at a time.
pub trait FrameScheduler {
    /// Request `tick` for the next frame, replacing any pending request.
    fn schedule(&self, tick: Rc<dyn Fn()>);

    /// Drop the pending request. Calling with nothing pending is a no-op.
    fn cancel(&self);

    /// Whether a frame request is currently outstanding.
    fn has_pending(&self) -> bool;
}

/// `requestAnimationFrame`-backed scheduler.
///
/// The wrapped closure stays alive in a holder while its request is
/// outstanding; `cancel` drops both the browser handle and the closure.
/// A fired request's handle is cleared lazily by the next `schedule` or
/// `cancel` — the browser ignores cancellation of an already-fired handle.
#[derive(Default)]
pub struct RafScheduler {
    handle: Cell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, tick: Rc<dyn Fn()>) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |_timestamp: f64| tick()) as Box<dyn FnMut(f64)>);
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            self.handle.set(Some(id));
            *self.closure.borrow_mut() = Some(cb);
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.cancel_animation_frame(id).unwrap_or(());
            }
        }
        *self.closure.borrow_mut() = None;
    }

    fn has_pending(&self) -> bool {
        self.handle.get().is_some()
    }
}

/// Test scheduler driven by explicit [`ManualScheduler::fire`] calls.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<Option<Rc<dyn Fn()>>>,
}

#[cfg(test)]
impl ManualScheduler {
    /// Run the pending frame callback, if any. The slot is emptied before
    /// the callback runs so it can reschedule itself.
    pub fn fire(&self) {
        let tick = self.pending.borrow_mut().take();
        if let Some(tick) = tick {
            tick();
        }
    }
}

#[cfg(test)]
impl FrameScheduler for ManualScheduler {
    fn schedule(&self, tick: Rc<dyn Fn()>) {
        *self.pending.borrow_mut() = Some(tick);
    }

    fn cancel(&self) {
        *self.pending.borrow_mut() = None;
    }

    fn has_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
