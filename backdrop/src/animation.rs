//! The self-rescheduling redraw loop that owns a running particle field.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::field::FieldCore;
use crate::render;
use crate::scheduler::FrameScheduler;
use crate::surface::Surface;
use crate::theme::Theme;

/// A running field animation: one [`FieldCore`] stepped and redrawn once
/// per scheduled frame, one frame at a time.
///
/// The surface and scheduler are shared capabilities; the animation owns
/// the field and the pending-frame request. Dropping the animation stops
/// the loop, so owners that replace instances instead of leaking them get
/// the at-most-one-active-loop guarantee for free.
pub struct Animation {
    field: Rc<RefCell<FieldCore>>,
    surface: Rc<RefCell<dyn Surface>>,
    scheduler: Rc<dyn FrameScheduler>,
    /// Self-handle for the rescheduling tick; cleared by `stop` to break
    /// the tick's reference cycle.
    tick: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl Animation {
    /// Start a redraw loop for `field` against the shared surface and
    /// scheduler. The first frame is requested before this returns.
    #[must_use]
    pub fn start(
        field: FieldCore,
        surface: Rc<RefCell<dyn Surface>>,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Self {
        let field = Rc::new(RefCell::new(field));
        let tick: Rc<RefCell<Option<Rc<dyn Fn()>>>> = Rc::new(RefCell::new(None));

        let frame = {
            let field = Rc::clone(&field);
            let surface = Rc::clone(&surface);
            let scheduler = Rc::clone(&scheduler);
            let tick = Rc::clone(&tick);
            Rc::new(move || {
                field.borrow_mut().step();
                if render::draw(&mut *surface.borrow_mut(), &field.borrow()).is_err() {
                    // Surface is unusable; stopping beats spinning on errors.
                    return;
                }
                let next = tick.borrow().clone();
                if let Some(next) = next {
                    scheduler.schedule(next);
                }
            }) as Rc<dyn Fn()>
        };

        *tick.borrow_mut() = Some(Rc::clone(&frame));
        scheduler.schedule(frame);
        Self { field, surface, scheduler, tick }
    }

    /// Stop the loop: cancel the pending frame request and release the
    /// tick. Idempotent; no draws occur after this returns.
    pub fn stop(&self) {
        self.scheduler.cancel();
        *self.tick.borrow_mut() = None;
    }

    /// Whether a next frame is currently scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Rebind the surface and wrap bounds to new viewport dimensions.
    /// Particle state carries over unchanged.
    pub fn resize(&self, width: f64, height: f64) {
        self.surface.borrow_mut().resize(width, height);
        self.field.borrow_mut().set_bounds(width, height);
    }

    /// Theme the field was constructed with.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.field.borrow().theme()
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.stop();
    }
}
