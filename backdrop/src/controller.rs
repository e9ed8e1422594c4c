//! Ownership of the current background animation.
//!
//! Replaces a page-global mutable "current animation" reference with an
//! explicit owner: the controller is the single writer of the slot.
//! [`Backdrop::replace`] tears the old loop down before the new instance's
//! first frame is requested, so two loops can never race on the surface.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::animation::Animation;
use crate::field::FieldCore;
use crate::scheduler::{FrameScheduler, RafScheduler};
use crate::surface::{CanvasSurface, Surface};
use crate::theme::Theme;

/// Owns the current [`Animation`] and the capabilities it runs against.
pub struct Backdrop {
    surface: Rc<RefCell<dyn Surface>>,
    scheduler: Rc<dyn FrameScheduler>,
    sample: RefCell<Box<dyn FnMut() -> f64>>,
    current: RefCell<Option<Animation>>,
}

impl Backdrop {
    /// Build a controller over injected capabilities. No loop runs until
    /// the first [`Backdrop::replace`].
    #[must_use]
    pub fn new(
        surface: Rc<RefCell<dyn Surface>>,
        scheduler: Rc<dyn FrameScheduler>,
        sample: Box<dyn FnMut() -> f64>,
    ) -> Self {
        Self {
            surface,
            scheduler,
            sample: RefCell::new(sample),
            current: RefCell::new(None),
        }
    }

    /// Bind a controller to a canvas element with browser capabilities:
    /// the 2D-context surface, `requestAnimationFrame` scheduling, and
    /// `Math.random` sampling.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn for_canvas(canvas: web_sys::HtmlCanvasElement) -> Result<Self, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        Ok(Self::new(
            Rc::new(RefCell::new(surface)),
            Rc::new(RafScheduler::default()),
            Box::new(js_sys::Math::random),
        ))
    }

    /// Tear down the running animation (if any) and start a fresh field
    /// for `theme`, sized to the current surface dimensions.
    pub fn replace(&self, theme: Theme) {
        // The old loop's pending frame must be cancelled before the new
        // first frame is requested; the surface tolerates only one writer.
        self.stop();
        let (width, height) = self.surface.borrow().size();
        let field = {
            let mut sample = self.sample.borrow_mut();
            FieldCore::spawn(theme, width, height, &mut **sample)
        };
        let animation = Animation::start(field, Rc::clone(&self.surface), Rc::clone(&self.scheduler));
        *self.current.borrow_mut() = Some(animation);
    }

    /// Stop and drop the running animation. Idempotent; used when the tab
    /// is hidden so no frames burn in the background.
    pub fn stop(&self) {
        // Dropping the animation cancels its pending frame.
        *self.current.borrow_mut() = None;
    }

    /// Forward a viewport resize. Without a running animation only the
    /// surface dimensions are updated.
    pub fn resize(&self, width: f64, height: f64) {
        if let Some(animation) = self.current.borrow().as_ref() {
            animation.resize(width, height);
        } else {
            self.surface.borrow_mut().resize(width, height);
        }
    }

    /// Whether an animation loop is currently scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current.borrow().as_ref().is_some_and(Animation::is_running)
    }

    /// Theme of the running animation, if any.
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.current.borrow().as_ref().map(Animation::theme)
    }

    /// Particle count of the running animation, if any.
    #[must_use]
    pub fn particle_count(&self) -> Option<usize> {
        self.current.borrow().as_ref().map(Animation::particle_count)
    }
}
