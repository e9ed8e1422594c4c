//! Drawing-surface abstraction and the canvas 2D implementation.
//!
//! The [`Surface`] trait is the seam between per-frame math and pixels, so
//! a whole frame can be exercised natively against a recording double.
//! [`CanvasSurface`] is the only place in the crate that touches
//! [`web_sys::CanvasRenderingContext2d`]; all fallible `Canvas2D` calls
//! propagate errors via `Result<(), JsValue>`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::LINK_WIDTH;

/// An RGB color paired with an alpha, formatted as CSS `rgba(...)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub rgb: (u8, u8, u8),
    pub alpha: f64,
}

impl Paint {
    #[must_use]
    pub fn new(rgb: (u8, u8, u8), alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// CSS color string for 2D-context style properties.
    #[must_use]
    pub fn to_css(self) -> String {
        let (r, g, b) = self.rgb;
        format!("rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

/// How a particle disc is filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Flat fill at the given paint (light mode).
    Flat(Paint),
    /// Radial gradient from the paint at the center to fully transparent
    /// at twice the drawn radius (dark mode).
    Glow(Paint),
}

/// Injected drawing capability for one animation frame.
///
/// Coordinates and dimensions are in CSS pixels. Implementations may fail
/// on any call; the animation loop stops rather than spin on a broken
/// surface.
pub trait Surface {
    /// Current drawing dimensions, `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Reset the backing store to `width` × `height`, clearing pixel
    /// content. Logical animation state is unaffected.
    fn resize(&mut self, width: f64, height: f64);

    /// Clear the entire surface.
    fn clear(&mut self) -> Result<(), JsValue>;

    /// One background grid line from `from` to `to`.
    fn grid_line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) -> Result<(), JsValue>;

    /// A filled particle disc of `radius` at `center`.
    fn fill_circle(&mut self, center: (f64, f64), radius: f64, fill: Fill) -> Result<(), JsValue>;

    /// A thin connection line between two particles.
    fn link_line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) -> Result<(), JsValue>;
}

/// The real surface over a borrowed `<canvas>` element.
///
/// The element itself is shared with the rest of the page; this type only
/// resizes its backing store and repaints it, never reparents it.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to a canvas element's 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context, for example when it
    /// was already bound to a different context kind.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn resize(&mut self, width: f64, height: f64) {
        // Setting the backing-store dimensions also clears pixel content;
        // the next scheduled frame repaints.
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self) -> Result<(), JsValue> {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn grid_line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.set_stroke_style_str(&paint.to_css());
        self.ctx.set_line_width(1.0);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, fill: Fill) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.0, center.1, radius, 0.0, TAU)?;
        match fill {
            Fill::Flat(paint) => self.ctx.set_fill_style_str(&paint.to_css()),
            Fill::Glow(paint) => {
                let gradient = self.ctx.create_radial_gradient(
                    center.0,
                    center.1,
                    0.0,
                    center.0,
                    center.1,
                    radius * 2.0,
                )?;
                gradient.add_color_stop(0.0, &paint.to_css())?;
                gradient.add_color_stop(1.0, &Paint::new(paint.rgb, 0.0).to_css())?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.ctx.fill();
        Ok(())
    }

    fn link_line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.set_stroke_style_str(&paint.to_css());
        self.ctx.set_line_width(LINK_WIDTH);
        self.ctx.stroke();
        Ok(())
    }
}

/// Test double that records draw calls instead of producing pixels.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    GridLine { from: (f64, f64), to: (f64, f64), paint: Paint },
    Circle { center: (f64, f64), radius: f64, fill: Fill },
    Link { from: (f64, f64), to: (f64, f64), paint: Paint },
}

#[cfg(test)]
impl RecordingSurface {
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    /// Recorded circle ops, in draw order.
    #[must_use]
    pub fn circles(&self) -> Vec<DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .cloned()
            .collect()
    }

    /// Recorded link ops, in draw order.
    #[must_use]
    pub fn link_ops(&self) -> Vec<DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Link { .. }))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) -> Result<(), JsValue> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn grid_line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) -> Result<(), JsValue> {
        self.ops.push(DrawOp::GridLine { from, to, paint });
        Ok(())
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, fill: Fill) -> Result<(), JsValue> {
        self.ops.push(DrawOp::Circle { center, radius, fill });
        Ok(())
    }

    fn link_line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) -> Result<(), JsValue> {
        self.ops.push(DrawOp::Link { from, to, paint });
        Ok(())
    }
}
