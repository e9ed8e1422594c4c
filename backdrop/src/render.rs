//! Frame composition: the background grid, particles, and dark-mode links.
//!
//! This module computes what to draw each frame; pixels happen behind the
//! [`Surface`] trait. It receives a read-only view of field state and does
//! not mutate anything.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;

use crate::consts::{
    ACCENT_RGB, GRID_ALPHA_DARK, GRID_ALPHA_LIGHT, GRID_PITCH, LIGHT_OPACITY_SCALE, NEUTRAL_RGB,
};
use crate::field::FieldCore;
use crate::surface::{Fill, Paint, Surface};

/// Draw one complete frame of `field` onto `surface`.
///
/// # Errors
///
/// Returns `Err` if any underlying `Canvas2D` call fails.
pub fn draw(surface: &mut dyn Surface, field: &FieldCore) -> Result<(), JsValue> {
    surface.clear()?;
    draw_grid(surface, field)?;
    draw_particles(surface, field)?;
    Ok(())
}

fn draw_grid(surface: &mut dyn Surface, field: &FieldCore) -> Result<(), JsValue> {
    let paint = if field.theme().is_dark() {
        Paint::new(ACCENT_RGB, GRID_ALPHA_DARK)
    } else {
        Paint::new(NEUTRAL_RGB, GRID_ALPHA_LIGHT)
    };

    let (width, height) = surface.size();
    let mut x = 0.0;
    while x < width {
        surface.grid_line((x, 0.0), (x, height), paint)?;
        x += GRID_PITCH;
    }
    let mut y = 0.0;
    while y < height {
        surface.grid_line((0.0, y), (width, y), paint)?;
        y += GRID_PITCH;
    }
    Ok(())
}

fn draw_particles(surface: &mut dyn Surface, field: &FieldCore) -> Result<(), JsValue> {
    let dark = field.theme().is_dark();
    let links = if dark { field.links() } else { Vec::new() };
    let mut pending_links = links.iter().peekable();

    for (index, particle) in field.particles().iter().enumerate() {
        let pulse = particle.pulse_factor();
        let center = (particle.x, particle.y);
        let alpha = particle.opacity * pulse;

        let fill = if dark {
            Fill::Glow(Paint::new(ACCENT_RGB, alpha))
        } else {
            Fill::Flat(Paint::new(NEUTRAL_RGB, alpha * LIGHT_OPACITY_SCALE))
        };
        surface.fill_circle(center, particle.size * pulse, fill)?;

        // Links are ordered by their lower index, so each particle's
        // connections draw right after its disc, matching collection order.
        while pending_links.peek().is_some_and(|link| link.from == index) {
            if let Some(link) = pending_links.next() {
                let other = field.particles()[link.to];
                surface.link_line(center, (other.x, other.y), Paint::new(ACCENT_RGB, link.alpha))?;
            }
        }
    }
    Ok(())
}
