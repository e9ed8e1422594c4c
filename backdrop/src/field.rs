//! Particle field state and per-frame simulation.
//!
//! Pure math, no browser types. Randomness is injected as a unit-interval
//! sampler so spawning is deterministic under test; the WASM host passes
//! `js_sys::Math::random`.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::f64::consts::TAU;

use crate::consts::{LINK_DISTANCE, LINK_MAX_ALPHA};
use crate::theme::Theme;

/// A single animated dot.
///
/// Velocity, size, base opacity, and pulse speed are fixed at spawn; only
/// the position and pulse phase change per frame.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
}

impl Particle {
    /// The breathing multiplier applied to the drawn radius and opacity.
    #[must_use]
    pub fn pulse_factor(&self) -> f64 {
        pulse_factor(self.pulse_phase)
    }
}

/// Pulse multiplier for a raw phase value. Always within `[0.4, 1.0]`.
#[must_use]
pub fn pulse_factor(phase: f64) -> f64 {
    phase.sin() * 0.3 + 0.7
}

/// A dark-mode connection between two nearby particles, by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub alpha: f64,
}

/// The particle collection plus the bounds it wraps against.
///
/// Owns its particles outright; the drawing surface and frame scheduler
/// are shared capabilities held by [`crate::animation::Animation`].
pub struct FieldCore {
    pub(crate) theme: Theme,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) particles: Vec<Particle>,
}

impl FieldCore {
    /// Populate a field for `theme` within `width` × `height`.
    ///
    /// `sample` must return uniform values in `[0, 1)`.
    #[must_use]
    pub fn spawn(theme: Theme, width: f64, height: f64, sample: &mut dyn FnMut() -> f64) -> Self {
        let particles = (0..theme.particle_count())
            .map(|_| spawn_particle(theme, width, height, sample))
            .collect();
        Self { theme, width, height, particles }
    }

    /// Advance every particle by one frame: move, wrap, pulse.
    ///
    /// Positions wrap toroidally via `rem_euclid`, so `0 <= x < width` and
    /// `0 <= y < height` hold after any number of steps.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x = (p.x + p.vx).rem_euclid(self.width);
            p.y = (p.y + p.vy).rem_euclid(self.height);
            p.pulse_phase += p.pulse_speed;
        }
    }

    /// Rebind the wrap bounds after a viewport resize.
    ///
    /// Particle state is untouched; positions keep wrapping against the
    /// new dimensions on subsequent steps.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Connections between nearby particles, each unordered pair considered
    /// exactly once. Alpha decays linearly from [`LINK_MAX_ALPHA`] at
    /// distance zero to 0 at [`LINK_DISTANCE`]; pairs at or beyond the
    /// threshold produce no link. This is the O(n²) dark-mode cost; the
    /// renderer only asks for it when the theme is dark.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (offset, b) in self.particles[i + 1..].iter().enumerate() {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        from: i,
                        to: i + 1 + offset,
                        alpha: (1.0 - distance / LINK_DISTANCE) * LINK_MAX_ALPHA,
                    });
                }
            }
        }
        links
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

fn spawn_particle(theme: Theme, width: f64, height: f64, sample: &mut dyn FnMut() -> f64) -> Particle {
    let speed = theme.speed_range();
    Particle {
        x: sample() * width,
        y: sample() * height,
        size: sample() * 2.0 + 1.0,
        vx: (sample() * 2.0 - 1.0) * speed,
        vy: (sample() * 2.0 - 1.0) * speed,
        opacity: sample() * 0.5 + 0.2,
        pulse_speed: sample() * 0.02 + 0.01,
        pulse_phase: sample() * TAU,
    }
}
