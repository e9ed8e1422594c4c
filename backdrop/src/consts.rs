//! Shared numeric constants for the backdrop crate.

// ── Field population ────────────────────────────────────────────

/// Particle count when the light theme is active.
pub const LIGHT_PARTICLE_COUNT: usize = 60;

/// Particle count when the dark theme is active.
pub const DARK_PARTICLE_COUNT: usize = 80;

/// Per-axis velocity half-range in light mode, pixels per frame.
pub const LIGHT_SPEED_RANGE: f64 = 0.3;

/// Per-axis velocity half-range in dark mode, pixels per frame.
pub const DARK_SPEED_RANGE: f64 = 0.5;

// ── Rendering ───────────────────────────────────────────────────

/// Background grid pitch in pixels.
pub const GRID_PITCH: f64 = 50.0;

/// Grid line alpha over a dark background.
pub const GRID_ALPHA_DARK: f64 = 0.03;

/// Grid line alpha over a light background.
pub const GRID_ALPHA_LIGHT: f64 = 0.05;

/// Maximum distance at which two dark-mode particles are linked, pixels.
pub const LINK_DISTANCE: f64 = 150.0;

/// Link alpha at distance zero; decays linearly to 0 at [`LINK_DISTANCE`].
pub const LINK_MAX_ALPHA: f64 = 0.15;

/// Link stroke width in pixels.
pub const LINK_WIDTH: f64 = 0.5;

/// Light-mode particles are drawn at this fraction of their pulsed opacity.
pub const LIGHT_OPACITY_SCALE: f64 = 0.4;

/// Accent color for dark-mode particles, links, and grid: sky blue.
pub const ACCENT_RGB: (u8, u8, u8) = (14, 165, 233);

/// Neutral color for light-mode particles and grid: slate gray.
pub const NEUTRAL_RGB: (u8, u8, u8) = (100, 116, 139);
