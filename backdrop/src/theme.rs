//! Light/dark theme tag and the field tuning each theme implies.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_PARTICLE_COUNT, DARK_SPEED_RANGE, LIGHT_PARTICLE_COUNT, LIGHT_SPEED_RANGE};

/// The site-wide color theme, mirrored from the root `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted theme tag. Unknown values fall back to light.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The tag persisted to storage and set on the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Number of particles a field spawns under this theme.
    #[must_use]
    pub fn particle_count(self) -> usize {
        match self {
            Self::Light => LIGHT_PARTICLE_COUNT,
            Self::Dark => DARK_PARTICLE_COUNT,
        }
    }

    /// Per-axis velocity half-range in pixels per frame.
    #[must_use]
    pub fn speed_range(self) -> f64 {
        match self {
            Self::Light => LIGHT_SPEED_RANGE,
            Self::Dark => DARK_SPEED_RANGE,
        }
    }
}
