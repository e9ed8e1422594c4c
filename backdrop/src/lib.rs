//! Animated particle backdrop for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the full lifecycle of the background canvas: spawning a themed particle
//! field, advancing and redrawing it once per display frame, and tearing
//! the loop down on theme changes or when the tab is hidden. The Leptos
//! host layer is responsible only for wiring DOM events (resize,
//! visibility, theme toggles) to the [`controller::Backdrop`].
//!
//! The per-frame math is headless: drawing goes through the
//! [`surface::Surface`] trait and frame cadence through
//! [`scheduler::FrameScheduler`], so the whole loop runs natively under
//! `cargo test` without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Owner of the current animation; destroy-and-recreate on theme change |
//! | [`animation`] | The self-rescheduling redraw loop |
//! | [`field`] | Particle state and per-frame simulation |
//! | [`render`] | Frame composition over the surface trait |
//! | [`surface`] | Drawing-surface trait and the canvas 2D implementation |
//! | [`scheduler`] | Frame scheduling trait and the `requestAnimationFrame` implementation |
//! | [`theme`] | Light/dark theme tag and per-theme field tuning |
//! | [`consts`] | Shared numeric constants (counts, speeds, colors) |

pub mod animation;
pub mod consts;
pub mod controller;
pub mod field;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod theme;
