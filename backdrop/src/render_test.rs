use super::*;

use crate::field::Particle;
use crate::surface::{DrawOp, RecordingSurface};
use crate::theme::Theme;

fn particle(x: f64, y: f64) -> Particle {
    Particle {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        size: 2.0,
        opacity: 0.5,
        pulse_phase: 0.0,
        pulse_speed: 0.02,
    }
}

fn field_with(theme: Theme, particles: Vec<Particle>) -> FieldCore {
    FieldCore { theme, width: 200.0, height: 100.0, particles }
}

fn drawn(theme: Theme, particles: Vec<Particle>) -> RecordingSurface {
    let mut surface = RecordingSurface::sized(200.0, 100.0);
    let field = field_with(theme, particles);
    draw(&mut surface, &field).unwrap();
    surface
}

#[test]
fn frame_starts_with_a_clear() {
    let surface = drawn(Theme::Light, vec![particle(10.0, 10.0)]);
    assert_eq!(surface.ops[0], DrawOp::Clear);
}

#[test]
fn grid_covers_surface_at_50px_pitch() {
    let surface = drawn(Theme::Light, Vec::new());
    let grid: Vec<&DrawOp> = surface
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::GridLine { .. }))
        .collect();
    // Verticals at x = 0, 50, 100, 150; horizontals at y = 0, 50.
    assert_eq!(grid.len(), 6);
}

#[test]
fn grid_lines_span_the_full_surface() {
    let surface = drawn(Theme::Light, Vec::new());
    for op in &surface.ops {
        if let DrawOp::GridLine { from, to, .. } = op {
            if from.0 == to.0 {
                assert_eq!((from.1, to.1), (0.0, 100.0));
            } else {
                assert_eq!((from.0, to.0), (0.0, 200.0));
            }
        }
    }
}

#[test]
fn grid_paint_follows_theme() {
    let light = drawn(Theme::Light, Vec::new());
    let dark = drawn(Theme::Dark, Vec::new());

    let paint_of = |surface: &RecordingSurface| match surface.ops[1] {
        DrawOp::GridLine { paint, .. } => paint,
        ref other => panic!("expected grid line, got {other:?}"),
    };

    assert_eq!(paint_of(&light), Paint::new((100, 116, 139), 0.05));
    assert_eq!(paint_of(&dark), Paint::new((14, 165, 233), 0.03));
}

#[test]
fn grid_draws_before_any_particle() {
    let surface = drawn(Theme::Dark, vec![particle(10.0, 10.0)]);
    let last_grid = surface
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::GridLine { .. }));
    let first_circle = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Circle { .. }));
    assert!(last_grid.unwrap() < first_circle.unwrap());
}

#[test]
fn light_particles_fill_flat_neutral_at_scaled_alpha() {
    let surface = drawn(Theme::Light, vec![particle(10.0, 10.0)]);
    let circles = surface.circles();
    assert_eq!(circles.len(), 1);
    // phase 0 pulses at 0.7: radius 2 * 0.7, alpha 0.5 * 0.7 * 0.4.
    assert_eq!(
        circles[0],
        DrawOp::Circle {
            center: (10.0, 10.0),
            radius: 1.4,
            fill: Fill::Flat(Paint::new((100, 116, 139), 0.5 * 0.7 * 0.4)),
        }
    );
}

#[test]
fn dark_particles_glow_accent_at_pulsed_alpha() {
    let surface = drawn(Theme::Dark, vec![particle(10.0, 10.0)]);
    let circles = surface.circles();
    assert_eq!(circles.len(), 1);
    assert_eq!(
        circles[0],
        DrawOp::Circle {
            center: (10.0, 10.0),
            radius: 1.4,
            fill: Fill::Glow(Paint::new((14, 165, 233), 0.5 * 0.7)),
        }
    );
}

#[test]
fn every_particle_gets_a_disc() {
    let particles: Vec<Particle> = (0..10)
        .map(|i| particle(f64::from(i) * 20.0, 50.0))
        .collect();
    let surface = drawn(Theme::Dark, particles);
    assert_eq!(surface.circles().len(), 10);
}

#[test]
fn dark_mode_draws_links_between_nearby_particles() {
    let surface = drawn(Theme::Dark, vec![particle(0.0, 0.0), particle(100.0, 0.0)]);
    let links = surface.link_ops();
    assert_eq!(links.len(), 1);
    assert_eq!(
        links[0],
        DrawOp::Link {
            from: (0.0, 0.0),
            to: (100.0, 0.0),
            paint: Paint::new((14, 165, 233), (1.0 - 100.0 / 150.0) * 0.15),
        }
    );
}

#[test]
fn light_mode_draws_no_links() {
    let surface = drawn(Theme::Light, vec![particle(0.0, 0.0), particle(10.0, 0.0)]);
    assert!(surface.link_ops().is_empty());
}

#[test]
fn distant_dark_particles_stay_unlinked() {
    let surface = drawn(Theme::Dark, vec![particle(0.0, 0.0), particle(190.0, 90.0)]);
    assert!(surface.link_ops().is_empty());
}

#[test]
fn links_draw_after_their_lower_particle() {
    let surface = drawn(Theme::Dark, vec![particle(0.0, 0.0), particle(100.0, 0.0)]);
    let first_circle = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Circle { .. }));
    let link = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Link { .. }));
    assert!(first_circle.unwrap() < link.unwrap());
}
