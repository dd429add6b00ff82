//! Shape generation for 2D primitives and the full scene

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::levels::Rect;
use crate::settings::Settings;
use crate::sim::{GameState, GravityWell, Particle};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Filled circle fading from `inner` at the center to `outer` at the rim
pub fn radial_glow(
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, inner));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            outer,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            outer,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let (s1, c1) = theta1.sin_cos();
        let (s2, c2) = theta2.sin_cos();
        let inner1 = center + Vec2::new(c1, s1) * inner_radius;
        let outer1 = center + Vec2::new(c1, s1) * outer_radius;
        let inner2 = center + Vec2::new(c2, s2) * inner_radius;
        let outer2 = center + Vec2::new(c2, s2) * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a filled rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (rect.min(), rect.max());
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Rectangle outline `width` pixels thick, drawn inside the edges
pub fn rect_outline(r: &Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let width = width.min(r.w / 2.0).min(r.h / 2.0);
    let edges = [
        Rect::new(r.x, r.y, r.w, width),
        Rect::new(r.x, r.y + r.h - width, r.w, width),
        Rect::new(r.x, r.y + width, width, r.h - 2.0 * width),
        Rect::new(r.x + r.w - width, r.y + width, width, r.h - 2.0 * width),
    ];
    edges.iter().flat_map(|e| rect(e, color)).collect()
}

fn well(well: &GravityWell, settings: &Settings, time: f64, segments: u32) -> Vec<Vertex> {
    let opacity = well.life.clamp(0.0, 1.0);
    let [r, g, b] = colors::WELL;
    let mut vertices = Vec::new();

    if settings.well_glow {
        let pulse = if settings.glow_pulse() {
            1.0 + 0.04 * (time as f32 * 0.008).sin()
        } else {
            1.0
        };
        vertices.extend(radial_glow(
            well.pos,
            well.radius * opacity * pulse,
            [r, g, b, opacity * 0.5],
            [r, g, b, 0.0],
            segments,
        ));
    }
    vertices.extend(ring(well.pos, 4.0, 6.0, [r, g, b, opacity], segments));
    vertices
}

fn particle(p: &Particle) -> Vec<Vertex> {
    let [r, g, b] = p.color.rgb();
    circle(p.pos, p.size, [r, g, b, p.life.clamp(0.0, 1.0)], 8)
}

/// Build the triangle list for one frame, back to front
///
/// `time` is the host clock in milliseconds (only used for glow pulsing).
pub fn scene(state: &GameState, settings: &Settings, time: f64) -> Vec<Vertex> {
    let segments = settings.quality.circle_segments();
    let mut vertices = Vec::new();

    for obs in &state.obstacles {
        vertices.extend(rect(obs, colors::OBSTACLE));
        vertices.extend(rect_outline(obs, 1.0, colors::OBSTACLE_EDGE));
    }

    vertices.extend(circle(state.goal.pos, state.goal.radius, colors::GOAL, segments));
    vertices.extend(circle(
        state.goal.pos,
        state.goal.radius * 0.4,
        colors::GOAL_CORE,
        segments,
    ));

    for w in &state.wells {
        vertices.extend(well(w, settings, time, segments));
    }

    // Newest particles are the ones worth keeping when over budget
    let budget = settings.max_particles();
    let skip = state.particles.len().saturating_sub(budget);
    for p in state.particles.iter().skip(skip) {
        vertices.extend(particle(p));
    }

    vertices.extend(circle(state.orb.pos, state.orb.radius, colors::ORB, segments));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels;
    use crate::sim::{self, GameState};
    use crate::tuning::Tuning;

    fn level_two() -> GameState {
        let mut state = GameState::new(Tuning::default(), 1, Vec2::new(800.0, 600.0), 3);
        sim::start_game(&mut state, &levels::builtin());
        state
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, [1.0; 4], 16).len(), 48);
    }

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_scene_respects_particle_budget() {
        let mut state = level_two();
        sim::pulse(&mut state, Vec2::new(150.0, 150.0));
        let full = scene(&state, &Settings::default(), 0.0);
        let none = scene(
            &state,
            &Settings {
                particles: false,
                ..Settings::default()
            },
            0.0,
        );
        // Ten flash particles at 8 segments each
        assert_eq!(full.len() - none.len(), 10 * 8 * 3);
    }

    #[test]
    fn test_scene_draws_orb_last() {
        let state = level_two();
        let verts = scene(&state, &Settings::default(), 0.0);
        let last = verts.last().unwrap();
        assert_eq!(last.color, colors::ORB);
    }
}
