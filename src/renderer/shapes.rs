//! Triangle-list tessellation of the paddle and the ball
//!
//! Output stays in screen pixels; the vertex shader maps it to clip space.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::vertex::{Vertex, colors};
use crate::consts::PADDLE_CORNER_RADIUS;
use crate::sim::GameState;

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 32;
/// Segments per rounded corner
pub const CORNER_SEGMENTS: u32 = 6;

/// Cover a convex outline with a triangle fan around `hub`
fn fan(hub: Vec2, outline: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for (i, &p1) in outline.iter().enumerate() {
        let p2 = outline[(i + 1) % outline.len()];
        vertices.extend([
            Vertex::at(hub, color),
            Vertex::at(p1, color),
            Vertex::at(p2, color),
        ]);
    }
    vertices
}

/// Filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let outline: Vec<Vec2> = (0..segments)
        .map(|i| center + Vec2::from_angle(i as f32 / segments as f32 * TAU) * radius)
        .collect();
    fan(center, &outline, color)
}

/// Filled rectangle with rounded corners
///
/// The radius is clamped to half the smaller side, so a thin paddle ends in
/// semicircles.
pub fn rounded_rect(
    pos: Vec2,
    size: Vec2,
    radius: f32,
    color: [f32; 4],
    corner_segments: u32,
) -> Vec<Vertex> {
    let r = radius.clamp(0.0, size.x.min(size.y) / 2.0);
    let segments = corner_segments.max(1);

    // Corner centers, walked clockwise on screen starting top-right
    let corners = [
        (Vec2::new(pos.x + size.x - r, pos.y + r), -FRAC_PI_2),
        (Vec2::new(pos.x + size.x - r, pos.y + size.y - r), 0.0),
        (Vec2::new(pos.x + r, pos.y + size.y - r), FRAC_PI_2),
        (Vec2::new(pos.x + r, pos.y + r), FRAC_PI_2 * 2.0),
    ];

    let outline: Vec<Vec2> = corners
        .iter()
        .flat_map(|&(center, start)| {
            (0..=segments).map(move |i| {
                center + Vec2::from_angle(start + i as f32 / segments as f32 * FRAC_PI_2) * r
            })
        })
        .collect();

    fan(pos + size / 2.0, &outline, color)
}

/// Everything visible for the current frame
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    if !state.scenes.game {
        return Vec::new();
    }

    let paddle = &state.paddle;
    let mut vertices = rounded_rect(
        paddle.pos,
        Vec2::new(paddle.width(), paddle.height()),
        PADDLE_CORNER_RADIUS,
        colors::PADDLE,
        CORNER_SEGMENTS,
    );
    vertices.extend(circle(
        state.ball.center(),
        state.ball.radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), v| (min.min(v.point()), max.max(v.point())),
        )
    }

    #[test]
    fn test_circle() {
        let verts = circle(Vec2::new(10.0, 20.0), 5.0, colors::BALL, 16);
        assert_eq!(verts.len(), 48);
        let (min, max) = bounds(&verts);
        assert!((min - Vec2::new(5.0, 15.0)).abs().max_element() < 1e-4);
        assert!((max - Vec2::new(15.0, 25.0)).abs().max_element() < 1e-4);
    }

    #[test]
    fn test_rounded_rect_stays_in_box() {
        let pos = Vec2::new(50.0, 250.0);
        let size = Vec2::new(5.0, 100.0);
        let verts = rounded_rect(pos, size, 10.0, colors::PADDLE, 4);
        assert_eq!(verts.len(), 4 * 5 * 3);

        let (min, max) = bounds(&verts);
        assert!(min.x >= pos.x - 1e-4 && min.y >= pos.y - 1e-4);
        assert!(max.x <= pos.x + size.x + 1e-4 && max.y <= pos.y + size.y + 1e-4);
        assert!((max.y - (pos.y + size.y)).abs() < 1e-4);
    }

    #[test]
    fn test_frame_hidden_on_start_screen() {
        let mut state = GameState::new();
        assert!(frame_vertices(&state).is_empty());

        state.scenes.show_game();
        let verts = frame_vertices(&state);
        let expected = (4 * (CORNER_SEGMENTS + 1) * 3 + CIRCLE_SEGMENTS * 3) as usize;
        assert_eq!(verts.len(), expected);
    }
}
