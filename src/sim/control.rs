//! Keyboard-driven paddle velocity
//!
//! Edges are replayed in arrival order. Each one reads the keys held at the
//! moment it happened, so the result does not depend on frame timing.

use super::state::Paddle;
use crate::consts::DAMPING;
use crate::input::{EdgeKind, InputFrame, Key};

/// Apply the frame's Up/Down edges to the paddle's vertical velocity
///
/// - press with the opposite key up: full speed in the pressed direction
/// - press with the opposite key down: damped speed in the old direction
/// - release with the opposite key down: full speed toward the opposite key
/// - release with nothing else held: damped coast in the released direction
///
/// The two opposite-key rules keep the classic handlers' behavior, not a
/// symmetric "damped toward the new key" reading.
pub fn apply_controls(paddle: &mut Paddle, frame: &InputFrame, speed: f32) {
    for edge in &frame.edges {
        let (dir, opposite) = match edge.key {
            Key::Up => (-1.0, Key::Down),
            Key::Down => (1.0, Key::Up),
            Key::Action => continue,
        };
        let opposite_held = edge.held.contains(opposite);

        paddle.vel.y = match (edge.kind, opposite_held) {
            (EdgeKind::Press, false) => dir * speed,
            (EdgeKind::Press, true) => -dir * speed * DAMPING,
            (EdgeKind::Release, true) => -dir * speed,
            (EdgeKind::Release, false) => dir * speed * DAMPING,
        };
    }
}
