//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Input arrives once per frame as an `InputFrame`
//! - Side effects (sound, key re-binding) are reported as `GameEvent`s
//! - No rendering or platform dependencies

pub mod control;
pub mod physics;
pub mod state;
pub mod tick;

pub use control::apply_controls;
pub use physics::{BallOutcome, ball_paddle_hit, grow_ball_speed, move_ball, move_paddle};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Scenes};
pub use tick::tick;
