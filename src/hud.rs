//! HUD text and overlays
//!
//! Everything here is derived from `GameState` on demand; the platform layer
//! decides where the strings end up.

use crate::consts::{BALL_SPEED, FRAME_RATE};
use crate::sim::{GamePhase, GameState};

/// Title line of the lose overlay
pub const LOSE_TITLE: &str = "You lost!";

/// Elapsed play time as `mm:ss`
pub fn format_elapsed(tick: u64) -> String {
    let secs = tick / FRAME_RATE;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Ball speed relative to the serve speed, e.g. `Speed: 1.3x`
pub fn format_speed(vx: f32) -> String {
    let speed = vx.abs();
    if speed > 0.0 {
        format!("Speed: {:.1}x", speed - BALL_SPEED + 1.0)
    } else {
        "Speed: 0".to_string()
    }
}

pub fn start_prompt(action_key: &str) -> String {
    format!("Press {} to start", action_key.to_uppercase())
}

pub fn play_again_prompt(action_key: &str) -> String {
    format!("Press {} to play again", action_key.to_uppercase())
}

/// One frame's worth of HUD content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// Start screen visible
    pub start_screen: bool,
    pub start_prompt: String,
    /// Game screen (and readouts) visible
    pub game_screen: bool,
    pub time: String,
    pub speed: String,
    /// Lose overlay visible
    pub lose_overlay: bool,
    pub lose_title: &'static str,
    pub play_again: String,
}

impl Hud {
    pub fn from_state(state: &GameState, action_key: &str) -> Self {
        Self {
            start_screen: state.scenes.start,
            start_prompt: start_prompt(action_key),
            game_screen: state.scenes.game,
            time: format_elapsed(state.tick),
            speed: format_speed(state.ball.vel.x),
            lose_overlay: state.phase == GamePhase::Lost,
            lose_title: LOSE_TITLE,
            play_again: play_again_prompt(action_key),
        }
    }
}
