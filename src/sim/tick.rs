//! Frame step
//!
//! Core game loop that advances the simulation by one rendered frame.

use super::control::apply_controls;
use super::physics::{BallOutcome, grow_ball_speed, move_ball, move_paddle};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::input::{InputFrame, Key};

/// Advance the game state by one frame of `delta` frame units
pub fn tick(state: &mut GameState, input: &InputFrame, delta: f32) {
    match state.phase {
        GamePhase::Idle => {
            if input.was_pressed(Key::Action) {
                state.scenes.show_game();
                state.start_game();
                state.push_event(GameEvent::Started);
            }
        }
        GamePhase::Playing => play(state, input, delta),
        GamePhase::Lost => {
            if input.was_pressed(Key::Action) {
                state.start_game();
                state.push_event(GameEvent::Replayed);
            }
        }
    }
}

fn play(state: &mut GameState, input: &InputFrame, delta: f32) {
    state.tick += 1;

    apply_controls(&mut state.paddle, input, MAX_SPEED);
    move_paddle(&mut state.paddle, delta);

    let outcome = move_ball(&mut state.ball, &state.paddle, delta, &mut state.events);
    if outcome == BallOutcome::Lost {
        state.phase = GamePhase::Lost;
        state.push_event(GameEvent::Lost);
        return;
    }

    if state.tick % SPEEDUP_INTERVAL_TICKS == 0 && state.scenes.game {
        grow_ball_speed(&mut state.ball);
        log::debug!(
            "Ball speed up at tick {}: ({:.3}, {:.3})",
            state.tick,
            state.ball.vel.x,
            state.ball.vel.y
        );
    }
}
