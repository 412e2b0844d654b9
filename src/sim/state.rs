//! Game state and core simulation types
//!
//! Every entity the game needs is a typed field on [`GameState`]; there is no
//! lookup by name that could come back empty.

use glam::Vec2;

use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, waiting for the first action press
    Idle,
    /// Active gameplay
    Playing,
    /// Ball got past the paddle, waiting for replay
    Lost,
}

/// Something the outside world should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First game started from the start screen
    Started,
    /// New game started from the lose overlay
    Replayed,
    /// Ball bounced off a wall or the paddle
    Bounce,
    /// Ball crossed the left edge
    Lost,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Only `y` is ever non-zero
    pub vel: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_X, HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0),
            vel: Vec2::ZERO,
        }
    }
}

impl Paddle {
    pub fn width(&self) -> f32 {
        PADDLE_WIDTH
    }

    pub fn height(&self) -> f32 {
        PADDLE_HEIGHT
    }
}

/// The ball. Drawn as a circle, collides as its bounding square.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
            vel: Vec2::splat(BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Side of the bounding square
    pub fn size(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }
}

/// Visibility of the two screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenes {
    pub start: bool,
    pub game: bool,
}

impl Default for Scenes {
    fn default() -> Self {
        Self {
            start: true,
            game: false,
        }
    }
}

impl Scenes {
    pub fn show_game(&mut self) {
        self.start = false;
        self.game = true;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub scenes: Scenes,
    /// Frames simulated since the current game started
    pub tick: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Raised during a tick, drained by the caller
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            scenes: Scenes::default(),
            tick: 0,
            paddle: Paddle::default(),
            ball: Ball::default(),
            events: Vec::new(),
        }
    }

    /// Begin a fresh game: tick 0, entities back at their serve positions
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.tick = 0;
        self.reset_positions();
    }

    pub fn reset_positions(&mut self) {
        self.paddle = Paddle::default();
        self.ball = Ball::default();
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.scenes.start && !state.scenes.game);
        assert_eq!(state.paddle.pos, Vec2::new(50.0, 250.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.ball.size(), 24.0);
        assert_eq!(state.ball.center(), Vec2::new(412.0, 312.0));
    }

    #[test]
    fn test_start_game_resets() {
        let mut state = GameState::new();
        state.tick = 777;
        state.paddle.pos.y = 10.0;
        state.paddle.vel.y = -5.0;
        state.ball.pos = Vec2::new(3.0, 4.0);
        state.ball.vel = Vec2::new(-12.0, 12.0);

        state.start_game();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.tick, 0);
        assert_eq!(state.paddle, Paddle::default());
        assert_eq!(state.ball, Ball::default());
    }

    #[test]
    fn test_show_game_is_exclusive() {
        let mut scenes = Scenes::default();
        scenes.show_game();
        assert!(!scenes.start);
        assert!(scenes.game);
    }
}
