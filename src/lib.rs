//! Solo Pong - one paddle, one ball, one wall to defend
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game phases)
//! - `input`: Edge-triggered keyboard tracking
//! - `game`: Per-frame orchestration of input, simulation and audio
//! - `hud`: Elapsed-time and speed readouts, prompts and overlays
//! - `renderer`: WebGPU rendering pipeline

pub mod audio;
pub mod clock;
pub mod game;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, NullAudio, SoundEffect};
pub use clock::FrameClock;
pub use game::Game;
pub use hud::Hud;
pub use input::{InputFrame, InputTracker, Key, KeyBinding};
pub use settings::Settings;

/// Game configuration constants
///
/// Distances are screen pixels, velocities are pixels per frame and time is
/// measured in frames of a 60 Hz display.
pub mod consts {
    /// Screen dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Nominal display rate the frame units are based on
    pub const FRAME_RATE: u64 = 60;
    /// Largest delta accepted from the frame driver (10 fps)
    pub const MAX_FRAME_DELTA: f32 = 6.0;

    /// Paddle defaults
    pub const PADDLE_X: f32 = 50.0;
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_CORNER_RADIUS: f32 = 10.0;
    /// Top paddle speed, also the speed a key press sets
    pub const MAX_SPEED: f32 = 5.0;
    /// Per-frame velocity decay once the paddle is coasting
    pub const DAMPING: f32 = 0.95;
    /// Below this speed a coasting paddle stops
    pub const STOP_EPSILON: f32 = 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const MAX_BALL_SPEED: f32 = 20.0;
    /// Speed multiplier applied at every growth tick
    pub const BALL_SPEED_INCREASE: f32 = 1.005;
    /// Ticks between growth steps (one second)
    pub const SPEEDUP_INTERVAL_TICKS: u64 = 60;
}
