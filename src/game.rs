//! Per-frame orchestration
//!
//! `Game` owns the simulation, the keyboard tracker and the frame clock. It
//! is shared by every platform: the browser feeds it DOM events and animation
//! frames, the native build drives it directly.

use crate::audio::{AudioSink, SoundEffect};
use crate::clock::FrameClock;
use crate::hud::{Hud, format_elapsed, format_speed};
use crate::input::{InputTracker, Key};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Letters bound to each logical key
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyMap {
    up: String,
    down: String,
    action: String,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputTracker,
    pub clock: FrameClock,
    keys: KeyMap,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let keys = KeyMap {
            up: settings.up_key.clone(),
            down: settings.down_key.clone(),
            action: settings.action_key.clone(),
        };

        // Only the start key listens until the first game begins
        let mut input = InputTracker::new();
        input.bind(&keys.action, Key::Action);

        Self {
            state: GameState::new(),
            input,
            clock: FrameClock::new(),
            keys,
        }
    }

    /// Returns true when the browser's default action should be suppressed
    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    /// Run the frame rendered at `now_ms`
    pub fn frame(&mut self, now_ms: f64, audio: &dyn AudioSink) {
        let delta = self.clock.advance(now_ms);
        self.step(delta, audio);
    }

    /// Run one frame with an explicit delta
    pub fn step(&mut self, delta: f32, audio: &dyn AudioSink) {
        let frame = self.input.frame();
        tick(&mut self.state, &frame, delta);

        for event in self.state.drain_events() {
            self.handle(event, audio);
        }
    }

    fn handle(&mut self, event: GameEvent, audio: &dyn AudioSink) {
        match event {
            GameEvent::Started => {
                self.input.unsubscribe(Key::Action);
                self.input.bind(&self.keys.up, Key::Up);
                self.input.bind(&self.keys.down, Key::Down);
                self.clock.start();
                log::info!("Game started");
            }
            GameEvent::Replayed => {
                self.input.unsubscribe(Key::Action);
                self.clock.start();
                log::info!("Game restarted");
            }
            GameEvent::Bounce => {
                log::debug!("Bounce at tick {}", self.state.tick);
                audio.play(SoundEffect::Bounce);
            }
            GameEvent::Lost => {
                self.clock.stop();
                self.input.bind(&self.keys.action, Key::Action);
                audio.play(SoundEffect::Lose);
                log::info!(
                    "Game over after {} ({})",
                    format_elapsed(self.state.tick),
                    format_speed(self.state.ball.vel.x)
                );
            }
        }
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state, &self.keys.action)
    }
}
