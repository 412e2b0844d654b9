//! Frame driver timing
//!
//! Turns `requestAnimationFrame` timestamps into deltas measured in frames of
//! a 60 Hz display, so a frame on time has delta 1.0.

use crate::consts::{FRAME_RATE, MAX_FRAME_DELTA};

/// Milliseconds per nominal frame
pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

/// Start/stop frame clock
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    running: bool,
}

impl FrameClock {
    /// A stopped clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume. The gap since the last frame before `stop` is not counted.
    pub fn start(&mut self) {
        self.running = true;
        self.last_ms = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Delta for the frame rendered at `now_ms`; 0.0 while stopped
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        if !self.running {
            return 0.0;
        }
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / FRAME_MS) as f32,
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        delta.clamp(0.0, MAX_FRAME_DELTA)
    }
}
