//! Sound effects
//!
//! Playback is best-effort and never blocks: `play` returns immediately, a
//! sound that failed to load stays silent, and overlapping triggers may
//! sound at the same time.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a wall or the paddle
    Bounce,
    /// Ball got past the paddle
    Lose,
}

impl SoundEffect {
    /// Path of the sample, relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            SoundEffect::Bounce => "sounds/ball1.wav",
            SoundEffect::Lose => "sounds/lose.wav",
        }
    }
}

/// Where the game sends its sounds
pub trait AudioSink {
    /// Fire and forget
    fn play(&self, effect: SoundEffect);
}

/// Discards every sound
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&self, effect: SoundEffect) {
        log::trace!("(silent) {:?}", effect);
    }
}

/// Effective volume from settings
pub fn effective_volume(master: f32, sfx: f32, muted: bool) -> f32 {
    if muted {
        0.0
    } else {
        (master * sfx).clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::anyhow;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::HtmlAudioElement;

    use super::{AudioSink, SoundEffect, effective_volume};
    use crate::settings::Settings;

    /// Audio manager backed by HTML audio elements
    pub struct AudioManager {
        bounce: Option<HtmlAudioElement>,
        lose: Option<HtmlAudioElement>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let volume = effective_volume(settings.master_volume, settings.sfx_volume, settings.muted);
            Self {
                bounce: Self::load(SoundEffect::Bounce),
                lose: Self::load(SoundEffect::Lose),
                volume,
            }
        }

        fn load(effect: SoundEffect) -> Option<HtmlAudioElement> {
            match HtmlAudioElement::new_with_src(effect.path()) {
                Ok(el) => {
                    el.set_preload("auto");
                    Some(el)
                }
                Err(e) => {
                    log::warn!("Failed to load {} - {:?} disabled: {:?}", effect.path(), effect, e);
                    None
                }
            }
        }

        fn element(&self, effect: SoundEffect) -> Option<&HtmlAudioElement> {
            match effect {
                SoundEffect::Bounce => self.bounce.as_ref(),
                SoundEffect::Lose => self.lose.as_ref(),
            }
        }

        fn try_play(&self, effect: SoundEffect, el: &HtmlAudioElement) -> anyhow::Result<()> {
            // A clone per trigger lets overlapping sounds play together
            let voice: HtmlAudioElement = el
                .clone_node()
                .map_err(|e| anyhow!("clone audio node: {:?}", e))?
                .dyn_into()
                .map_err(|_| anyhow!("cloned node is not an audio element"))?;
            voice.set_volume(self.volume as f64);
            let playing: js_sys::Promise = voice.play().map_err(|e| anyhow!("play: {:?}", e))?;

            // Autoplay policy rejections arrive later; the game never waits on them
            spawn_local(async move {
                if let Err(e) = JsFuture::from(playing).await {
                    log::debug!("{:?} playback rejected: {:?}", effect, e);
                }
            });
            Ok(())
        }
    }

    impl AudioSink for AudioManager {
        fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(el) = self.element(effect) else { return };
            if let Err(e) = self.try_play(effect, el) {
                log::warn!("{:?}: {}", effect, e);
            }
        }
    }
}
