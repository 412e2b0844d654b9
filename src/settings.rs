//! Player preferences
//!
//! Persisted in LocalStorage on the web; native builds always use defaults.

use serde::{Deserialize, Serialize};

/// Player preferences: key bindings and volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Controls ===
    /// Single character moving the paddle up
    pub up_key: String,
    /// Single character moving the paddle down
    pub down_key: String,
    /// Single character starting / restarting the game
    pub action_key: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            up_key: "w".to_string(),
            down_key: "s".to_string(),
            action_key: "x".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const STORAGE_KEY: &'static str = "solo_pong_settings";

    /// Parse stored settings, falling back to defaults on malformed JSON
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Replace unusable or clashing keys with defaults and clamp volumes
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        for (key, fallback) in [
            (&mut self.up_key, defaults.up_key),
            (&mut self.down_key, defaults.down_key),
            (&mut self.action_key, defaults.action_key),
        ] {
            if key.chars().count() != 1 {
                log::warn!("Key binding {:?} is not a single character, using {:?}", key, fallback);
                *key = fallback;
            } else {
                *key = key.to_lowercase();
            }
        }

        // One letter may drive only one logical key
        let (up, down, action) = (&self.up_key, &self.down_key, &self.action_key);
        if up == down || up == action || down == action {
            log::warn!(
                "Key bindings up {:?}, down {:?}, action {:?} overlap, using defaults",
                up,
                down,
                action
            );
            let Self {
                up_key,
                down_key,
                action_key,
                ..
            } = Self::default();
            self.up_key = up_key;
            self.down_key = down_key;
            self.action_key = action_key;
        }

        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    /// Stored settings, or defaults (written back so they can be edited in place)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match web::read(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                log::info!("Loaded settings from LocalStorage");
                Self::from_json(&json)
            }
            Ok(None) => {
                log::info!("No stored settings, using defaults");
                let settings = Self::default();
                settings.save();
                settings
            }
            Err(e) => {
                log::warn!("Settings unavailable ({:#}), using defaults", e);
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let saved = serde_json::to_string(self)
            .map_err(anyhow::Error::from)
            .and_then(|json| web::write(Self::STORAGE_KEY, &json));
        match saved {
            Ok(()) => log::debug!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {:#}", e),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::{Context, anyhow};
    use web_sys::Storage;

    fn storage() -> anyhow::Result<Storage> {
        web_sys::window()
            .context("no window")?
            .local_storage()
            .map_err(|e| anyhow!("LocalStorage blocked: {:?}", e))?
            .context("LocalStorage not supported")
    }

    pub fn read(key: &str) -> anyhow::Result<Option<String>> {
        storage()?
            .get_item(key)
            .map_err(|e| anyhow!("read {key}: {:?}", e))
    }

    pub fn write(key: &str, value: &str) -> anyhow::Result<()> {
        storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("write {key}: {:?}", e))
    }
}
