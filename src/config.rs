use dioxus::logger::tracing::{info, warn};
use serde::Deserialize;

use crate::error::SettingsError;
use crate::playback::{clamp_percent, DEFAULT_VOLUME};
use crate::store::Track;

const BUNDLED_SETTINGS: &str = include_str!("../assets/player.json");

/// Player settings bundled with the app.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Volume pushed to the audio element when the player mounts.
    pub default_volume: f64,
    /// Moving to another track marks the store playing.
    pub autoplay: bool,
    /// DOM id of the shared `<audio>` element.
    pub audio_element_id: String,
    /// Tracks handed to the app-shell store.
    pub tracks: Vec<Track>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            default_volume: DEFAULT_VOLUME,
            autoplay: true,
            audio_element_id: "player-bar-audio".to_string(),
            tracks: Vec::new(),
        }
    }
}

impl PlayerSettings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = serde_json::from_str(raw)?;
        settings.default_volume = clamp_percent(settings.default_volume);
        if settings.audio_element_id.trim().is_empty() {
            settings.audio_element_id = Self::default().audio_element_id;
        }
        Ok(settings)
    }

    /// Reads the bundled `assets/player.json`, falling back to defaults when it
    /// cannot be parsed.
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_SETTINGS) {
            Ok(settings) => {
                info!(tracks = settings.tracks.len(), "player settings loaded");
                settings
            }
            Err(err) => {
                warn!("{err}; using default player settings");
                Self::default()
            }
        }
    }
}
