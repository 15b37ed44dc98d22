//! Player settings and preferences
//!
//! Persisted as JSON next to the high score. A missing or malformed file
//! falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::highscores::DEFAULT_HIGH_SCORE_FILE;

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === Loop ===
    /// Ticks per second
    pub target_fps: u32,
    /// Where the high score is kept
    pub high_score_path: String,
    /// Optional JSON file overriding the gameplay tuning
    pub tuning_path: Option<String>,
    /// Sessions the headless autopilot plays before quitting
    pub demo_sessions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            target_fps: FPS,
            high_score_path: DEFAULT_HIGH_SCORE_FILE.to_string(),
            tuning_path: None,
            demo_sessions: 3,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Frame rate with a floor of one tick per second
    pub fn effective_fps(&self) -> u32 {
        self.target_fps.max(1)
    }
}
