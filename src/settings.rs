//! Arena configuration, read from JSON.
//!
//! ```json
//! {
//!     "game": "gravity",
//!     "width": 8,
//!     "height": 6,
//!     "episodes": 100,
//!     "yellow": { "type": "Random", "seed": 1 },
//!     "red": { "type": "Random" }
//! }
//! ```
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SettingsError;
use crate::games::{Games, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArenaSettings {
    pub game: Games,
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    pub episodes: usize,
    pub yellow: PlayerSettings,
    pub red: PlayerSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerSettings {
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl ArenaSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ArenaSettings, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        ArenaSettings::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<ArenaSettings, SettingsError> {
        let settings: ArenaSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.episodes == 0 {
            return Err(SettingsError::Validation(
                "episodes must be at least 1".to_string(),
            ));
        }
        self.variant().map(|_| ())
    }

    pub fn variant(&self) -> Result<Variant, SettingsError> {
        self.game.variant(self.width, self.height)
    }
}
