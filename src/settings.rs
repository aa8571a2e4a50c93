//! Startup settings
//!
//! Only the shape of a run is configurable (playfield size, starting lives,
//! RNG seed). Gameplay tuning lives in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected settings, reported once at startup
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Starting lives must be at least one
    #[error("starting lives must be positive, got {0}")]
    NonPositiveLives(i32),
    /// Playfield width/height must be finite and greater than zero
    #[error("invalid playfield size {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// Settings JSON was malformed
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lives at the start of a run (and after every reset)
    pub starting_lives: i32,
    /// Visible playfield width; items spawn just past this edge
    pub playfield_width: f32,
    /// Visible playfield height; the ground sits at 65% of it
    pub playfield_height: f32,
    /// Spawner seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            seed: None,
        }
    }
}

impl Settings {
    /// Check startup preconditions
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.starting_lives <= 0 {
            return Err(SettingsError::NonPositiveLives(self.starting_lives));
        }
        let dims_ok = |v: f32| v.is_finite() && v > 0.0;
        if !dims_ok(self.playfield_width) || !dims_ok(self.playfield_height) {
            return Err(SettingsError::InvalidPlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Y coordinate of the ground line
    pub fn ground_y(&self) -> f32 {
        self.playfield_height * GROUND_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.ground_y(), 260.0);
    }

    #[test]
    fn test_rejects_non_positive_lives() {
        let settings = Settings {
            starting_lives: -1,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositiveLives(-1))
        ));

        let settings = Settings {
            starting_lives: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_playfield() {
        let settings = Settings {
            playfield_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidPlayfield { .. })
        ));

        let settings = Settings {
            playfield_height: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.starting_lives, STARTING_LIVES);
        assert_eq!(settings.playfield_width, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_from_json_validates() {
        let err = Settings::from_json(r#"{ "starting_lives": -3 }"#).unwrap_err();
        assert!(err.to_string().contains("-3"));

        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse settings"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/drop-dash/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
