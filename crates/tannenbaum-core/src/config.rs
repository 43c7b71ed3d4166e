//! Panel options, passed as JSON from the host page

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::camera::{CameraSettings, DEFAULT_CAMERA_DISTANCE, DEFAULT_FIELD_OF_VIEW};
use crate::color::{ColorError, Rgb};
use crate::layout::DEFAULT_ORNAMENT_COUNT;
use crate::spin::DEFAULT_ROTATION_STEP;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse panel options: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid background color: {0}")]
    Background(#[from] ColorError),
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Options for one mounted tree panel. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Seed for ornament placement; drawn at random when absent
    pub seed: Option<u64>,
    pub ornament_count: usize,
    /// Radians per frame
    pub rotation_step: f32,
    /// Scene background, `#rrggbb`
    pub background: String,
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    pub camera_distance: f32,
    /// Browser console log level: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ornament_count: DEFAULT_ORNAMENT_COUNT,
            rotation_step: DEFAULT_ROTATION_STEP,
            background: default_background(),
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            log_level: default_log_level(),
        }
    }
}

pub const DEFAULT_BACKGROUND: Rgb = Rgb(0x0A0A1A);

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl TreeConfig {
    /// Parse options from JSON; `None` or a blank string yields the defaults
    pub fn from_json(json: Option<&str>) -> Result<Self, ConfigError> {
        let config = match json.map(str::trim) {
            Some(s) if !s.is_empty() => serde_json::from_str::<TreeConfig>(s)?,
            _ => {
                debug!("No panel options given, using defaults");
                TreeConfig::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rotation_step.is_finite() || self.rotation_step <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "rotation_step",
                reason: format!("must be a positive number, got {}", self.rotation_step),
            });
        }
        if self.ornament_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ornament_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(ConfigError::InvalidValue {
                field: "field_of_view",
                reason: format!("must be within (0, 180) degrees, got {}", self.field_of_view),
            });
        }
        if !self.camera_distance.is_finite() || self.camera_distance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "camera_distance",
                reason: format!("must be a positive number, got {}", self.camera_distance),
            });
        }
        self.background_color()?;
        Ok(())
    }

    /// The configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }

    pub fn background_color(&self) -> Result<Rgb, ColorError> {
        self.background.parse()
    }

    pub fn camera(&self) -> CameraSettings {
        CameraSettings {
            field_of_view: self.field_of_view,
            distance: self.camera_distance,
            ..CameraSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let config = TreeConfig::from_json(None).unwrap();
        assert_eq!(config, TreeConfig::default());
        assert_eq!(config.ornament_count, 20);
        assert_eq!(config.rotation_step, 0.01);
        assert_eq!(config.background_color().unwrap(), Rgb(0x0A0A1A));

        let blank = TreeConfig::from_json(Some("  ")).unwrap();
        assert_eq!(blank, TreeConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = TreeConfig::from_json(Some(r#"{"seed": 99, "rotation_step": 0.02}"#)).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.rotation_step, 0.02);
        assert_eq!(config.ornament_count, 20);
        assert_eq!(config.camera().distance, 8.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = TreeConfig::from_json(Some(r#"{"rotation_step": 0}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "rotation_step", .. }));

        let err = TreeConfig::from_json(Some(r#"{"ornament_count": 0}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "ornament_count", .. }));

        let err = TreeConfig::from_json(Some(r#"{"field_of_view": 180}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "field_of_view", .. }));

        let err = TreeConfig::from_json(Some(r#"{"background": "navy"}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::Background(_)));
    }

    #[test]
    fn test_fixed_seed_is_kept() {
        let config = TreeConfig {
            seed: Some(5),
            ..TreeConfig::default()
        };
        assert_eq!(config.seed_or_random(), 5);
    }

    #[test]
    fn test_malformed_json() {
        let err = TreeConfig::from_json(Some("{seed:")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
