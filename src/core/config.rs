//! Game tunables.
//!
//! Every field has a default matching the constants in [`crate::core::constants`].
//! A JSON file passed with `--config` may override any subset of them:
//!
//! ```json
//! { "canvas_height": 600.0, "tick_interval_ms": 20 }
//! ```

use crate::balloons::VOCABULARY;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or wrong field types
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value that parses but cannot be played with
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for one play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub spawn_margin: f64,
    pub balloon_radius: f64,
    /// Inclusive lower bound of the drift speed range (units per tick).
    pub min_speed: f64,
    /// Exclusive upper bound of the drift speed range.
    pub max_speed: f64,
    pub correct_points: u32,
    pub wrong_penalty: u32,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            spawn_margin: SPAWN_MARGIN,
            balloon_radius: BALLOON_RADIUS,
            min_speed: MIN_BALLOON_SPEED,
            max_speed: MAX_BALLOON_SPEED,
            correct_points: CORRECT_POP_POINTS,
            wrong_penalty: WRONG_POP_PENALTY,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Pretty JSON with every field, suitable as a starting `--config` file.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make spawning or ticking impossible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(invalid("canvas_width", "must be a positive number"));
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            return Err(invalid("canvas_height", "must be a positive number"));
        }
        if !(self.balloon_radius.is_finite() && self.balloon_radius > 0.0) {
            return Err(invalid("balloon_radius", "must be a positive number"));
        }
        // Keeps spawn ranges (down to 2 * height) and cell scaling finite
        for (field, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("balloon_radius", self.balloon_radius),
        ] {
            if value > MAX_CANVAS_EXTENT {
                return Err(invalid(
                    field,
                    format!("must be at most {}", MAX_CANVAS_EXTENT),
                ));
            }
        }
        if !(self.spawn_margin.is_finite() && self.spawn_margin >= 0.0) {
            return Err(invalid("spawn_margin", "must not be negative"));
        }
        if self.spawn_margin * 2.0 >= self.canvas_width {
            return Err(invalid(
                "spawn_margin",
                format!(
                    "twice the margin ({}) leaves no room on a canvas {} wide",
                    self.spawn_margin * 2.0,
                    self.canvas_width
                ),
            ));
        }
        if !(self.min_speed.is_finite() && self.min_speed > 0.0) {
            return Err(invalid("min_speed", "must be a positive number"));
        }
        if !(self.max_speed.is_finite() && self.max_speed > self.min_speed) {
            return Err(invalid("max_speed", "must be greater than min_speed"));
        }
        // A perfect game must not overflow the score
        let max_points = u32::MAX / VOCABULARY.len() as u32;
        if self.correct_points > max_points {
            return Err(invalid(
                "correct_points",
                format!("must be at most {}", max_points),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be at least 1"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.canvas_width, 800.0);
        assert_eq!(config.canvas_height, 500.0);
        assert_eq!(config.balloon_radius, 40.0);
        assert_eq!(config.correct_points, 10);
        assert_eq!(config.wrong_penalty, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "canvas_height": 600.0 }"#).unwrap();
        assert_eq!(config.canvas_height, 600.0);
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
        assert_eq!(config.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = GameConfig::from_json(r#"{ "gravity": 9.8 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = GameConfig::from_json("{ canvas_width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_speed_range_must_be_increasing() {
        let err = GameConfig::from_json(r#"{ "min_speed": 1.0, "max_speed": 1.0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "max_speed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_margin_must_fit_canvas() {
        let config = GameConfig {
            canvas_width: 80.0,
            ..GameConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "spawn_margin"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_huge_canvas_height_rejected() {
        // Finite, but twice of it is not
        match GameConfig::from_json(r#"{ "canvas_height": 1e308 }"#) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "canvas_height"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_huge_canvas_width_rejected() {
        let config = GameConfig {
            canvas_width: f64::MAX,
            ..GameConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "canvas_width"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_largest_canvas_still_accepted() {
        let config = GameConfig {
            canvas_width: MAX_CANVAS_EXTENT,
            canvas_height: MAX_CANVAS_EXTENT,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!((config.canvas_height * 2.0 + config.balloon_radius).is_finite());
    }

    #[test]
    fn test_huge_radius_rejected() {
        match GameConfig::from_json(r#"{ "balloon_radius": 1e300 }"#) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "balloon_radius"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_correct_points_capped_to_fit_a_full_game() {
        match GameConfig::from_json(r#"{ "correct_points": 4294967295 }"#) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "correct_points"),
            other => panic!("unexpected result: {other:?}"),
        }

        let max = u32::MAX / VOCABULARY.len() as u32;
        let config = GameConfig {
            correct_points: max,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!((max as u64) * (VOCABULARY.len() as u64) <= u32::MAX as u64);
    }

    #[test]
    fn test_pretty_json_reloads() {
        let config = GameConfig {
            canvas_height: 600.0,
            wrong_penalty: 3,
            ..GameConfig::default()
        };
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"canvas_height\": 600.0"));
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load(Path::new("/nonexistent/balloon-words.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_tick_interval_duration() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(TICK_INTERVAL_MS));
    }
}
