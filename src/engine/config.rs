// src/engine/config.rs

//! Tuning constants for one play session.
//!
//! `AdaptiveConfig` is immutable once the engine is built. Callers usually
//! start from the defaults and override a handful of fields, either in code
//! through [`AdaptiveConfigOverride`] or from a TOML table of snake_case keys.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializes to the same snake_case table [`AdaptiveConfig::from_toml_str`] reads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AdaptiveConfig {
    /// Lower clamp for game speed.
    pub min_speed: f64,
    /// Upper clamp for game speed.
    pub max_speed: f64,
    /// Correct answers using less than this share of the allowed time speed the game up.
    pub speed_up_threshold: f64,
    /// Correct answers using more than this share of the allowed time slow it down.
    pub slow_down_threshold: f64,
    pub speed_increment: f64,
    pub speed_decrement: f64,
    /// Multiplier applied to game speed on a wrong answer.
    pub error_penalty: f64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.4,
            max_speed: 2.2,
            speed_up_threshold: 0.25,
            slow_down_threshold: 0.7,
            speed_increment: 0.06,
            speed_decrement: 0.06,
            error_penalty: 0.92,
        }
    }
}

/// Partial override; `None` keeps the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdaptiveConfigOverride {
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub speed_up_threshold: Option<f64>,
    pub slow_down_threshold: Option<f64>,
    pub speed_increment: Option<f64>,
    pub speed_decrement: Option<f64>,
    pub error_penalty: Option<f64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("min_speed {min} exceeds max_speed {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("{name} must lie in [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
    #[error("speed_up_threshold {up} exceeds slow_down_threshold {down}")]
    CrossedThresholds { up: f64, down: f64 },
    #[error("{name} must be a non-negative finite number, got {value}")]
    NegativeStep { name: &'static str, value: f64 },
    #[error("error_penalty must lie in (0, 1], got {0}")]
    PenaltyOutOfRange(f64),
}

impl AdaptiveConfig {
    /// Defaults with every `Some` field of `ov` applied.
    pub fn with_overrides(ov: AdaptiveConfigOverride) -> Self {
        let d = Self::default();
        Self {
            min_speed: ov.min_speed.unwrap_or(d.min_speed),
            max_speed: ov.max_speed.unwrap_or(d.max_speed),
            speed_up_threshold: ov.speed_up_threshold.unwrap_or(d.speed_up_threshold),
            slow_down_threshold: ov.slow_down_threshold.unwrap_or(d.slow_down_threshold),
            speed_increment: ov.speed_increment.unwrap_or(d.speed_increment),
            speed_decrement: ov.speed_decrement.unwrap_or(d.speed_decrement),
            error_penalty: ov.error_penalty.unwrap_or(d.error_penalty),
        }
    }

    /// Parse a (partial) TOML table and validate the result.
    ///
    /// ```toml
    /// max_speed = 2.5
    /// error_penalty = 0.9
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let ov: AdaptiveConfigOverride = toml::from_str(src)?;
        let cfg = Self::with_overrides(ov);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Full table of the current values, readable by [`Self::from_toml_str`].
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("min_speed", self.min_speed), ("max_speed", self.max_speed)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::InvertedBounds { min: self.min_speed, max: self.max_speed });
        }
        for (name, value) in [
            ("speed_up_threshold", self.speed_up_threshold),
            ("slow_down_threshold", self.slow_down_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.speed_up_threshold > self.slow_down_threshold {
            return Err(ConfigError::CrossedThresholds {
                up: self.speed_up_threshold,
                down: self.slow_down_threshold,
            });
        }
        for (name, value) in [
            ("speed_increment", self.speed_increment),
            ("speed_decrement", self.speed_decrement),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeStep { name, value });
            }
        }
        if !(self.error_penalty > 0.0 && self.error_penalty <= 1.0) {
            return Err(ConfigError::PenaltyOutOfRange(self.error_penalty));
        }
        Ok(())
    }

    /// Clamp a speed into `[min_speed, max_speed]`.
    /// Tolerates inverted bounds from an unvalidated config instead of panicking.
    #[inline]
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.max(self.min_speed).min(self.max_speed.max(self.min_speed))
    }
}
