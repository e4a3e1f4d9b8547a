//! Configuration for the wellness engine.
//!
//! Defaults reproduce the documented thresholds exactly. A JSON file may
//! override individual fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main configuration, one section per service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub patterns: PatternConfig,
    pub risk: RiskConfig,
    pub progress: ProgressConfig,
}

/// Pattern detection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Samples required before any detection is attempted
    pub min_samples: usize,
    /// Gap in days that closes a weekly bucket
    pub bucket_gap_days: i64,
    /// Weekly averages required to fit a trend
    pub min_buckets: usize,
    /// Slope that must be exceeded to report a pattern
    pub trend_threshold: f64,
    /// Stress level at which a day counts towards trigger inference
    pub high_stress_level: u8,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            min_samples: 7,
            bucket_gap_days: 7,
            min_buckets: 3,
            trend_threshold: 0.5,
            high_stress_level: 7,
        }
    }
}

/// Risk assessment window and thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Most recent samples averaged for the assessment
    pub recent_window: usize,
    /// Pattern intensity that counts as high
    pub high_intensity: u8,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            recent_window: 7,
            high_intensity: 7,
        }
    }
}

/// Progress tracking windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Size of the recent window and of the older window before it
    pub window: usize,
    /// Reported intervention success rate, 0-1
    pub intervention_success: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            window: 14,
            intervention_success: 0.75,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it does
    /// not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wellness-engine")
            .join("config.json")
    }

    /// Reject settings that would make a service degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.patterns.bucket_gap_days <= 0 {
            return Err(ConfigError::Invalid("patterns.bucket_gap_days must be positive"));
        }
        if self.patterns.min_buckets < 2 {
            return Err(ConfigError::Invalid("patterns.min_buckets must be at least 2"));
        }
        if !self.patterns.trend_threshold.is_finite() {
            return Err(ConfigError::Invalid("patterns.trend_threshold must be finite"));
        }
        if self.risk.recent_window == 0 {
            return Err(ConfigError::Invalid("risk.recent_window must be positive"));
        }
        if self.progress.window == 0 {
            return Err(ConfigError::Invalid("progress.window must be positive"));
        }
        if !(0.0..=1.0).contains(&self.progress.intervention_success) {
            return Err(ConfigError::Invalid(
                "progress.intervention_success must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}
