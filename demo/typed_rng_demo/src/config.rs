//! Demo configuration management.
//!
//! Handles loading of the demo configuration from TOML files with
//! environment variable override support. Command-line flags are applied on
//! top by the binary.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "typed_rng_demo.toml";

/// Largest accepted number of samples per output line.
pub const MAX_SAMPLES: usize = 1_000;

/// Engine selected for the demo run
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// `rand::rngs::StdRng`
    #[default]
    Std,
    /// `rand::rngs::SmallRng`
    Small,
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "std" => Ok(Self::Std),
            "small" => Ok(Self::Small),
            other => Err(format!("unknown engine '{}'", other)),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// Explicit seed; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Engine to drive the generator with
    #[serde(default)]
    pub engine: EngineKind,

    /// Values printed per output line
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_samples() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            engine: EngineKind::default(),
            samples: default_samples(),
            log_level: default_log_level(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path` if it exists, or return the default
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration for a command-line `--config` value
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and the defaults are used otherwise.
    pub fn from_cli_path(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Unparseable values are ignored and leave the field unchanged.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("TYPED_RNG_SEED") {
            if let Ok(seed) = seed.parse() {
                self.seed = Some(seed);
            }
        }

        if let Ok(engine) = std::env::var("TYPED_RNG_ENGINE") {
            self.engine = engine.parse().unwrap_or(self.engine);
        }

        if let Ok(samples) = std::env::var("TYPED_RNG_SAMPLES") {
            self.samples = samples.parse().unwrap_or(self.samples);
        }

        if let Ok(log_level) = std::env::var("TYPED_RNG_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.samples == 0 {
            errors.push("samples must be greater than 0".to_string());
        }
        if self.samples > MAX_SAMPLES {
            errors.push(format!(
                "samples {} exceeds maximum allowed ({})",
                self.samples, MAX_SAMPLES
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.engine, EngineKind::Std);
        assert_eq!(config.samples, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: DemoConfig = toml::from_str("seed = 42\nengine = \"small\"").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.engine, EngineKind::Small);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_rejects_unknown_engine() {
        let result: Result<DemoConfig, _> = toml::from_str("engine = \"mersenne\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_from_str() {
        assert_eq!("STD".parse::<EngineKind>(), Ok(EngineKind::Std));
        assert_eq!("small".parse::<EngineKind>(), Ok(EngineKind::Small));
        assert!("pcg".parse::<EngineKind>().is_err());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("TYPED_RNG_SEED", "7");
        std::env::set_var("TYPED_RNG_ENGINE", "small");
        std::env::set_var("TYPED_RNG_SAMPLES", "not-a-number");
        let config = DemoConfig::default().with_env_override();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.engine, EngineKind::Small);
        assert_eq!(config.samples, 1);
        std::env::remove_var("TYPED_RNG_SEED");
        std::env::remove_var("TYPED_RNG_ENGINE");
        std::env::remove_var("TYPED_RNG_SAMPLES");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = DemoConfig {
            log_level: "loud".to_string(),
            ..DemoConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("log_level")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_samples_range() {
        let zero = DemoConfig {
            samples: 0,
            ..DemoConfig::default()
        };
        assert!(zero.validate().is_err());

        let too_many = DemoConfig {
            samples: MAX_SAMPLES + 1,
            ..DemoConfig::default()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = DemoConfig {
            samples: 0,
            log_level: "invalid".to_string(),
            ..DemoConfig::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 2);
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        assert_eq!(error.to_string(), "Validation errors: Error 1; Error 2");
    }
}
