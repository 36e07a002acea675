//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `pumpkit.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use pumpkit_app::controller::PumpConfig;
use pumpkit_domain::id::EndpointId;
use pumpkit_domain::mode::{RemoteSensorType, SensorlessFallback};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Actuator settings.
    pub pump: PumpSection,
    /// Mode-selection settings.
    pub mode: ModeSection,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Demo-cycle toggle.
    pub demo: DemoConfig,
}

/// Pump actuator configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PumpSection {
    /// Motor spin-up/spin-down time in milliseconds.
    pub transition_ms: u64,
    /// Arm the auto-stop timer whenever the pump reaches `running`.
    pub auto_stop_enabled: bool,
    /// How long the pump runs before auto-stop fires, in seconds.
    pub auto_stop_secs: u32,
}

/// Mode-selection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ModeSection {
    /// Endpoint carrying the pump.
    pub endpoint: u16,
    /// Simulated remote sensor kind served by the virtual adapter.
    pub sensor: RemoteSensorType,
    /// Control mode applied in normal operation without a sensor.
    pub sensorless: SensorlessFallback,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Demo-cycle configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Run one scripted start/stop cycle after startup.
    pub enabled: bool,
}

impl Config {
    /// Load configuration from `pumpkit.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is semantically invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("pumpkit.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PUMPKIT_TRANSITION_MS") {
            if let Ok(ms) = val.parse() {
                self.pump.transition_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("PUMPKIT_AUTO_STOP_ENABLED") {
            if let Ok(enabled) = val.parse() {
                self.pump.auto_stop_enabled = enabled;
            }
        }
        if let Ok(val) = std::env::var("PUMPKIT_AUTO_STOP_SECS") {
            if let Ok(secs) = val.parse() {
                self.pump.auto_stop_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("PUMPKIT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pump.transition_ms == 0 {
            return Err(ConfigError::Validation(
                "pump.transition_ms must be non-zero".to_string(),
            ));
        }
        if self.pump.auto_stop_enabled && self.pump.auto_stop_secs == 0 {
            return Err(ConfigError::Validation(
                "pump.auto_stop_secs must be non-zero when auto-stop is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the controller configuration from the `[pump]` section.
    #[must_use]
    pub fn pump_config(&self) -> PumpConfig {
        PumpConfig {
            transition_duration: Duration::from_millis(self.pump.transition_ms),
            auto_stop_enabled: self.pump.auto_stop_enabled,
            auto_stop_duration: Duration::from_secs(u64::from(self.pump.auto_stop_secs)),
            ..PumpConfig::default()
        }
    }

    /// The endpoint the pump lives on.
    #[must_use]
    pub fn endpoint(&self) -> EndpointId {
        EndpointId::new(self.mode.endpoint)
    }
}

impl Default for PumpSection {
    fn default() -> Self {
        Self {
            transition_ms: 500,
            auto_stop_enabled: false,
            auto_stop_secs: 0,
        }
    }
}

impl Default for ModeSection {
    fn default() -> Self {
        Self {
            endpoint: 1,
            sensor: RemoteSensorType::None,
            sensorless: SensorlessFallback::Automatic,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "pumpkitd=info,pumpkit=info".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
