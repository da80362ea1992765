//! Application configuration
//!
//! Split into focused sub-modules:
//! - `netatmo`: snapshot location and public weather areas
//! - `telemetry`: log filter and output format
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `NETATMO_*` environment variables (`__` separates nesting
//! levels, e.g. `NETATMO_TELEMETRY__JSON=true`).

mod netatmo;
mod telemetry;

use std::{fmt, path::Path};

use domain::{DomainError, WeatherArea};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use netatmo::{NetatmoConfig, WeatherAreaConfig};
pub use telemetry::TelemetryAppConfig;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "netatmo-sensors";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "NETATMO";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub telemetry: TelemetryAppConfig,

    #[serde(default)]
    pub netatmo: NetatmoConfig,
}

impl AppConfig {
    /// Load configuration from environment and the default file, if present
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from environment and `path`
    ///
    /// Without a path, `netatmo-sensors.toml` in the working directory is
    /// read when it exists. An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("telemetry.log_filter", telemetry::DEFAULT_LOG_FILTER)?
            .set_default("netatmo.snapshot_dir", netatmo::DEFAULT_SNAPSHOT_DIR)?
            .add_source(file)
            // Override with environment variables (e.g., NETATMO_NETATMO__SNAPSHOT_DIR)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            environment = %config.environment,
            areas = config.netatmo.weather_areas.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validated public weather areas
    ///
    /// # Errors
    ///
    /// Fails on the first area with invalid coordinates, an unknown mode,
    /// a blank name, or a name used twice.
    pub fn weather_areas(&self) -> Result<Vec<WeatherArea>, DomainError> {
        let mut areas: Vec<WeatherArea> = Vec::with_capacity(self.netatmo.weather_areas.len());
        for area in &self.netatmo.weather_areas {
            let area = area.to_weather_area()?;
            if areas.iter().any(|a| a.area_name() == area.area_name()) {
                return Err(DomainError::ValidationError(format!(
                    "duplicate weather area: {}",
                    area.area_name()
                )));
            }
            areas.push(area);
        }
        Ok(areas)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
