//! # Shim Configuration
//!
//! Layered configuration: built-in defaults, then an optional file, then
//! `TERMINATION_SHIM_*` environment variables (nested keys use `__`, e.g.
//! `TERMINATION_SHIM_LOGGING__LEVEL=info`).

use crate::error::{Result, ShimError};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const ENV_PREFIX: &str = "TERMINATION_SHIM";
pub const DEFAULT_CONFIG_FILE: &str = "config/termination-shim";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (`info`, `termination_shim=debug`, ...). Chosen from
    /// the environment when unset.
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub format: LogFormat,

    #[serde(skip)]
    pub environment: String,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> String {
        self.level
            .clone()
            .unwrap_or_else(|| default_level_for(&self.environment).to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShimConfig {
    pub environment: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ShimConfig {
    fn default() -> Self {
        let environment = "development".to_string();
        Self {
            logging: LoggingConfig {
                environment: environment.clone(),
                ..LoggingConfig::default()
            },
            environment,
        }
    }
}

impl ShimConfig {
    /// Load from `config/termination-shim.*` (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Same as [`ShimConfig::load`], resolving the default file under `base_dir`.
    pub fn load_in(base_dir: &Path) -> Result<Self> {
        Self::load_from(&base_dir.join(DEFAULT_CONFIG_FILE), false)
    }

    /// Load from an explicit file. `required` controls whether a missing file
    /// is an error.
    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        Self::load_with_env(path, required, Self::environment_source())
    }

    fn environment_source() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_env(path: &Path, required: bool, env: Environment) -> Result<Self> {
        let path = path
            .to_str()
            .ok_or_else(|| ShimError::configuration(format!("Invalid config path: {path:?}")))?;

        let mut config: Self = Config::builder()
            .set_default("environment", "development")?
            .add_source(File::with_name(path).required(required))
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.logging.environment = config.environment.clone();
        config.validate()?;

        tracing::debug!(
            environment = %config.environment,
            log_level = %config.logging.effective_level(),
            "Configuration loaded"
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.environment.trim().is_empty() {
            return Err(ShimError::configuration("environment must not be empty"));
        }

        let level = self.logging.effective_level();
        EnvFilter::try_new(&level).map_err(|e| {
            ShimError::configuration(format!("Invalid log level '{level}': {e}"))
        })?;

        Ok(())
    }
}

fn default_level_for(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}
