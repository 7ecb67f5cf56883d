use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::csv::InspectionConfig;
use crate::domain::error::{AppError, Result};

/// Prefix of environment variables overriding configuration values,
/// e.g. `CSV_VARS_SAMPLE_ROWS=500`.
pub const ENV_PREFIX: &str = "CSV_VARS_";

/// Loads `InspectionConfig` from defaults, an optional TOML file and the
/// environment, in increasing priority.
pub struct ConfigService {
    config_file: Option<PathBuf>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self { config_file: None }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<InspectionConfig> {
        let config: InspectionConfig = self.figment()?.extract()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(InspectionConfig::default()));

        if let Some(path) = &self.config_file {
            figment = figment.merge(Toml::file(checked_config_path(path)?));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["delimiter"]));

        if let Some(delimiter) = raw_env_delimiter()? {
            figment = figment.merge(Serialized::default("delimiter", delimiter));
        }

        Ok(figment)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

// Env values are trimmed and parsed as TOML-like values, which loses tab
// and space delimiters and turns digits into numbers. Read it verbatim.
fn raw_env_delimiter() -> Result<Option<String>> {
    let key = format!("{}DELIMITER", ENV_PREFIX);
    match std::env::var_os(&key) {
        None => Ok(None),
        Some(value) => value.into_string().map(Some).map_err(|_| {
            AppError::ConfigError(format!("{} is not valid UTF-8", key))
        }),
    }
}

// Toml::file skips missing files silently; an explicit path must exist.
fn checked_config_path(path: &Path) -> Result<&Path> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(AppError::ConfigError(format!(
            "config file not found: {}",
            path.display()
        )))
    }
}
