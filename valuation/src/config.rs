use std::{env, path::PathBuf};

use serde::Deserialize;

use crate::error::{Result, ValuationError};

const DEFAULT_MODEL_PATH: &str = "assets/model.json";
const DEFAULT_NEIGHBORHOODS_PATH: &str = "assets/neighborhoods.csv";
const DEFAULT_BACKGROUND_PATH: &str = "assets/background.txt";
const DEFAULT_LOG_PATH: &str = "valuation.log";
const DEFAULT_CURRENCY: &str = "AED";

/// Where the static artifacts live and how results are presented.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub neighborhoods_path: PathBuf,
    pub background_path: PathBuf,
    pub log_path: PathBuf,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.into(),
            neighborhoods_path: DEFAULT_NEIGHBORHOODS_PATH.into(),
            background_path: DEFAULT_BACKGROUND_PATH.into(),
            log_path: DEFAULT_LOG_PATH.into(),
            currency: DEFAULT_CURRENCY.into(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    /// Returns a `ValuationError` if `VALUATION_CONFIG` names a file that
    /// cannot be read or parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `VALUATION_CONFIG` optionally names a JSON file whose keys override the
    /// defaults; the remaining `VALUATION_*` variables override single fields.
    ///
    /// # Args
    /// * `lookup` - Returns the value of a variable, if set.
    ///
    /// # Errors
    /// Returns a `ValuationError` if the config file is unreadable or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("VALUATION_CONFIG") {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(v) = lookup("VALUATION_MODEL") {
            config.model_path = v.into();
        }
        if let Some(v) = lookup("VALUATION_NEIGHBORHOODS") {
            config.neighborhoods_path = v.into();
        }
        if let Some(v) = lookup("VALUATION_BACKGROUND") {
            config.background_path = v.into();
        }
        if let Some(v) = lookup("VALUATION_LOG") {
            config.log_path = v.into();
        }
        if let Some(v) = lookup("VALUATION_CURRENCY") {
            config.currency = v;
        }

        if config.currency.trim().is_empty() {
            return Err(ValuationError::Config("currency must not be empty".into()));
        }

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ValuationError::Io {
            path: path.into(),
            source,
        })?;

        serde_json::from_str(&content)
            .map_err(|e| ValuationError::Config(format!("'{path}': {e}")))
    }
}
