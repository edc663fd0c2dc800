//! User configuration loaded from `config.toml`.

use crate::calculator::{EvalOptions, NumericMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Calculator settings. Every field has a default, so an empty file is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether non-finite results propagate or fail.
    pub numeric_mode: NumericMode,
    /// Digits after the decimal point in displayed results.
    pub precision: usize,
    /// Text shown when an evaluation fails.
    pub error_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numeric_mode: NumericMode::Ieee,
            precision: 6,
            error_text: "Error".to_string(),
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load the config from an explicit path, or from the default location if it exists.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            mode: self.numeric_mode,
            precision: self.precision,
        }
    }
}
