//! Configuration management for the resonant CLI.

use anyhow::{bail, Context, Result};
use resonant::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "resonant.toml";

/// Project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub predict: PredictConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_vigilance")]
    pub vigilance: f64,
    /// Uniform initial standard deviation, used when `sigma_init` is unset.
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Explicit per-feature initial standard deviations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma_init: Option<Vec<f64>>,
    #[serde(default = "default_std_floor")]
    pub std_floor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    #[serde(default = "default_epochs")]
    pub epochs: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictConfig {
    #[serde(default)]
    pub no_match: NoMatchPolicy,
}

// Default value functions
fn default_vigilance() -> f64 { 0.75 }
fn default_sigma() -> f64 { 0.5 }
fn default_std_floor() -> f64 { DEFAULT_STD_FLOOR }
fn default_epochs() -> usize { 1 }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            vigilance: default_vigilance(),
            sigma: default_sigma(),
            sigma_init: None,
            std_floor: default_std_floor(),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: default_epochs(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub vigilance: Option<f64>,
    pub sigma: Option<f64>,
    pub epochs: Option<usize>,
    pub nearest: bool,
}

impl Config {
    /// Load resonant.toml from the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Engine configuration for data of the given dimension.
    ///
    /// An explicit `sigma_init` wins over the uniform `sigma`, unless the
    /// command line supplies a sigma.
    pub fn engine_config(&self, dimension: usize, overrides: &Overrides) -> Result<EngineConfig> {
        let sigma_init = match (overrides.sigma, &self.model.sigma_init) {
            (Some(sigma), _) => vec![sigma; dimension],
            (None, Some(explicit)) => {
                if explicit.len() != dimension {
                    bail!(
                        "sigma_init has {} entries but the data has {} features",
                        explicit.len(),
                        dimension
                    );
                }
                explicit.clone()
            }
            (None, None) => vec![self.model.sigma; dimension],
        };

        let no_match = if overrides.nearest {
            NoMatchPolicy::Nearest
        } else {
            self.predict.no_match
        };

        Ok(EngineConfig {
            vigilance: overrides.vigilance.unwrap_or(self.model.vigilance),
            sigma_init,
            std_floor: self.model.std_floor,
            epochs: overrides.epochs.unwrap_or(self.training.epochs),
            no_match,
        })
    }
}

/// Find resonant.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
