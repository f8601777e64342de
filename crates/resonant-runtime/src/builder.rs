//! Engine configuration and builder.
//!
//! [`EngineConfig`] gathers every tunable parameter of a Gaussian engine in
//! one serde-friendly struct so it can live in a config file.
//! [`EngineBuilder`] turns it into a validated engine.
//!
//! # Example
//!
//! ```rust
//! use resonant_runtime::builder::EngineBuilder;
//!
//! let engine = EngineBuilder::new()
//!     .vigilance(0.8)
//!     .sigma_init(vec![0.5, 0.5])
//!     .epochs(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(engine.epochs(), 2);
//! ```

use resonant_core::error::Result;
use resonant_core::gaussian::GaussianArt;
use resonant_core::types::{NoMatchPolicy, DEFAULT_STD_FLOOR};
use serde::{Deserialize, Serialize};

use crate::engine::{ClusteringEngine, GaussianEngine};

/// Configuration for a Gaussian clustering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Vigilance threshold ρ in (0, 1] (default: 0.75).
    pub vigilance: f64,
    /// Initial per-dimension standard deviation of new categories.
    /// Its length fixes the sample dimension. Required.
    pub sigma_init: Vec<f64>,
    /// Lower bound on learned standard deviations (default: 1e-8).
    pub std_floor: f64,
    /// Passes over the data made by `fit` (default: 1).
    pub epochs: usize,
    /// Prediction behaviour for samples that resonate with nothing.
    pub no_match: NoMatchPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vigilance: 0.75,
            sigma_init: Vec::new(),
            std_floor: DEFAULT_STD_FLOOR,
            epochs: 1,
            no_match: NoMatchPolicy::Unassigned,
        }
    }
}

/// Builder for Gaussian clustering engines.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn vigilance(mut self, rho: f64) -> Self {
        self.config.vigilance = rho;
        self
    }

    pub fn sigma_init(mut self, sigma: Vec<f64>) -> Self {
        self.config.sigma_init = sigma;
        self
    }

    /// Use the same initial standard deviation for all `dimension` features.
    pub fn uniform_sigma(mut self, sigma: f64, dimension: usize) -> Self {
        self.config.sigma_init = vec![sigma; dimension];
        self
    }

    pub fn std_floor(mut self, floor: f64) -> Self {
        self.config.std_floor = floor;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.config.epochs = epochs;
        self
    }

    pub fn no_match(mut self, policy: NoMatchPolicy) -> Self {
        self.config.no_match = policy;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<GaussianEngine> {
        let EngineConfig {
            vigilance,
            sigma_init,
            std_floor,
            epochs,
            no_match,
        } = self.config;

        let model = GaussianArt::new(vigilance, sigma_init)?.with_std_floor(std_floor)?;
        Ok(ClusteringEngine::new(model)
            .with_epochs(epochs)?
            .with_no_match(no_match))
    }
}
