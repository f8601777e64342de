//! Resonant Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use resonant_core::prelude::*;
//! ```

// Re-export shared types
pub use crate::types::{Label, NoMatchPolicy, Sample, DEFAULT_STD_FLOOR};

// Re-export the model traits
pub use crate::model::{ActivationModel, CategoryWeight, Scored};

// Re-export the Gaussian variant
pub use crate::gaussian::{GaussianArt, GaussianCache, GaussianCategory};

// Re-export error types
pub use crate::error::{ConfigError, ResonantError, Result};
