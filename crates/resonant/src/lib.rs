//! # Resonant
//!
//! Incremental clustering with Adaptive Resonance Theory (ART).
//!
//! Samples arrive one at a time. Each one is scored against every known
//! category, the categories are tried from the highest activation down,
//! and the first one that passes the vigilance test absorbs the sample.
//! If none does, the sample founds a new category. There is no fixed
//! number of clusters: vigilance alone decides how fine the partition is.
//!
//! ## Quick Start
//!
//! ```rust
//! use resonant::prelude::*;
//!
//! let mut engine = EngineBuilder::new()
//!     .vigilance(0.7)
//!     .sigma_init(vec![1.0])
//!     .build()
//!     .unwrap();
//!
//! let labels = engine.fit(&[[0.0], [0.1], [5.0]]).unwrap();
//! assert_eq!(labels, vec![0, 0, 1]);
//! assert_eq!(engine.category_count(), 2);
//!
//! // Inference never creates categories.
//! assert_eq!(engine.predict_one(&[100.0]).unwrap(), None);
//! ```
//!
//! ## Architecture
//!
//! - [`resonant_core`] - the `ActivationModel` trait, Gaussian ART, errors
//! - [`resonant_runtime`] - category store, resonance search, engine, builder
//!
//! ## Gaussian ART
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | Activation | `ln N(x; μ, σ) + ln(N_c / Σ N)`, a diagonal Normal log-density plus the log prior |
//! | Match | `exp(-½ Σ_d (μ_d − x_d)² / σ_d²)` |
//! | Vigilance | resonance when `match >= ρ` |
//! | Learning | `μ' = μ + (x − μ)/n'`, `σ'² = (1 − 1/n')σ² + (1/n')(μ' − x)²` |
//!
//! Standard deviations are clamped to a small positive floor after every
//! update so a category fed identical samples stays scoreable.

// Re-export all subcrates
pub use resonant_core as core;
pub use resonant_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use resonant::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use resonant_core::types::{Label, NoMatchPolicy, Sample, DEFAULT_STD_FLOOR};
    pub use resonant_core::model::{ActivationModel, CategoryWeight, Scored};
    pub use resonant_core::gaussian::{GaussianArt, GaussianCache, GaussianCategory};

    // Error types
    pub use resonant_core::error::{ConfigError, ResonantError, Result};

    // Runtime
    pub use resonant_runtime::engine::{ClusteringEngine, EngineStats, GaussianEngine};
    pub use resonant_runtime::builder::{EngineBuilder, EngineConfig};
    pub use resonant_runtime::store::CategoryStore;
    pub use resonant_runtime::snapshot::{CategorySnapshot, EngineSnapshot};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
