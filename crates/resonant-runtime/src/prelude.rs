//! Resonant Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use resonant_runtime::prelude::*;
//! ```

// Re-export the engine
pub use crate::engine::{ClusteringEngine, EngineStats, GaussianEngine};

// Re-export configuration and builder
pub use crate::builder::{EngineBuilder, EngineConfig};

// Re-export store and search
pub use crate::store::CategoryStore;
pub use crate::search::SearchOutcome;

// Re-export snapshots
pub use crate::snapshot::{CategorySnapshot, EngineSnapshot};

// Re-export from core
pub use resonant_core::prelude::*;
