//! # Resonant Runtime
//!
//! Category storage, resonance search, and the clustering engine.
//!
//! The engine is the learner: it owns the categories, runs the
//! score → search → update loop one sample at a time, and records the
//! label each sample was assigned to. Training is strictly sequential
//! because every update changes the priors and statistics the next
//! sample is scored against.

pub mod store;
pub mod search;
pub mod engine;
pub mod builder;
pub mod snapshot;
pub mod prelude;
