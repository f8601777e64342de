//! # Resonant Core
//!
//! Core traits and types for incremental Adaptive Resonance Theory (ART)
//! clustering.
//!
//! An ART network keeps a growing list of categories. Every incoming sample
//! is scored against each category, the categories are tried in order of
//! activation, and the first one whose match score clears the vigilance
//! threshold absorbs the sample. When nothing resonates a new category is
//! created from the sample.
//!
//! This crate defines the pieces every ART variant shares:
//!
//! - [`model::ActivationModel`] — the capability interface a statistical
//!   model implements (score, match, create, update)
//! - [`model::CategoryWeight`] — what the engine needs to know about a category
//! - [`gaussian::GaussianArt`] — the Gaussian class-conditional density variant
//! - [`error::ResonantError`] — structured errors for configuration and data
//!
//! ## Quick Start
//!
//! ```rust
//! use resonant_core::prelude::*;
//!
//! let model = GaussianArt::new(0.7, vec![1.0]).unwrap();
//! let category = model.create(&[0.0]);
//!
//! let scored = model.score(&[0.1], &category, category.count());
//! assert!(model.match_score(&scored.cache) >= model.vigilance());
//! ```

pub mod types;
pub mod model;
pub mod gaussian;
pub mod error;
pub mod prelude;
