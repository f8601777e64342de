//! The activation model — the statistical heart of an ART variant.
//!
//! Every ART flavour runs the same search: score all categories, try them
//! in order of activation, accept the first one that passes vigilance,
//! otherwise create a new one. What differs between flavours is how a
//! category is represented and how scoring, matching and learning work.
//! [`ActivationModel`] captures exactly that difference; the runtime's
//! engine is generic over it.

use std::fmt::Debug;

/// What the engine needs to know about any category record.
pub trait CategoryWeight {
    /// Number of samples the category has absorbed (its prior mass).
    fn count(&self) -> f64;
}

/// The result of scoring one sample against one category.
///
/// `cache` carries whatever intermediate value the model wants to reuse
/// in the match test and the update, so nothing is computed twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<C> {
    /// Ranking score. Higher activations are tried first.
    ///
    /// Only the order matters, so models are free to report a monotone
    /// transform of their activation. The Gaussian model reports its
    /// logarithm.
    pub activation: f64,
    /// Model-specific intermediate result.
    pub cache: C,
}

/// A pluggable ART statistical model.
///
/// Implementations must be pure: scoring never mutates anything, and
/// `create`/`update` return new records that the store writes back.
pub trait ActivationModel: Send + Sync {
    /// The per-category record this model learns.
    type Category: CategoryWeight + Clone + Debug + Send + Sync;

    /// Intermediate value threaded from scoring into match and update.
    type Cache: Clone + Debug + Send + Sync;

    /// Short model name (for display and logging).
    fn name(&self) -> &'static str;

    /// Feature dimension the model was configured for.
    fn dimension(&self) -> usize;

    /// The vigilance threshold ρ.
    fn vigilance(&self) -> f64;

    /// Score `sample` against `category`.
    ///
    /// `total_count` is the sum of all category counts in the current,
    /// pre-update store state.
    fn score(
        &self,
        sample: &[f64],
        category: &Self::Category,
        total_count: f64,
    ) -> Scored<Self::Cache>;

    /// The value compared against vigilance, read from the scoring cache.
    fn match_score(&self, cache: &Self::Cache) -> f64;

    /// Vigilance test. Resonance holds when `match >= ρ`.
    fn resonates(&self, cache: &Self::Cache) -> bool {
        self.match_score(cache) >= self.vigilance()
    }

    /// Seed a new category from a sample.
    fn create(&self, sample: &[f64]) -> Self::Category;

    /// Blend a sample into a resonating category.
    fn update(
        &self,
        sample: &[f64],
        category: &Self::Category,
        cache: &Self::Cache,
    ) -> Self::Category;
}
