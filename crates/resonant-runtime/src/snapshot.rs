//! Serializable snapshots of a trained Gaussian engine.
//!
//! A snapshot is a read-only copy of what the engine has learned, shaped
//! for collaborators that render or report clusters. It is an output
//! format only; engines are never rebuilt from it.

use resonant_core::gaussian::GaussianArt;
use resonant_core::model::{ActivationModel, CategoryWeight};
use serde::Serialize;

use crate::engine::{EngineStats, GaussianEngine};

/// Width of the reported cluster bounds, in standard deviations.
pub const BOUNDS_SIGMA: f64 = 2.0;

/// One category as seen from outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySnapshot {
    pub index: usize,
    pub count: f64,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
    /// `mean ± 2·std` per dimension, as `(low, high)` pairs.
    pub bounds: Vec<(f64, f64)>,
}

/// A complete serializable view of an engine at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    pub model: String,
    pub vigilance: f64,
    pub dimension: usize,
    pub total_count: f64,
    pub categories: Vec<CategorySnapshot>,
    pub stats: EngineStats,
}

impl EngineSnapshot {
    /// Capture the current state of `engine`.
    pub fn capture(engine: &GaussianEngine) -> Self {
        let model: &GaussianArt = engine.model();
        let categories = engine
            .categories()
            .iter()
            .enumerate()
            .map(|(index, c)| CategorySnapshot {
                index,
                count: c.count(),
                mean: c.mean().to_vec(),
                std: c.std().to_vec(),
                bounds: c.bounds(BOUNDS_SIGMA),
            })
            .collect();

        Self {
            model: model.name().to_string(),
            vigilance: model.vigilance(),
            dimension: model.dimension(),
            total_count: engine.total_count(),
            categories,
            stats: engine.stats().clone(),
        }
    }

    /// Categories sorted by descending count.
    pub fn largest(&self, n: usize) -> Vec<&CategorySnapshot> {
        let mut sorted: Vec<&CategorySnapshot> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.count.total_cmp(&a.count).then(a.index.cmp(&b.index)));
        sorted.truncate(n);
        sorted
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl GaussianEngine {
    /// Shorthand for [`EngineSnapshot::capture`].
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::EngineBuilder;

    fn trained() -> GaussianEngine {
        let mut engine = EngineBuilder::new()
            .vigilance(0.7)
            .sigma_init(vec![1.0])
            .build()
            .unwrap();
        engine.fit(&[[0.0], [0.1], [5.0]]).unwrap();
        engine
    }

    #[test]
    fn snapshot_mirrors_engine() {
        let snap = trained().snapshot();
        assert_eq!(snap.model, "gaussian");
        assert_eq!(snap.dimension, 1);
        assert_eq!(snap.total_count, 3.0);
        assert_eq!(snap.categories.len(), 2);
        assert_eq!(snap.categories[1].mean, vec![5.0]);
        assert_eq!(snap.categories[1].bounds, vec![(3.0, 7.0)]);
        assert_eq!(snap.stats.categories_created, 2);
    }

    #[test]
    fn largest_orders_by_count() {
        let snap = trained().snapshot();
        let top: Vec<usize> = snap.largest(5).iter().map(|c| c.index).collect();
        assert_eq!(top, vec![0, 1]);
        assert_eq!(snap.largest(1).len(), 1);
    }

    #[test]
    fn json_contains_categories() {
        let json = trained().snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["categories"].as_array().unwrap().len(), 2);
        assert_eq!(value["stats"]["resonances"], 1);
    }
}
