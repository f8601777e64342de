//! Clustering engine — sample-by-sample ART learning.
//!
//! Every sample passes through the same four phases:
//! 1. Scoring: activation and match cache for every current category
//! 2. Searching: descending-activation search with vigilance reset
//! 3. Updating: blend into the resonating category, or create a new one
//! 4. Done: the chosen index is recorded as the sample's label
//!
//! Scoring and searching never mutate anything, so a sample is committed
//! by exactly one write to the store. Batches are validated in full before
//! the first sample is processed; a rejected call leaves the engine as it
//! was.
//!
//! Prediction runs phases 1 and 2 only and never learns.

use resonant_core::error::{ResonantError, Result};
use resonant_core::gaussian::GaussianArt;
use resonant_core::model::{ActivationModel, Scored};
use resonant_core::types::{validate_batch, validate_sample, Label, NoMatchPolicy};
use serde::Serialize;
use tracing::{debug, info};

use crate::search::{self, SearchOutcome};
use crate::store::CategoryStore;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Veto hook that accepts every category.
fn accept_all<C>(_sample: usize, _category: usize, _weight: &C) -> bool {
    true
}

/// An engine running the Gaussian ART model.
pub type GaussianEngine = ClusteringEngine<GaussianArt>;

/// Running counters over everything the engine has learned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    /// Samples processed by training calls (counted once per epoch).
    pub samples_seen: u64,
    /// Samples that created a new category.
    pub categories_created: u64,
    /// Samples that resonated with an existing category.
    pub resonances: u64,
    /// Vigilance failures across all searches.
    pub resets: u64,
    /// Resonances rejected by a veto hook.
    pub vetoes: u64,
    /// Completed training epochs.
    pub epochs: u64,
}

/// The ART learner: owns the categories and the last training labels.
#[derive(Debug, Clone)]
pub struct ClusteringEngine<M: ActivationModel> {
    model: M,
    store: CategoryStore<M::Category>,
    labels: Vec<Label>,
    epochs: usize,
    no_match: NoMatchPolicy,
    stats: EngineStats,
}

impl<M: ActivationModel> ClusteringEngine<M> {
    /// Create an engine that trains for one epoch and reports unmatched
    /// predictions as unassigned.
    pub fn new(model: M) -> Self {
        Self {
            model,
            store: CategoryStore::new(),
            labels: Vec::new(),
            epochs: 1,
            no_match: NoMatchPolicy::default(),
            stats: EngineStats::default(),
        }
    }

    /// Set the number of passes `fit` makes over its data.
    pub fn with_epochs(mut self, epochs: usize) -> Result<Self> {
        if epochs == 0 {
            return Err(ResonantError::out_of_range("epochs", 0.0, "[1, inf)"));
        }
        self.epochs = epochs;
        Ok(self)
    }

    /// Set what `predict` reports for samples that resonate with nothing.
    pub fn with_no_match(mut self, policy: NoMatchPolicy) -> Self {
        self.no_match = policy;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn category_count(&self) -> usize {
        self.store.len()
    }

    /// Read-only access to one category.
    pub fn get_category(&self, index: usize) -> Option<&M::Category> {
        self.store.get(index)
    }

    pub fn categories(&self) -> &[M::Category] {
        self.store.as_slice()
    }

    /// Labels produced by the most recent training call(s).
    ///
    /// `fit` replaces them; `partial_fit` and `learn` append.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Sum of all category counts (the prior denominator).
    pub fn total_count(&self) -> f64 {
        self.store.total_count()
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn no_match_policy(&self) -> NoMatchPolicy {
        self.no_match
    }

    /// Forget every category, label and counter.
    pub fn reset(&mut self) {
        self.store.clear();
        self.labels.clear();
        self.stats = EngineStats::default();
    }

    /// Train from scratch and return one label per sample.
    ///
    /// Existing categories are discarded. With more than one epoch the
    /// categories carry over between passes and the returned labels come
    /// from the final pass.
    pub fn fit<S: AsRef<[f64]>>(&mut self, samples: &[S]) -> Result<Vec<Label>> {
        self.fit_with_reset(samples, accept_all)
    }

    /// Like [`fit`](Self::fit), with a veto hook.
    ///
    /// `accept(sample_index, category_index, category)` is called for every
    /// category that passes vigilance. Returning `false` rejects it and the
    /// search moves on to the next candidate.
    pub fn fit_with_reset<S, F>(&mut self, samples: &[S], mut accept: F) -> Result<Vec<Label>>
    where
        S: AsRef<[f64]>,
        F: FnMut(usize, usize, &M::Category) -> bool,
    {
        validate_batch(samples, self.model.dimension())?;
        self.reset();

        let mut labels = Vec::new();
        for epoch in 0..self.epochs {
            labels = self.run_epoch(samples, &mut accept);
            debug!(
                epoch,
                categories = self.store.len(),
                "epoch complete"
            );
        }

        info!(
            model = self.model.name(),
            samples = samples.len(),
            epochs = self.epochs,
            categories = self.store.len(),
            "fit complete"
        );

        self.labels = labels.clone();
        Ok(labels)
    }

    /// Continue training on the existing categories with one pass.
    pub fn partial_fit<S: AsRef<[f64]>>(&mut self, samples: &[S]) -> Result<Vec<Label>> {
        validate_batch(samples, self.model.dimension())?;
        let labels = self.run_epoch(samples, &mut accept_all);
        debug!(
            samples = samples.len(),
            categories = self.store.len(),
            "partial fit complete"
        );
        self.labels.extend_from_slice(&labels);
        Ok(labels)
    }

    /// Train on a single sample.
    pub fn learn(&mut self, sample: &[f64]) -> Result<Label> {
        validate_sample(sample, self.model.dimension(), 0)?;
        self.stats.samples_seen += 1;
        let label = self.step(sample, 0, &mut accept_all);
        self.labels.push(label);
        Ok(label)
    }

    /// Assign each sample to a resonating category without learning.
    ///
    /// Samples that resonate with nothing follow the engine's
    /// [`NoMatchPolicy`].
    pub fn predict<S>(&self, samples: &[S]) -> Result<Vec<Option<Label>>>
    where
        S: AsRef<[f64]> + Sync,
    {
        validate_batch(samples, self.model.dimension())?;

        #[cfg(feature = "parallel")]
        let labels = samples.par_iter().map(|s| self.classify(s.as_ref())).collect();

        #[cfg(not(feature = "parallel"))]
        let labels = samples.iter().map(|s| self.classify(s.as_ref())).collect();

        Ok(labels)
    }

    /// Predict a single sample.
    pub fn predict_one(&self, sample: &[f64]) -> Result<Option<Label>> {
        validate_sample(sample, self.model.dimension(), 0)?;
        Ok(self.classify(sample))
    }

    /// Score a sample against every category without searching.
    pub fn score(&self, sample: &[f64]) -> Result<Vec<Scored<M::Cache>>> {
        validate_sample(sample, self.model.dimension(), 0)?;
        Ok(search::score_all(&self.model, sample, &self.store))
    }

    fn run_epoch<S, F>(&mut self, samples: &[S], accept: &mut F) -> Vec<Label>
    where
        S: AsRef<[f64]>,
        F: FnMut(usize, usize, &M::Category) -> bool,
    {
        let labels = samples
            .iter()
            .enumerate()
            .map(|(i, sample)| self.step(sample.as_ref(), i, accept))
            .collect();
        self.stats.samples_seen += samples.len() as u64;
        self.stats.epochs += 1;
        labels
    }

    fn step<F>(&mut self, sample: &[f64], sample_index: usize, accept: &mut F) -> Label
    where
        F: FnMut(usize, usize, &M::Category) -> bool,
    {
        let scores = search::score_all(&self.model, sample, &self.store);
        let outcome: SearchOutcome =
            search::find_resonant(&self.model, &self.store, &scores, |index, category| {
                accept(sample_index, index, category)
            });

        self.stats.resets += outcome.resets as u64;
        self.stats.vetoes += outcome.vetoes as u64;

        match outcome.index {
            Some(index) => {
                let updated = self.model.update(sample, &self.store[index], &scores[index].cache);
                self.store.replace(index, updated);
                self.stats.resonances += 1;
                index
            }
            None => {
                let index = self.store.push(self.model.create(sample));
                self.stats.categories_created += 1;
                debug!(category = index, sample = sample_index, "category created");
                index
            }
        }
    }

    fn classify(&self, sample: &[f64]) -> Option<Label> {
        let scores = search::score_all(&self.model, sample, &self.store);
        let outcome = search::find_resonant(&self.model, &self.store, &scores, |_, _| true);
        match (outcome.index, self.no_match) {
            (Some(index), _) => Some(index),
            (None, NoMatchPolicy::Unassigned) => None,
            (None, NoMatchPolicy::Nearest) => search::nearest(&scores),
        }
    }
}
