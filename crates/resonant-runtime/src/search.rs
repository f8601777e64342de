//! Resonance search — the ART "search with reset".
//!
//! All categories are scored first, against the same pre-update store
//! state. They are then visited in descending activation order (ties go
//! to the lower index). The first category whose match score passes
//! vigilance resonates. A category that fails is reset: it is never
//! revisited for this sample, so the search ends after at most one visit
//! per category.

use resonant_core::model::{ActivationModel, Scored};
use tracing::trace;

use crate::store::CategoryStore;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// The resonating category, or `None` when a new one must be created.
    pub index: Option<usize>,
    /// Categories rejected by the vigilance test.
    pub resets: usize,
    /// Categories that passed vigilance but were rejected by the veto hook.
    pub vetoes: usize,
}

/// Score `sample` against every category in `store`.
///
/// Read-only over the store. Scores come back in category order.
#[cfg(not(feature = "parallel"))]
pub fn score_all<M: ActivationModel>(
    model: &M,
    sample: &[f64],
    store: &CategoryStore<M::Category>,
) -> Vec<Scored<M::Cache>> {
    let total = store.total_count();
    store
        .iter()
        .map(|category| model.score(sample, category, total))
        .collect()
}

/// Score `sample` against every category in `store`, one rayon task per
/// category. Scores come back in category order.
#[cfg(feature = "parallel")]
pub fn score_all<M: ActivationModel>(
    model: &M,
    sample: &[f64],
    store: &CategoryStore<M::Category>,
) -> Vec<Scored<M::Cache>> {
    let total = store.total_count();
    store
        .as_slice()
        .par_iter()
        .map(|category| model.score(sample, category, total))
        .collect()
}

/// Category indices in visiting order: descending activation, then index.
pub fn search_order<C>(scores: &[Scored<C>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .activation
            .total_cmp(&scores[a].activation)
            .then(a.cmp(&b))
    });
    order
}

/// The highest-activation category, ignoring vigilance.
pub fn nearest<C>(scores: &[Scored<C>]) -> Option<usize> {
    search_order(scores).first().copied()
}

/// Run the search over precomputed `scores`.
///
/// `accept` is the veto hook: it sees every category that passed
/// vigilance and may veto it, in which case the search continues as if
/// the category had failed.
pub fn find_resonant<M, F>(
    model: &M,
    store: &CategoryStore<M::Category>,
    scores: &[Scored<M::Cache>],
    mut accept: F,
) -> SearchOutcome
where
    M: ActivationModel,
    F: FnMut(usize, &M::Category) -> bool,
{
    let mut outcome = SearchOutcome::default();

    for index in search_order(scores) {
        let cache = &scores[index].cache;
        if !model.resonates(cache) {
            trace!(
                category = index,
                match_score = model.match_score(cache),
                "vigilance reset"
            );
            outcome.resets += 1;
            continue;
        }
        if !accept(index, &store[index]) {
            trace!(category = index, "match vetoed");
            outcome.vetoes += 1;
            continue;
        }
        outcome.index = Some(index);
        return outcome;
    }

    outcome
}
