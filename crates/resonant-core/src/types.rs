//! Shared types used across the resonant crates.

use serde::{Deserialize, Serialize};

use crate::error::{ResonantError, Result};

/// A single observation: a fixed-length real vector.
pub type Sample = Vec<f64>;

/// Index of the category a sample was assigned to.
pub type Label = usize;

/// Lower bound applied to every standard deviation after an update.
///
/// The Gaussian activation divides by the product of the standard
/// deviations, so a category fed identical samples must never collapse
/// to zero spread.
pub const DEFAULT_STD_FLOOR: f64 = 1e-8;

/// What prediction reports for a sample that resonates with no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchPolicy {
    /// Report the sample as unassigned (`None`).
    #[default]
    Unassigned,
    /// Fall back to the highest-activation category, ignoring vigilance.
    Nearest,
}

impl NoMatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoMatchPolicy::Unassigned => "unassigned",
            NoMatchPolicy::Nearest => "nearest",
        }
    }
}

/// Check that a sample has the expected dimension and only finite values.
///
/// `index` is the sample's position in its batch and is only used for
/// error reporting.
pub fn validate_sample(sample: &[f64], dimension: usize, index: usize) -> Result<()> {
    if sample.len() != dimension {
        return Err(ResonantError::DimensionMismatch {
            index,
            expected: dimension,
            found: sample.len(),
        });
    }
    if let Some(feature) = sample.iter().position(|v| !v.is_finite()) {
        return Err(ResonantError::NonFiniteSample { index, feature });
    }
    Ok(())
}

/// Validate a whole batch before anything is allowed to mutate.
pub fn validate_batch<S: AsRef<[f64]>>(samples: &[S], dimension: usize) -> Result<()> {
    samples
        .iter()
        .enumerate()
        .try_for_each(|(i, s)| validate_sample(s.as_ref(), dimension, i))
}
