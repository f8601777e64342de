//! Gaussian ART — categories as axis-aligned Normal densities.
//!
//! Each category is a diagonal Gaussian (mean, per-dimension standard
//! deviation) together with the number of samples it has absorbed.
//!
//! - **Activation** is the class-conditional density times the category
//!   prior, `p(x|c) · N_c / Σ N`, reported as its natural logarithm. The
//!   density of a tight high-dimensional category overflows an `f64`; its
//!   logarithm does not, and the ranking is the same.
//! - **Match** is the bare exponential term of the density,
//!   `exp(-½ Σ_d (μ_d − x_d)² / σ_d²)`, with no prior and no normalisation.
//!   A category can therefore win the ranking on prior mass alone and still
//!   fail vigilance, which is the behaviour this variant is defined by.
//! - **Learning** is an online recurrence on count, mean and spread.
//!
//! Reference: Williamson (1996), Gaussian ARTMAP.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{ResonantError, Result};
use crate::model::{ActivationModel, CategoryWeight, Scored};
use crate::types::DEFAULT_STD_FLOOR;

/// A Gaussian category: mean, standard deviation and sample count.
///
/// Deserialization goes through [`GaussianCategory::from_parts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryParts")]
pub struct GaussianCategory {
    mean: Vec<f64>,
    std: Vec<f64>,
    count: f64,
}

impl GaussianCategory {
    /// Rebuild a category from its parts, e.g. for seeding or inspection.
    ///
    /// `mean` and `std` must have the same length, every `mean` entry must
    /// be finite, every `std` entry must be finite and positive, and `count`
    /// must be finite and at least one.
    pub fn from_parts(mean: Vec<f64>, std: Vec<f64>, count: f64) -> Result<Self> {
        if mean.len() != std.len() {
            return Err(ResonantError::DimensionMismatch {
                index: 0,
                expected: mean.len(),
                found: std.len(),
            });
        }
        if let Some(i) = mean.iter().position(|m| !m.is_finite()) {
            return Err(ResonantError::invalid_entry("mean", i, mean[i], "must be finite"));
        }
        if let Some(i) = std.iter().position(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ResonantError::invalid_entry("std", i, std[i], "must be finite and positive"));
        }
        if !(count >= 1.0 && count.is_finite()) {
            return Err(ResonantError::out_of_range("count", count, "[1, inf)"));
        }
        Ok(Self { mean, std, count })
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Per-dimension standard deviation. Every entry is strictly positive.
    pub fn std(&self) -> &[f64] {
        &self.std
    }

    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    /// Axis-aligned box `mean ± k·std` per dimension, as `(low, high)` pairs.
    ///
    /// Used by collaborators that draw cluster extents.
    pub fn bounds(&self, k: f64) -> Vec<(f64, f64)> {
        self.mean
            .iter()
            .zip(&self.std)
            .map(|(m, s)| (m - k * s, m + k * s))
            .collect()
    }
}

/// Serialized form of a [`GaussianCategory`], validated on the way in.
#[derive(Deserialize)]
struct CategoryParts {
    mean: Vec<f64>,
    std: Vec<f64>,
    count: f64,
}

impl TryFrom<CategoryParts> for GaussianCategory {
    type Error = ResonantError;

    fn try_from(parts: CategoryParts) -> Result<Self> {
        Self::from_parts(parts.mean, parts.std, parts.count)
    }
}

impl CategoryWeight for GaussianCategory {
    fn count(&self) -> f64 {
        self.count
    }
}

/// Scoring intermediates for one (sample, category) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianCache {
    /// `-½ · Σ_d ((μ_d − x_d) / σ_d)²`
    pub exponent: f64,
    /// `exp(exponent)`, the match score.
    pub kernel: f64,
}

/// The Gaussian ART model. Holds the immutable parameter set.
///
/// Deserialization applies the same checks as [`GaussianArt::new`] and
/// [`GaussianArt::with_std_floor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelParams")]
pub struct GaussianArt {
    vigilance: f64,
    sigma_init: Vec<f64>,
    std_floor: f64,
}

impl GaussianArt {
    /// Create a model with vigilance `rho` and initial spread `sigma_init`.
    ///
    /// `rho` must lie in `(0, 1]`; every `sigma_init` entry must be finite
    /// and positive. The length of `sigma_init` fixes the sample dimension.
    pub fn new(rho: f64, sigma_init: Vec<f64>) -> Result<Self> {
        if !(rho > 0.0 && rho <= 1.0) {
            return Err(ResonantError::out_of_range("vigilance", rho, "(0, 1]"));
        }
        if sigma_init.is_empty() {
            return Err(ResonantError::missing_field("sigma_init"));
        }
        for (i, &s) in sigma_init.iter().enumerate() {
            if !s.is_finite() || s <= 0.0 {
                return Err(ResonantError::invalid_entry(
                    "sigma_init",
                    i,
                    s,
                    "must be finite and positive",
                ));
            }
        }
        Ok(Self {
            vigilance: rho,
            sigma_init,
            std_floor: DEFAULT_STD_FLOOR,
        })
    }

    /// Replace the lower bound applied to standard deviations after updates.
    pub fn with_std_floor(mut self, floor: f64) -> Result<Self> {
        if !floor.is_finite() || floor <= 0.0 {
            return Err(ResonantError::out_of_range("std_floor", floor, "(0, inf)"));
        }
        self.std_floor = floor;
        Ok(self)
    }

    pub fn sigma_init(&self) -> &[f64] {
        &self.sigma_init
    }

    pub fn std_floor(&self) -> f64 {
        self.std_floor
    }
}

#[derive(Deserialize)]
struct ModelParams {
    vigilance: f64,
    sigma_init: Vec<f64>,
    #[serde(default = "default_std_floor")]
    std_floor: f64,
}

fn default_std_floor() -> f64 {
    DEFAULT_STD_FLOOR
}

impl TryFrom<ModelParams> for GaussianArt {
    type Error = ResonantError;

    fn try_from(params: ModelParams) -> Result<Self> {
        GaussianArt::new(params.vigilance, params.sigma_init)?.with_std_floor(params.std_floor)
    }
}

impl ActivationModel for GaussianArt {
    type Category = GaussianCategory;
    type Cache = GaussianCache;

    fn name(&self) -> &'static str {
        "gaussian"
    }

    fn dimension(&self) -> usize {
        self.sigma_init.len()
    }

    fn vigilance(&self) -> f64 {
        self.vigilance
    }

    fn score(&self, sample: &[f64], category: &GaussianCategory, total_count: f64) -> Scored<GaussianCache> {
        let mut mahalanobis = 0.0;
        let mut log_std_sum = 0.0;
        for ((m, x), s) in category.mean.iter().zip(sample).zip(&category.std) {
            let z = (m - x) / s;
            mahalanobis += z * z;
            log_std_sum += s.ln();
        }

        let exponent = -0.5 * mahalanobis;
        let kernel = exponent.exp();

        // ln sqrt((2π)^D · Π σ_d²)
        let log_norm = 0.5 * category.dimension() as f64 * TAU.ln() + log_std_sum;

        let log_prior = if total_count > 0.0 {
            (category.count / total_count).ln()
        } else {
            f64::NEG_INFINITY
        };

        Scored {
            activation: exponent - log_norm + log_prior,
            cache: GaussianCache { exponent, kernel },
        }
    }

    fn match_score(&self, cache: &GaussianCache) -> f64 {
        cache.kernel
    }

    fn create(&self, sample: &[f64]) -> GaussianCategory {
        GaussianCategory {
            mean: sample.to_vec(),
            std: self.sigma_init.clone(),
            count: 1.0,
        }
    }

    fn update(&self, sample: &[f64], category: &GaussianCategory, _cache: &GaussianCache) -> GaussianCategory {
        let n = category.count + 1.0;
        let w = 1.0 / n;

        let mean: Vec<f64> = category
            .mean
            .iter()
            .zip(sample)
            .map(|(m, x)| m + (x - m) / n)
            .collect();

        // Spread uses the updated mean, not the previous one.
        let std = category
            .std
            .iter()
            .zip(&mean)
            .zip(sample)
            .map(|((s, m), x)| {
                let d = m - x;
                ((1.0 - w) * s * s + w * d * d).sqrt().max(self.std_floor)
            })
            .collect();

        GaussianCategory { mean, std, count: n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(rho: f64) -> GaussianArt {
        GaussianArt::new(rho, vec![1.0]).unwrap()
    }

    #[test]
    fn rejects_vigilance_outside_unit_interval() {
        assert!(GaussianArt::new(0.0, vec![1.0]).is_err());
        assert!(GaussianArt::new(1.01, vec![1.0]).is_err());
        assert!(GaussianArt::new(f64::NAN, vec![1.0]).is_err());
        assert!(GaussianArt::new(1.0, vec![1.0]).is_ok());
    }

    #[test]
    fn rejects_non_positive_sigma() {
        let err = GaussianArt::new(0.5, vec![1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            ResonantError::Config(crate::error::ConfigError::InvalidEntry { index: 1, .. })
        ));
        assert!(GaussianArt::new(0.5, vec![-1.0]).is_err());
        assert!(GaussianArt::new(0.5, vec![f64::INFINITY]).is_err());
        assert!(GaussianArt::new(0.5, vec![]).is_err());
    }

    #[test]
    fn rejects_bad_floor() {
        assert!(model(0.5).with_std_floor(0.0).is_err());
        assert_eq!(model(0.5).with_std_floor(1e-3).unwrap().std_floor(), 1e-3);
    }

    #[test]
    fn create_seeds_from_sample_and_sigma() {
        let m = GaussianArt::new(0.5, vec![0.5, 2.0]).unwrap();
        let c = m.create(&[3.0, -1.0]);
        assert_eq!(c.mean(), &[3.0, -1.0]);
        assert_eq!(c.std(), &[0.5, 2.0]);
        assert_eq!(c.count(), 1.0);
    }

    #[test]
    fn kernel_is_exponential_term_only() {
        let m = model(0.5);
        let c = m.create(&[0.0]);
        let scored = m.score(&[1.0], &c, 1.0);
        assert_eq!(m.match_score(&scored.cache), (-0.5f64).exp());

        // Activation includes normalisation: ln(exp(-½) / sqrt(2π)).
        let expected = -0.5 - 0.5 * TAU.ln();
        assert!((scored.activation - expected).abs() < 1e-12);
    }

    #[test]
    fn prior_scales_activation_but_not_match() {
        let m = model(0.5);
        let c = m.create(&[0.0]);
        let alone = m.score(&[0.3], &c, 1.0);
        let shared = m.score(&[0.3], &c, 4.0);
        assert_eq!(alone.cache, shared.cache);
        assert!((shared.activation + 4f64.ln() - alone.activation).abs() < 1e-12);
    }

    #[test]
    fn rescoring_is_bit_identical() {
        let m = GaussianArt::new(0.5, vec![0.7, 1.3]).unwrap();
        let c = m.create(&[0.25, -4.0]);
        let a = m.score(&[1.5, -3.0], &c, 3.0);
        let b = m.score(&[1.5, -3.0], &c, 3.0);
        assert_eq!(a.activation.to_bits(), b.activation.to_bits());
        assert_eq!(a.cache.kernel.to_bits(), b.cache.kernel.to_bits());
    }

    #[test]
    fn update_uses_new_mean_for_spread() {
        let m = model(0.5);
        let c = m.create(&[0.0]);
        let cache = m.score(&[0.1], &c, 1.0).cache;
        let u = m.update(&[0.1], &c, &cache);

        assert_eq!(u.count(), 2.0);
        assert!((u.mean()[0] - 0.05).abs() < 1e-15);
        // sqrt(½·1 + ½·(0.05 − 0.1)²)
        let expected = (0.5f64 + 0.5 * 0.0025).sqrt();
        assert!((u.std()[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn identical_samples_keep_mean_exact() {
        let m = GaussianArt::new(0.5, vec![1.0, 1.0]).unwrap();
        let x = [0.1, 1.7];
        let mut c = m.create(&x);
        for _ in 0..20 {
            let cache = m.score(&x, &c, c.count()).cache;
            c = m.update(&x, &c, &cache);
        }
        assert_eq!(c.mean(), &x);
        assert_eq!(c.count(), 21.0);
    }

    #[test]
    fn spread_is_clamped_to_floor() {
        let m = model(0.5).with_std_floor(0.5).unwrap();
        let mut c = m.create(&[2.0]);
        for _ in 0..10 {
            let cache = m.score(&[2.0], &c, c.count()).cache;
            c = m.update(&[2.0], &c, &cache);
        }
        assert_eq!(c.std()[0], 0.5);

        // Still scoreable: finite activation, full match at the mean.
        let scored = m.score(&[2.0], &c, c.count());
        assert!(scored.activation.is_finite());
        assert_eq!(scored.cache.kernel, 1.0);
    }

    #[test]
    fn high_dimension_activation_stays_finite() {
        // (2π)^400 alone overflows an f64.
        let dim = 400;
        let m = GaussianArt::new(0.5, vec![0.5; dim]).unwrap();
        let c = m.create(&vec![0.0; dim]);
        let scored = m.score(&vec![0.0; dim], &c, 1.0);
        assert!(scored.activation.is_finite());

        // Tight spread: the density itself would be about e^737.
        let tight = GaussianArt::new(0.5, vec![0.01; 200]).unwrap();
        let c = tight.create(&vec![0.0; 200]);
        let scored = tight.score(&vec![0.0; 200], &c, 1.0);
        assert!(scored.activation.is_finite());
        assert!(scored.activation > 700.0);
    }

    #[test]
    fn from_parts_validates() {
        assert!(GaussianCategory::from_parts(vec![0.0], vec![1.0], 3.0).is_ok());
        assert!(GaussianCategory::from_parts(vec![0.0, 1.0], vec![1.0], 1.0).is_err());
        assert!(GaussianCategory::from_parts(vec![0.0], vec![0.0], 1.0).is_err());
        assert!(GaussianCategory::from_parts(vec![0.0], vec![1.0], 0.5).is_err());
        assert!(GaussianCategory::from_parts(vec![f64::NAN], vec![1.0], 1.0).is_err());
        assert!(GaussianCategory::from_parts(vec![f64::INFINITY], vec![1.0], 1.0).is_err());
        assert!(GaussianCategory::from_parts(vec![0.0], vec![1.0], f64::INFINITY).is_err());
    }

    #[test]
    fn deserialized_model_is_validated() {
        let model: GaussianArt =
            serde_json::from_str(r#"{ "vigilance": 0.5, "sigma_init": [1.0, 2.0] }"#).unwrap();
        assert_eq!(model.dimension(), 2);
        assert_eq!(model.std_floor(), DEFAULT_STD_FLOOR);

        let zero_sigma = r#"{ "vigilance": 0.5, "sigma_init": [0.0], "std_floor": 0.0 }"#;
        assert!(serde_json::from_str::<GaussianArt>(zero_sigma).is_err());

        let wild = r#"{ "vigilance": 7.0, "sigma_init": [-1.0], "std_floor": -3.0 }"#;
        let err = serde_json::from_str::<GaussianArt>(wild).unwrap_err();
        assert!(err.to_string().contains("vigilance"));

        let zero_floor = r#"{ "vigilance": 0.5, "sigma_init": [1.0], "std_floor": 0.0 }"#;
        assert!(serde_json::from_str::<GaussianArt>(zero_floor).is_err());
    }

    #[test]
    fn serialized_model_reads_back() {
        let model = GaussianArt::new(0.8, vec![0.5, 0.25]).unwrap().with_std_floor(1e-4).unwrap();
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(serde_json::from_str::<GaussianArt>(&json).unwrap(), model);
    }

    #[test]
    fn deserialized_category_is_validated() {
        let category: GaussianCategory =
            serde_json::from_str(r#"{ "mean": [1.0], "std": [0.5], "count": 3.0 }"#).unwrap();
        assert_eq!(category.count(), 3.0);

        let zero_std = r#"{ "mean": [1.0], "std": [0.0], "count": 3.0 }"#;
        assert!(serde_json::from_str::<GaussianCategory>(zero_std).is_err());

        let ragged = r#"{ "mean": [1.0, 2.0], "std": [0.5], "count": 1.0 }"#;
        assert!(serde_json::from_str::<GaussianCategory>(ragged).is_err());
    }

    #[test]
    fn bounds_span_k_deviations() {
        let m = GaussianArt::new(0.5, vec![0.5]).unwrap();
        let c = m.create(&[1.0]);
        assert_eq!(c.bounds(2.0), vec![(0.0, 2.0)]);
    }
}
