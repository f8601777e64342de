//! Error types for resonant operations.
//!
//! Every failure is reported before the category store is touched, so an
//! error never leaves a model half-trained on a batch.

use thiserror::Error;

/// Result type for resonant operations.
pub type Result<T> = std::result::Result<T, ResonantError>;

/// Errors that can occur while building or running a clustering engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResonantError {
    /// Invalid parameters. Raised at construction and never recovered.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A sample's length disagrees with the model dimension.
    #[error("Dimension mismatch at sample {index}: expected {expected}, found {found}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A sample holds NaN or an infinity.
    #[error("Sample {index} has a non-finite value at feature {feature}")]
    NonFiniteSample { index: usize, feature: usize },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value outside its allowed interval.
    #[error("{field} out of range: {value} (must be in {range})")]
    OutOfRange {
        field: String,
        value: f64,
        range: String,
    },

    /// Invalid entry in a per-dimension vector.
    #[error("Invalid value for {field}[{index}]: {value} ({reason})")]
    InvalidEntry {
        field: String,
        index: usize,
        value: f64,
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {0}")]
    MissingField(String),
}

// Convenience constructors
impl ResonantError {
    pub fn out_of_range(field: impl Into<String>, value: f64, range: impl Into<String>) -> Self {
        ResonantError::Config(ConfigError::OutOfRange {
            field: field.into(),
            value,
            range: range.into(),
        })
    }

    pub fn invalid_entry(
        field: impl Into<String>,
        index: usize,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        ResonantError::Config(ConfigError::InvalidEntry {
            field: field.into(),
            index,
            value,
            reason: reason.into(),
        })
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        ResonantError::Config(ConfigError::MissingField(field.into()))
    }

    /// Whether this error came from parameter validation.
    pub fn is_config(&self) -> bool {
        matches!(self, ResonantError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = ResonantError::out_of_range("vigilance", 1.5, "(0, 1]");
        assert_eq!(
            err.to_string(),
            "Config error: vigilance out of range: 1.5 (must be in (0, 1])"
        );
        assert!(err.is_config());
    }

    #[test]
    fn dimension_mismatch_is_not_config() {
        let err = ResonantError::DimensionMismatch { index: 0, expected: 2, found: 3 };
        assert!(!err.is_config());
        assert!(err.to_string().contains("expected 2, found 3"));
    }
}
