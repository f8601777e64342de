//! CLI command implementations.

pub mod init;
pub mod fit;
pub mod predict;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resonant::prelude::*;
use std::path::Path;

use crate::config::{Config, Overrides};
use crate::data::load_samples;

/// Build an engine from config and train it on `path`, one epoch per tick.
pub(crate) fn train(path: &Path, overrides: &Overrides) -> Result<(GaussianEngine, Vec<Label>)> {
    let config = Config::load()?;

    println!("{} Loading {}...", "→".blue(), path.display());
    let samples = load_samples(path)?;
    let dimension = samples[0].len();
    println!(
        "  Loaded: {} samples, {} features",
        samples.len().to_string().cyan(),
        dimension.to_string().cyan()
    );

    let engine_config = config.engine_config(dimension, overrides)?;
    let mut engine = EngineBuilder::from_config(engine_config)
        .build()
        .context("Invalid engine configuration")?;

    println!(
        "{} Clustering with vigilance {} over {} epoch(s)...",
        "→".blue(),
        engine.model().vigilance().to_string().cyan(),
        engine.epochs().to_string().cyan()
    );

    let pb = ProgressBar::new(engine.epochs() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} epochs")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    let mut labels = Vec::new();
    for _ in 0..engine.epochs() {
        labels = engine.partial_fit(&samples)?;
        pb.inc(1);
    }
    pb.finish_with_message("done");

    Ok((engine, labels))
}

pub(crate) fn write_json<T: serde::Serialize>(value: &T, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
    println!("  {} Wrote {}", "✓".green(), path);
    Ok(())
}

/// Compact rendering of a feature vector for tables.
pub(crate) fn format_vector(values: &[f64]) -> String {
    const SHOWN: usize = 4;
    let mut parts: Vec<String> = values.iter().take(SHOWN).map(|v| format!("{:.3}", v)).collect();
    if values.len() > SHOWN {
        parts.push(format!("… +{}", values.len() - SHOWN));
    }
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_vectors_are_shown_in_full() {
        assert_eq!(format_vector(&[0.5, 1.0]), "[0.500, 1.000]");
    }

    #[test]
    fn long_vectors_are_elided() {
        let text = format_vector(&[0.0; 6]);
        assert!(text.ends_with("… +2]"));
    }
}
