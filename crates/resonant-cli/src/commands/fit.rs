//! Cluster a data file and report the categories.

use anyhow::Result;
use colored::Colorize;
use resonant::prelude::*;
use serde::Serialize;
use std::path::Path;

use super::{format_vector, train, write_json};
use crate::config::Overrides;

#[derive(Serialize)]
struct FitReport {
    labels: Vec<Label>,
    snapshot: EngineSnapshot,
}

pub fn run(data: &str, overrides: &Overrides, top: usize, output: Option<&str>) -> Result<()> {
    let (engine, labels) = train(Path::new(data), overrides)?;
    let snapshot = engine.snapshot();
    let stats = engine.stats();

    println!();
    println!("{} Clustering complete!", "✓".green().bold());
    println!("  Categories:  {}", snapshot.categories.len().to_string().green());
    println!("  Resonances:  {}", stats.resonances.to_string().cyan());
    println!("  Resets:      {}", stats.resets.to_string().cyan());

    println!();
    println!(
        "  {:>5}  {:>8}  {:<40}  {}",
        "#".bold(),
        "count".bold(),
        "mean".bold(),
        "std".bold()
    );
    for category in snapshot.largest(top) {
        println!(
            "  {:>5}  {:>8}  {:<40}  {}",
            category.index.to_string().yellow(),
            category.count,
            format_vector(&category.mean),
            format_vector(&category.std).dimmed()
        );
    }
    if snapshot.categories.len() > top {
        println!("  ... and {} more", snapshot.categories.len() - top);
    }

    if let Some(path) = output {
        write_json(&FitReport { labels, snapshot }, path)?;
    }

    Ok(())
}
