//! Assign new samples to categories learned from a training file.

use anyhow::Result;
use colored::Colorize;
use resonant::prelude::*;
use std::path::Path;

use super::{train, write_json};
use crate::config::Overrides;
use crate::data::load_samples;

pub fn run(train_path: &str, data: &str, overrides: &Overrides, output: Option<&str>) -> Result<()> {
    let (engine, _) = train(Path::new(train_path), overrides)?;

    println!("{} Predicting {}...", "→".blue(), data);
    let samples = load_samples(Path::new(data))?;
    let predicted = engine.predict(&samples)?;

    let mut per_category = vec![0usize; engine.category_count()];
    let mut unassigned = 0usize;
    for label in &predicted {
        match label {
            Some(index) => per_category[*index] += 1,
            None => unassigned += 1,
        }
    }

    println!();
    println!("{} Prediction complete!", "✓".green().bold());
    println!(
        "  Assigned:    {}",
        (predicted.len() - unassigned).to_string().green()
    );
    println!("  Unassigned:  {}", unassigned.to_string().yellow());
    println!("  Policy:      {}", engine.no_match_policy().as_str().cyan());
    for (index, count) in per_category.iter().enumerate().filter(|&(_, &c)| c > 0) {
        println!("    {} {}", format!("#{}", index).yellow(), count);
    }

    if let Some(path) = output {
        write_json(&predicted, path)?;
    }

    Ok(())
}
