//! Write a default resonant.toml.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing resonant project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("Next steps:");
    println!("  {} resonant fit <data.csv>", "1.".blue());
    println!("  {} resonant predict <train.csv> <data.csv>", "2.".blue());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("project");
        run(Some(target.display().to_string())).unwrap();

        let path = target.join(CONFIG_FILE);
        assert!(path.exists());

        std::fs::write(&path, "[model]\nvigilance = 0.9\n").unwrap();
        run(Some(target.display().to_string())).unwrap();
        let kept = Config::load_from(&path).unwrap();
        assert_eq!(kept.model.vigilance, 0.9);
    }
}
