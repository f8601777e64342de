//! Numeric data files.
//!
//! One sample per line, features separated by commas or whitespace.
//! Blank lines and `#` comments are skipped. A non-numeric first row is
//! treated as a header.

use anyhow::{bail, Context, Result};
use resonant::prelude::Sample;
use std::path::Path;

pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data: {}", path.display()))?;
    parse_samples(&content).with_context(|| format!("Invalid data in {}", path.display()))
}

pub fn parse_samples(content: &str) -> Result<Vec<Sample>> {
    let mut samples: Vec<Sample> = Vec::new();
    let mut seen_row = false;

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        let parsed: std::result::Result<Sample, _> =
            fields.iter().map(|f| f.parse::<f64>()).collect();

        let row = match parsed {
            Ok(row) => row,
            Err(_) if !seen_row => {
                tracing::debug!(line = line_no + 1, "skipping header row");
                seen_row = true;
                continue;
            }
            Err(e) => bail!("line {}: {}", line_no + 1, e),
        };
        seen_row = true;

        if let Some(first) = samples.first() {
            if row.len() != first.len() {
                bail!(
                    "line {}: expected {} features, found {}",
                    line_no + 1,
                    first.len(),
                    row.len()
                );
            }
        }
        samples.push(row);
    }

    if samples.is_empty() {
        bail!("no samples found");
    }
    Ok(samples)
}
