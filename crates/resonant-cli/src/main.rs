//! Resonant CLI - Command-line interface for ART clustering.

mod commands;
mod config;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "resonant")]
#[command(author, version, about = "Resonant - incremental ART clustering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default resonant.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Cluster a data file
    Fit {
        /// Numeric data file, one sample per line
        data: String,

        /// Vigilance threshold in (0, 1] (overrides config)
        #[arg(short = 'r', long)]
        vigilance: Option<f64>,

        /// Initial standard deviation for every feature (overrides config)
        #[arg(short, long)]
        sigma: Option<f64>,

        /// Passes over the data (overrides config)
        #[arg(short, long)]
        epochs: Option<usize>,

        /// Number of categories to list
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Write labels and a model snapshot as JSON
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Train on one file, then assign samples from another without learning
    Predict {
        /// Training data file
        train: String,

        /// Data file to assign
        data: String,

        /// Vigilance threshold in (0, 1] (overrides config)
        #[arg(short = 'r', long)]
        vigilance: Option<f64>,

        /// Initial standard deviation for every feature (overrides config)
        #[arg(short, long)]
        sigma: Option<f64>,

        /// Assign unmatched samples to the nearest category
        #[arg(long)]
        nearest: bool,

        /// Write predicted labels as JSON
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Fit {
            data,
            vigilance,
            sigma,
            epochs,
            top,
            output,
        } => {
            let overrides = config::Overrides {
                vigilance,
                sigma,
                epochs,
                nearest: false,
            };
            commands::fit::run(&data, &overrides, top, output.as_deref())
        }
        Commands::Predict {
            train,
            data,
            vigilance,
            sigma,
            nearest,
            output,
        } => {
            let overrides = config::Overrides {
                vigilance,
                sigma,
                epochs: None,
                nearest,
            };
            commands::predict::run(&train, &data, &overrides, output.as_deref())
        }
    }
}
