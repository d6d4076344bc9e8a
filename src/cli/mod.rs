//! Command-line interface for toml-assembler
//!
//! With no arguments, merges the default fragments into `./alacritty.toml`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toml_assembler::{merge, save, DEFAULT_INPUTS, DEFAULT_OUTPUT};

/// Assemble an Alacritty config from ordered TOML fragments
#[derive(Parser)]
#[command(name = "toml-assembler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fragments to merge, lowest precedence first
    #[arg(value_name = "INPUTS", default_values = DEFAULT_INPUTS)]
    inputs: Vec<PathBuf>,

    /// Where to write the assembled config
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG replaces the level entirely; --verbose only picks the fallback.
    let fallback = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(fallback.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    tracing::debug!("Merging {} fragments into {}", cli.inputs.len(), cli.output.display());

    let merged = merge(&cli.inputs).context("Failed to load config fragments")?;
    save(&merged, &cli.output)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;

    Ok(())
}
