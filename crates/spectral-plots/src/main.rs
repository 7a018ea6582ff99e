// File: crates/spectral-plots/src/main.rs
// Summary: Renders the three spectral error charts into the working directory.

use std::path::Path;

use anyhow::{Context, Result};
use spectral_plots::{render_all, SAMPLE_TABLE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout only carries the status lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("Generating Collatz Spectral Visualizations...");
    render_all(&SAMPLE_TABLE, Path::new(".")).context("rendering spectral charts")?;
    println!("✅ All plots saved successfully.");
    Ok(())
}
