//! devplot: live system telemetry plotted on a text grid.
//!
//! Run with:  `RUST_LOG=info devplot [path/to/devplot.toml]`

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("devplot v{} starting", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(devplot_config::default_path);
    let config = devplot_config::load(&path)
        .with_context(|| format!("loading config from '{}'", path.display()))?;

    devplot_terminal::run(&config).map_err(Into::into)
}
