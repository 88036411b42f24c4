pub mod schema;

pub use schema::{
    DevplotConfig, DisplayConfig, LayoutConfig, MetricConfig, PaneConfig, SamplerConfig,
};

use devplot_core::{PlotError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DevplotConfig::default()` if
/// the file doesn't exist so the binary always has something to plot.
pub fn load(path: impl AsRef<Path>) -> Result<DevplotConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DevplotConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| PlotError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config = parse(&raw)?;
    tracing::debug!(
        "Loaded {} metric(s) from '{}'",
        config.metrics.len(),
        path.display()
    );
    Ok(config)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<DevplotConfig> {
    let config: DevplotConfig =
        toml::from_str(raw).map_err(|e| PlotError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("devplot").join("devplot.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load("/nonexistent/devplot/devplot.toml").unwrap();
        assert_eq!(config.metrics.len(), DevplotConfig::default().metrics.len());
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let err = parse("[[metrics]]\nname = \"loss\"\nsmoothing_window = 0\n").unwrap_err();
        assert!(matches!(
            err,
            PlotError::InvalidConfiguration { field: "smoothing_window", .. }
        ));
    }

    #[test]
    fn parse_reports_syntax_errors_as_config() {
        assert!(matches!(parse("[layout"), Err(PlotError::Config(_))));
    }

    #[test]
    fn default_path_ends_with_devplot_toml() {
        assert!(default_path().ends_with("devplot/devplot.toml"));
    }
}
