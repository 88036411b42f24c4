use devplot_core::{PlotError, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `devplot.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevplotConfig {
    /// Grid settings shared by every pane.
    pub layout: LayoutConfig,
    /// Terminal rendering settings.
    pub display: DisplayConfig,
    /// System sampling loop driven by the `devplot` binary.
    pub sampler: SamplerConfig,
    /// Metrics to register, in grid order.
    pub metrics: Vec<MetricConfig>,
}

impl Default for DevplotConfig {
    fn default() -> Self {
        Self {
            layout:  LayoutConfig::default(),
            display: DisplayConfig::default(),
            sampler: SamplerConfig::default(),
            metrics: vec![
                MetricConfig::new(
                    "cpu",
                    PaneConfig::labelled("Sample", "CPU %")
                        .with_max_history(120)
                        .with_smoothing(8),
                ),
                MetricConfig::new(
                    "memory",
                    PaneConfig::labelled("Sample", "RAM %").with_max_history(120),
                ),
            ],
        }
    }
}

impl DevplotConfig {
    /// Check every section, failing on the first unusable value.
    pub fn validate(&self) -> Result<()> {
        if self.layout.columns == 0 {
            return Err(PlotError::invalid("columns", "must be at least 1"));
        }
        if self.display.pane_width == 0 {
            return Err(PlotError::invalid("pane_width", "must be at least 1"));
        }
        if self.display.pane_height == 0 {
            return Err(PlotError::invalid("pane_height", "must be at least 1"));
        }
        for metric in &self.metrics {
            metric.pane.validate()?;
        }
        Ok(())
    }
}

/// Grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fixed number of columns; rows grow as metrics are registered.
    pub columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { columns: 1 }
    }
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Chart width in characters.
    pub pane_width: usize,
    /// Chart height in lines.
    pub pane_height: usize,
    /// Clear the terminal before every refresh.
    pub clear_screen: bool,
    /// Emit ANSI colour escapes.
    pub color: bool,
    /// Raw series colour (hex, e.g. `"#89b4fa"`).
    pub raw_color: String,
    /// Smoothed series colour.
    pub smoothed_color: String,
    /// Label / header colour.
    pub label_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pane_width:     60,
            pane_height:    8,
            clear_screen:   true,
            color:          true,
            raw_color:      "#89b4fa".to_string(), // Catppuccin Mocha blue
            smoothed_color: "#f38ba8".to_string(), // Catppuccin Mocha red
            label_color:    "#cdd6f4".to_string(), // Catppuccin Mocha text
        }
    }
}

/// System sampling loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Delay between two samples, in milliseconds.
    pub interval_ms: u64,
    /// Number of samples to take; `0` runs until interrupted.
    pub iterations: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            iterations:  0,
        }
    }
}

/// One `[[metrics]]` entry: a name plus its pane settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Name samples are recorded under, e.g. `"cpu"` or `"loss"`.
    pub name: String,
    #[serde(flatten)]
    pub pane: PaneConfig,
}

impl MetricConfig {
    pub fn new(name: impl Into<String>, pane: PaneConfig) -> Self {
        Self {
            name: name.into(),
            pane,
        }
    }
}

/// Construction parameters for a single metric pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Redraw once every this many `record` calls.
    pub redraw_every: usize,
    /// Keep only the most recent samples; unbounded when unset.
    pub max_history: Option<usize>,
    /// Moving-average window; enables the smoothed series when set.
    pub smoothing_window: Option<usize>,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            x_label:          None,
            y_label:          None,
            redraw_every:     1,
            max_history:      None,
            smoothing_window: None,
        }
    }
}

impl PaneConfig {
    pub fn labelled(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            x_label: Some(x_label.into()),
            y_label: Some(y_label.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_redraw_every(mut self, redraw_every: usize) -> Self {
        self.redraw_every = redraw_every;
        self
    }

    #[must_use]
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = Some(max_history);
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, window: usize) -> Self {
        self.smoothing_window = Some(window);
        self
    }

    /// Reject zero for every count-like field.
    pub fn validate(&self) -> Result<()> {
        if self.redraw_every == 0 {
            return Err(PlotError::invalid("redraw_every", "must be at least 1"));
        }
        if self.max_history == Some(0) {
            return Err(PlotError::invalid("max_history", "must be at least 1"));
        }
        if self.smoothing_window == Some(0) {
            return Err(PlotError::invalid("smoothing_window", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: DevplotConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout.columns, 1);
        assert_eq!(config.metrics.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn metrics_keep_file_order() {
        let config: DevplotConfig = toml::from_str(
            r#"
            [layout]
            columns = 2

            [[metrics]]
            name = "loss"
            x_label = "Step"
            y_label = "Loss"
            redraw_every = 10
            max_history = 500
            smoothing_window = 32

            [[metrics]]
            name = "score"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.columns, 2);
        let names: Vec<_> = config.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["loss", "score"]);

        let loss = &config.metrics[0].pane;
        assert_eq!(loss.redraw_every, 10);
        assert_eq!(loss.max_history, Some(500));
        assert_eq!(loss.smoothing_window, Some(32));
        assert_eq!(config.metrics[1].pane, PaneConfig::default());
    }

    #[test]
    fn zero_counts_are_invalid() {
        for pane in [
            PaneConfig::default().with_redraw_every(0),
            PaneConfig::default().with_max_history(0),
            PaneConfig::default().with_smoothing(0),
        ] {
            assert!(matches!(
                pane.validate(),
                Err(PlotError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn zero_columns_is_invalid() {
        let mut config = DevplotConfig::default();
        config.layout.columns = 0;
        assert!(matches!(
            config.validate(),
            Err(PlotError::InvalidConfiguration { field: "columns", .. })
        ));
    }

    #[test]
    fn zero_pane_size_names_the_offending_field() {
        let mut config = DevplotConfig::default();
        config.display.pane_height = 0;
        assert!(matches!(
            config.validate(),
            Err(PlotError::InvalidConfiguration { field: "pane_height", .. })
        ));

        config.display.pane_height = 8;
        config.display.pane_width = 0;
        assert!(matches!(
            config.validate(),
            Err(PlotError::InvalidConfiguration { field: "pane_width", .. })
        ));
    }

    #[test]
    fn negative_counts_fail_to_parse() {
        let parsed: std::result::Result<DevplotConfig, _> = toml::from_str(
            r#"
            [[metrics]]
            name = "loss"
            redraw_every = -1
            "#,
        );
        assert!(parsed.is_err());
    }
}
