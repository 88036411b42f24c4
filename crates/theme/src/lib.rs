pub mod colors;

pub use colors::Color;

use devplot_config::DisplayConfig;

/// Compiled colour scheme derived from [`DisplayConfig`].
///
/// Building one is infallible: invalid colour strings fall back to the
/// built-in palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub raw:      Color,
    pub smoothed: Color,
    pub label:    Color,
    /// When `false`, [`paint`](Self::paint) returns text unchanged.
    pub enabled:  bool,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[display]` section.
    pub fn from_config(cfg: &DisplayConfig) -> Self {
        Self {
            raw:      Color::from_hex(&cfg.raw_color).unwrap_or(Color::BLUE),
            smoothed: Color::from_hex(&cfg.smoothed_color).unwrap_or(Color::RED),
            label:    Color::from_hex(&cfg.label_color).unwrap_or(Color::WHITE),
            enabled:  cfg.color,
        }
    }

    /// A theme that never emits escapes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            color.paint(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}
