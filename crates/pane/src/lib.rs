pub mod pane;
pub mod style;

pub use pane::{MetricPane, PaneSpec};
pub use style::PlotStyle;
