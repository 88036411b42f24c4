use crate::surface::{PaneHandle, SeriesKind};
use serde::Serialize;
use std::ops::Range;

/// A read-only, point-in-time copy of one metric pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub handle:  PaneHandle,
    pub x_label: String,
    pub y_label: String,
    /// `record` calls since the pane was created.
    pub call_count: u64,
    /// Samples ever appended, including evicted ones.
    pub total_count: u64,
    /// Global indices of `values`.
    pub indices: Range<u64>,
    /// Retained samples, oldest first.
    pub values: Vec<f64>,
    /// Series drawn on each redraw, in drawing order.
    pub series: Vec<SeriesKind>,
}

impl MetricSnapshot {
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }
}
