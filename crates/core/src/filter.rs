use crate::error::{PlotError, Result};
use std::num::NonZeroUsize;

/// Causal moving average.
///
/// Output `i` is the mean of the input over `max(0, i - window + 1) ..= i`,
/// so the window shrinks near the start and the output always has the same
/// length as the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothingFilter {
    window_size: NonZeroUsize,
}

impl SmoothingFilter {
    pub fn new(window_size: usize) -> Result<Self> {
        let window_size = NonZeroUsize::new(window_size)
            .ok_or_else(|| PlotError::invalid("smoothing_window", "must be at least 1"))?;
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size.get()
    }

    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let window = self.window_size.get();

        // Each output sums its own window, so a non-finite or huge sample only
        // affects the outputs whose window contains it.
        (0..values.len())
            .map(|i| {
                let span = &values[(i + 1).saturating_sub(window)..=i];
                span.iter().sum::<f64>() / span.len() as f64
            })
            .collect()
    }
}
