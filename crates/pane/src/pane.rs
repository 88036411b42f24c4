use crate::style::PlotStyle;
use devplot_config::PaneConfig;
use devplot_core::{MetricSnapshot, PaneHandle, PlotError, Result, SampleBuffer, Surface};
use std::num::NonZeroUsize;
use tracing::trace;

/// A validated [`PaneConfig`], ready to be bound to a surface pane.
///
/// Building one never touches a surface, so configuration errors surface
/// before any pane is allocated.
#[derive(Debug, Clone)]
pub struct PaneSpec {
    x_label:      String,
    y_label:      String,
    redraw_every: NonZeroUsize,
    max_history:  Option<NonZeroUsize>,
    style:        PlotStyle,
}

impl PaneSpec {
    pub fn from_config(config: &PaneConfig) -> Result<Self> {
        let redraw_every = NonZeroUsize::new(config.redraw_every)
            .ok_or_else(|| PlotError::invalid("redraw_every", "must be at least 1"))?;
        let max_history = match config.max_history {
            Some(n) => Some(
                NonZeroUsize::new(n)
                    .ok_or_else(|| PlotError::invalid("max_history", "must be at least 1"))?,
            ),
            None => None,
        };

        Ok(Self {
            x_label: config.x_label.clone().unwrap_or_default(),
            y_label: config.y_label.clone().unwrap_or_default(),
            redraw_every,
            max_history,
            style: PlotStyle::from_window(config.smoothing_window)?,
        })
    }

    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn redraw_every(&self) -> usize {
        self.redraw_every.get()
    }
}

/// One metric's history bound to one surface pane.
///
/// Every [`record`](Self::record) appends to the buffer; every
/// `redraw_every`-th call also redraws the pane.
#[derive(Debug, Clone)]
pub struct MetricPane {
    x_label:      String,
    y_label:      String,
    redraw_every: NonZeroUsize,
    buffer:       SampleBuffer,
    style:        PlotStyle,
    handle:       PaneHandle,
    call_count:   u64,
}

impl MetricPane {
    pub fn new(spec: PaneSpec, handle: PaneHandle) -> Self {
        let buffer = match spec.max_history {
            Some(cap) => SampleBuffer::bounded(cap),
            None => SampleBuffer::new(),
        };

        Self {
            x_label: spec.x_label,
            y_label: spec.y_label,
            redraw_every: spec.redraw_every,
            buffer,
            style: spec.style,
            handle,
            call_count: 0,
        }
    }

    /// Record one sample, redrawing when the cadence is due.
    ///
    /// Returns whether a redraw happened.  A failing redraw leaves the sample
    /// recorded and the call counted.
    pub fn record<S: Surface + ?Sized>(&mut self, value: f64, surface: &mut S) -> Result<bool> {
        self.buffer.append(value);
        self.call_count += 1;

        if self.call_count % self.redraw_every.get() as u64 != 0 {
            return Ok(false);
        }

        self.redraw(surface)?;
        Ok(true)
    }

    /// Clear the pane and draw the retained history, then refresh the surface.
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        trace!(
            "Redrawing {} ({} sample(s), call {})",
            self.handle,
            self.buffer.len(),
            self.call_count
        );

        surface.clear(self.handle)?;
        surface.set_labels(self.handle, &self.x_label, &self.y_label)?;
        let values = self.buffer.to_vec();
        self.style
            .draw(surface, self.handle, self.buffer.indices(), &values)?;
        surface.refresh()
    }

    pub fn handle(&self) -> PaneHandle {
        self.handle
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            handle:      self.handle,
            x_label:     self.x_label.clone(),
            y_label:     self.y_label.clone(),
            call_count:  self.call_count,
            total_count: self.buffer.total_count(),
            indices:     self.buffer.indices(),
            values:      self.buffer.to_vec(),
            series:      self.style.series_kinds(),
        }
    }
}
