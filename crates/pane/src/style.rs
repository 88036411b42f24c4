use devplot_core::{PaneHandle, Result, Series, SeriesKind, SmoothingFilter, Surface};
use std::ops::Range;

/// How a pane turns its retained samples into plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotStyle {
    /// The raw samples only.
    Raw,
    /// The raw samples plus a causal moving average on top.
    Smoothed(SmoothingFilter),
}

impl PlotStyle {
    /// `Smoothed` when a window is given, `Raw` otherwise.
    pub fn from_window(window: Option<usize>) -> Result<Self> {
        match window {
            Some(w) => Ok(Self::Smoothed(SmoothingFilter::new(w)?)),
            None => Ok(Self::Raw),
        }
    }

    /// Series kinds drawn on every redraw, in drawing order.
    pub fn series_kinds(&self) -> Vec<SeriesKind> {
        match self {
            Self::Raw => vec![SeriesKind::Raw],
            Self::Smoothed(_) => vec![SeriesKind::Raw, SeriesKind::Smoothed],
        }
    }

    /// Plot `values` (at `indices`) onto `handle`.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        handle: PaneHandle,
        indices: Range<u64>,
        values: &[f64],
    ) -> Result<()> {
        surface.plot(
            handle,
            &Series {
                kind: SeriesKind::Raw,
                indices: indices.clone(),
                values,
            },
        )?;

        if let Self::Smoothed(filter) = self {
            let smoothed = filter.apply(values);
            surface.plot(
                handle,
                &Series {
                    kind: SeriesKind::Smoothed,
                    indices,
                    values: &smoothed,
                },
            )?;
        }

        Ok(())
    }
}
