use thiserror::Error;

/// Top-level error type used across every devplot crate.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A pane, filter, buffer or grid was configured with an unusable value.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },

    #[error("surface error: {0}")]
    Surface(String),

    /// One or more metrics in a batched `record` failed to redraw.
    /// Every other metric in the batch was still recorded.
    #[error("{} metric(s) failed to redraw: {}", .0.len(), list_failures(.0))]
    Redraw(Vec<MetricFailure>),

    #[error("config error: {0}")]
    Config(String),

    #[error("no default recorder context; call `devplot_recorder::init` first")]
    NoDefaultContext,
}

impl PlotError {
    /// Shorthand for [`PlotError::InvalidConfiguration`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// A single metric's failure inside a batched `record` call.
#[derive(Debug)]
pub struct MetricFailure {
    pub metric: String,
    pub error: Box<PlotError>,
}

fn list_failures(failures: &[MetricFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.metric, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_error_lists_every_metric() {
        let err = PlotError::Redraw(vec![
            MetricFailure {
                metric: "loss".into(),
                error: Box::new(PlotError::Surface("gone".into())),
            },
            MetricFailure {
                metric: "score".into(),
                error: Box::new(PlotError::Surface("busy".into())),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "2 metric(s) failed to redraw: loss: surface error: gone; score: surface error: busy"
        );
    }

    #[test]
    fn invalid_names_the_field() {
        let err = PlotError::invalid("redraw_every", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration for `redraw_every`: must be at least 1"
        );
    }
}
