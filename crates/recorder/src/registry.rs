use devplot_core::{MetricFailure, PlotError, Result, Surface};
use devplot_pane::MetricPane;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Name → pane bindings.
///
/// Re-binding a name replaces the previous pane; the old pane is dropped but
/// its surface pane stays allocated.
#[derive(Debug, Default)]
pub struct RecorderRegistry {
    bindings: HashMap<String, MetricPane>,
}

impl RecorderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `pane`, returning the pane previously bound to it.
    pub fn bind(&mut self, name: impl Into<String>, pane: MetricPane) -> Option<MetricPane> {
        let name = name.into();
        let handle = pane.handle();
        let previous = self.bindings.insert(name.clone(), pane);
        match &previous {
            Some(old) => debug!("Rebound '{name}' from {} to {handle}", old.handle()),
            None => debug!("Bound '{name}' to {handle}"),
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&MetricPane> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Route every `(name, value)` pair to its pane.
    ///
    /// Unbound names are ignored.  A failing pane never stops the remaining
    /// pairs from being dispatched; all failures are returned together as
    /// [`PlotError::Redraw`].
    pub fn dispatch<I, N, S>(&mut self, pairs: I, surface: &mut S) -> Result<()>
    where
        I: IntoIterator<Item = (N, f64)>,
        N: AsRef<str>,
        S: Surface + ?Sized,
    {
        let mut failures = Vec::new();

        for (name, value) in pairs {
            let name = name.as_ref();
            let Some(pane) = self.bindings.get_mut(name) else {
                trace!("Ignoring sample for unregistered metric '{name}'");
                continue;
            };

            if let Err(e) = pane.record(value, surface) {
                warn!("Redraw of '{name}' failed: {e}");
                failures.push(MetricFailure {
                    metric: name.to_string(),
                    error:  Box::new(e),
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PlotError::Redraw(failures))
        }
    }
}
