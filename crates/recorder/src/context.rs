use crate::registry::RecorderRegistry;
use devplot_config::{MetricConfig, PaneConfig};
use devplot_core::{MetricSnapshot, PaneHandle, Result, Surface};
use devplot_layout::GridLayout;
use devplot_pane::{MetricPane, PaneSpec};

/// Everything needed to record metrics onto one surface.
///
/// The context owns the surface, the grid layout and the name bindings.  It
/// is a plain value: callers that need to share it across threads wrap it in
/// their own lock.
#[derive(Debug)]
pub struct RecorderContext<S: Surface> {
    surface:  S,
    layout:   GridLayout,
    registry: RecorderRegistry,
}

impl<S: Surface> RecorderContext<S> {
    /// A single-column context drawing onto `surface`.
    pub fn new(surface: S) -> Self {
        Self::with_layout(surface, GridLayout::single_column())
    }

    pub fn with_layout(surface: S, layout: GridLayout) -> Self {
        Self {
            surface,
            layout,
            registry: RecorderRegistry::new(),
        }
    }

    /// A context with `columns` columns.  Zero is rejected.
    pub fn with_columns(surface: S, columns: usize) -> Result<Self> {
        Ok(Self::with_layout(surface, GridLayout::new(columns)?))
    }

    /// Register (or replace) the metric `name`.
    ///
    /// The configuration is validated before a surface pane is allocated, so
    /// an invalid config leaves the grid untouched.  Once the surface has
    /// handed out a pane the name is bound to it, even if re-flowing the grid
    /// then fails; that failure is still returned.
    pub fn set_recorder(&mut self, name: impl Into<String>, config: &PaneConfig) -> Result<PaneHandle> {
        let spec = PaneSpec::from_config(config)?;
        let handle = self.layout.append_pane(&mut self.surface)?;
        let reflowed = self.layout.reflow(&mut self.surface);
        self.registry.bind(name, MetricPane::new(spec, handle));
        reflowed.map(|()| handle)
    }

    /// Register every metric of a config file, in order.
    pub fn register_all<'a>(&mut self, metrics: impl IntoIterator<Item = &'a MetricConfig>) -> Result<()> {
        for metric in metrics {
            self.set_recorder(metric.name.clone(), &metric.pane)?;
        }
        Ok(())
    }

    /// Record one or more named samples.  Unregistered names are ignored.
    pub fn record<I, N>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, f64)>,
        N: AsRef<str>,
    {
        self.registry.dispatch(pairs, &mut self.surface)
    }

    /// Record a single sample.
    pub fn record_one(&mut self, name: &str, value: f64) -> Result<()> {
        self.record([(name, value)])
    }

    pub fn snapshot(&self, name: &str) -> Option<MetricSnapshot> {
        self.registry.get(name).map(MetricPane::snapshot)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn registry(&self) -> &RecorderRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, dropping every binding.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
