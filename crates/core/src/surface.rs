use crate::error::{PlotError, Result};
use crate::event::SurfaceCall;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

/// Opaque reference to a pane owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaneHandle(pub usize);

impl fmt::Display for PaneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane#{}", self.0)
    }
}

/// Placement of one pane inside a `rows × columns` grid.
///
/// `index` is 0-based and runs row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSlot {
    pub rows:    usize,
    pub columns: usize,
    pub index:   usize,
}

impl GridSlot {
    pub fn row(&self) -> usize {
        self.index / self.columns.max(1)
    }

    pub fn column(&self) -> usize {
        self.index % self.columns.max(1)
    }
}

/// Which rendering of a metric a plotted series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Raw,
    Smoothed,
}

/// One line to draw: `values[k]` is plotted at x = `indices.start + k`.
#[derive(Debug, Clone)]
pub struct Series<'a> {
    pub kind:    SeriesKind,
    pub indices: Range<u64>,
    pub values:  &'a [f64],
}

/// The drawing target every pane renders into.
///
/// The surface owns the physical panes; callers only hold [`PaneHandle`]s.
/// Implementations must keep previously returned handles valid across later
/// `add_pane` calls, and `refresh` must be safe to call on every redraw.
pub trait Surface {
    /// Allocate a new pane placed at `slot`.
    fn add_pane(&mut self, slot: GridSlot) -> Result<PaneHandle>;

    /// Move or resize an existing pane.  Drawn content is left untouched.
    fn reposition(&mut self, handle: PaneHandle, slot: GridSlot) -> Result<()>;

    fn clear(&mut self, handle: PaneHandle) -> Result<()>;

    fn set_labels(&mut self, handle: PaneHandle, x_label: &str, y_label: &str) -> Result<()>;

    fn plot(&mut self, handle: PaneHandle, series: &Series<'_>) -> Result<()>;

    /// Flush all pending drawing to the display.
    fn refresh(&mut self) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn add_pane(&mut self, slot: GridSlot) -> Result<PaneHandle> {
        (**self).add_pane(slot)
    }

    fn reposition(&mut self, handle: PaneHandle, slot: GridSlot) -> Result<()> {
        (**self).reposition(handle, slot)
    }

    fn clear(&mut self, handle: PaneHandle) -> Result<()> {
        (**self).clear(handle)
    }

    fn set_labels(&mut self, handle: PaneHandle, x_label: &str, y_label: &str) -> Result<()> {
        (**self).set_labels(handle, x_label, y_label)
    }

    fn plot(&mut self, handle: PaneHandle, series: &Series<'_>) -> Result<()> {
        (**self).plot(handle, series)
    }

    fn refresh(&mut self) -> Result<()> {
        (**self).refresh()
    }
}

// ── Recording surface ─────────────────────────────────────────────────────────

/// A headless [`Surface`] that logs every call as a [`SurfaceCall`].
///
/// Drawing on a pane marked with [`fail_pane`](Self::fail_pane), or moving
/// one marked with [`fail_reposition`](Self::fail_reposition), returns a
/// [`PlotError::Surface`] instead, which makes per-pane failures easy to
/// reproduce.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls:        Vec<SurfaceCall>,
    pane_count:   usize,
    failing:      HashSet<PaneHandle>,
    pinned:       HashSet<PaneHandle>,
    refuse_panes: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Drain the call log.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    /// Make every drawing call on `handle` fail until [`recover_pane`](Self::recover_pane).
    pub fn fail_pane(&mut self, handle: PaneHandle) {
        self.failing.insert(handle);
    }

    pub fn recover_pane(&mut self, handle: PaneHandle) {
        self.failing.remove(&handle);
    }

    /// Make `reposition` of `handle` fail until [`recover_reposition`](Self::recover_reposition).
    pub fn fail_reposition(&mut self, handle: PaneHandle) {
        self.pinned.insert(handle);
    }

    pub fn recover_reposition(&mut self, handle: PaneHandle) {
        self.pinned.remove(&handle);
    }

    /// Make `add_pane` fail while `refuse` is set.
    pub fn refuse_panes(&mut self, refuse: bool) {
        self.refuse_panes = refuse;
    }

    /// Number of redraws `handle` received, counted by its `Clear` calls.
    pub fn redraws_of(&self, handle: PaneHandle) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Clear(h) if *h == handle))
            .count()
    }

    pub fn refresh_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Refresh))
            .count()
    }

    fn check_pane(&self, handle: PaneHandle) -> Result<()> {
        if handle.0 >= self.pane_count {
            return Err(PlotError::Surface(format!("unknown {handle}")));
        }
        if self.failing.contains(&handle) {
            return Err(PlotError::Surface(format!("{handle} refused to draw")));
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn add_pane(&mut self, slot: GridSlot) -> Result<PaneHandle> {
        if self.refuse_panes {
            return Err(PlotError::Surface("pane allocation refused".into()));
        }
        let handle = PaneHandle(self.pane_count);
        self.pane_count += 1;
        self.calls.push(SurfaceCall::AddPane { handle, slot });
        Ok(handle)
    }

    fn reposition(&mut self, handle: PaneHandle, slot: GridSlot) -> Result<()> {
        if handle.0 >= self.pane_count {
            return Err(PlotError::Surface(format!("unknown {handle}")));
        }
        if self.pinned.contains(&handle) {
            return Err(PlotError::Surface(format!("{handle} refused to move")));
        }
        self.calls.push(SurfaceCall::Reposition { handle, slot });
        Ok(())
    }

    fn clear(&mut self, handle: PaneHandle) -> Result<()> {
        self.check_pane(handle)?;
        self.calls.push(SurfaceCall::Clear(handle));
        Ok(())
    }

    fn set_labels(&mut self, handle: PaneHandle, x_label: &str, y_label: &str) -> Result<()> {
        self.check_pane(handle)?;
        self.calls.push(SurfaceCall::SetLabels {
            handle,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        });
        Ok(())
    }

    fn plot(&mut self, handle: PaneHandle, series: &Series<'_>) -> Result<()> {
        self.check_pane(handle)?;
        self.calls.push(SurfaceCall::Plot {
            handle,
            kind:    series.kind,
            indices: series.indices.clone().collect(),
            values:  series.values.to_vec(),
        });
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::Refresh);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(index: usize) -> GridSlot {
        GridSlot { rows: 2, columns: 3, index }
    }

    #[test]
    fn slot_row_major_position() {
        assert_eq!((slot(0).row(), slot(0).column()), (0, 0));
        assert_eq!((slot(4).row(), slot(4).column()), (1, 1));
    }

    #[test]
    fn handles_stay_valid_across_allocations() {
        let mut surface = RecordingSurface::new();
        let a = surface.add_pane(slot(0)).unwrap();
        let b = surface.add_pane(slot(1)).unwrap();
        assert_ne!(a, b);
        surface.clear(a).unwrap();
        surface.clear(b).unwrap();
        assert_eq!(surface.redraws_of(a), 1);
    }

    #[test]
    fn failing_pane_only_blocks_its_own_drawing() {
        let mut surface = RecordingSurface::new();
        let a = surface.add_pane(slot(0)).unwrap();
        let b = surface.add_pane(slot(1)).unwrap();
        surface.fail_pane(a);

        assert!(matches!(surface.clear(a), Err(PlotError::Surface(_))));
        assert!(surface.clear(b).is_ok());

        surface.recover_pane(a);
        assert!(surface.clear(a).is_ok());
    }

    #[test]
    fn failing_reposition_leaves_drawing_alone() {
        let mut surface = RecordingSurface::new();
        let a = surface.add_pane(slot(0)).unwrap();
        surface.fail_reposition(a);

        assert!(matches!(surface.reposition(a, slot(1)), Err(PlotError::Surface(_))));
        assert!(surface.clear(a).is_ok());
        assert!(!surface
            .calls()
            .iter()
            .any(|c| matches!(c, SurfaceCall::Reposition { .. })));

        surface.recover_reposition(a);
        assert!(surface.reposition(a, slot(1)).is_ok());
    }

    #[test]
    fn drawing_on_unknown_pane_fails() {
        let mut surface = RecordingSurface::new();
        assert!(surface.clear(PaneHandle(3)).is_err());
    }

    #[test]
    fn boxed_surface_forwards() {
        let mut surface: Box<dyn Surface> = Box::new(RecordingSurface::new());
        let handle = surface.add_pane(slot(0)).unwrap();
        assert_eq!(handle, PaneHandle(0));
        assert!(surface.refresh().is_ok());
    }
}
