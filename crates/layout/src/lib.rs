//! Grid layout engine for metric panes.
//!
//! Panes are placed row-major on a grid with a fixed column count.  Every
//! allocation grows the grid and re-flows all existing panes, so older panes
//! shift as new metrics are registered.

use devplot_core::{GridSlot, PaneHandle, PlotError, Result, Surface};
use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// Ordered set of allocated panes and their shared grid geometry.
#[derive(Debug, Clone)]
pub struct GridLayout {
    columns: NonZeroUsize,
    rows:    usize,
    /// Allocation order = grid order.
    panes:   Vec<PaneHandle>,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::single_column()
    }
}

impl GridLayout {
    /// A layout with `columns` fixed columns.  Zero is rejected.
    pub fn new(columns: usize) -> Result<Self> {
        let columns = NonZeroUsize::new(columns)
            .ok_or_else(|| PlotError::invalid("columns", "must be at least 1"))?;
        Ok(Self::with_columns(columns))
    }

    pub fn with_columns(columns: NonZeroUsize) -> Self {
        Self {
            columns,
            rows: 0,
            panes: Vec::new(),
        }
    }

    pub fn single_column() -> Self {
        Self::with_columns(NonZeroUsize::MIN)
    }

    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn panes(&self) -> &[PaneHandle] {
        &self.panes
    }

    /// Allocate a pane on `surface` and re-flow the whole grid around it.
    ///
    /// Shorthand for [`append_pane`](Self::append_pane) followed by
    /// [`reflow`](Self::reflow).  A reflow error is returned even though the
    /// new pane already belongs to the grid; callers that must keep track of
    /// the handle in that case call the two steps themselves.
    pub fn allocate_pane<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<PaneHandle> {
        let handle = self.append_pane(surface)?;
        self.reflow(surface)?;
        Ok(handle)
    }

    /// Ask `surface` for a pane in the next grid slot and add it to the grid.
    ///
    /// If the surface refuses the pane the layout is left unchanged.  Existing
    /// panes are not moved; follow up with [`reflow`](Self::reflow).
    pub fn append_pane<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<PaneHandle> {
        let pane_count = self.panes.len() + 1;
        let rows = rows_for(pane_count, self.columns());

        let slot = GridSlot {
            rows,
            columns: self.columns(),
            index: pane_count - 1,
        };
        let handle = surface.add_pane(slot)?;

        self.rows = rows;
        self.panes.push(handle);
        debug!(
            "Allocated {handle}; grid is now {rows}x{} with {pane_count} pane(s)",
            self.columns()
        );
        Ok(handle)
    }

    /// Reposition every pane to its slot in the current grid.
    ///
    /// A failed reposition does not stop the others; the first failure is
    /// returned once every pane has been tried.
    pub fn reflow<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let mut first_error = None;
        for (index, &pane) in self.panes.iter().enumerate() {
            if let Err(e) = surface.reposition(pane, self.slot(index)) {
                warn!("Failed to reposition {pane}: {e}");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Current placement of every pane, in grid order.
    pub fn placements(&self) -> Vec<(PaneHandle, GridSlot)> {
        self.panes
            .iter()
            .enumerate()
            .map(|(index, &pane)| (pane, self.slot(index)))
            .collect()
    }

    /// Current placement of `handle`, if it belongs to this layout.
    pub fn placement_of(&self, handle: PaneHandle) -> Option<GridSlot> {
        self.panes
            .iter()
            .position(|&pane| pane == handle)
            .map(|index| self.slot(index))
    }

    fn slot(&self, index: usize) -> GridSlot {
        GridSlot {
            rows: self.rows,
            columns: self.columns(),
            index,
        }
    }
}

/// Rows needed to hold `pane_count` panes in `columns` columns.
///
/// Ceiling division: equal to plain integer division for a single column,
/// never zero once a pane exists, and never too small to hold every pane.
pub fn rows_for(pane_count: usize, columns: usize) -> usize {
    pane_count.div_ceil(columns.max(1))
}
