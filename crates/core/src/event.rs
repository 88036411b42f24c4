use crate::surface::{GridSlot, PaneHandle, SeriesKind};

/// Every call a [`Surface`](crate::Surface) can receive, in recorded form.
///
/// [`RecordingSurface`](crate::RecordingSurface) appends one of these per call
/// so tests and headless runs can inspect exactly what would have been drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    // ── Layout ────────────────────────────────────────────────────────────────
    /// A new pane was allocated at `slot`.
    AddPane { handle: PaneHandle, slot: GridSlot },
    /// An existing pane was moved to `slot` after a grid reflow.
    Reposition { handle: PaneHandle, slot: GridSlot },

    // ── Drawing ───────────────────────────────────────────────────────────────
    Clear(PaneHandle),
    SetLabels {
        handle: PaneHandle,
        x_label: String,
        y_label: String,
    },
    /// One series drawn onto a pane.
    Plot {
        handle: PaneHandle,
        kind: SeriesKind,
        indices: Vec<u64>,
        values: Vec<f64>,
    },

    // ── Flush ─────────────────────────────────────────────────────────────────
    Refresh,
}
