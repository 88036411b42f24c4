//! Name-keyed metric recording.
//!
//! ```no_run
//! use devplot_config::PaneConfig;
//! use devplot_core::RecordingSurface;
//! use devplot_recorder::{record, RecorderContext};
//!
//! let mut ctx = RecorderContext::new(RecordingSurface::new());
//! ctx.set_recorder("loss", &PaneConfig::labelled("Step", "Loss").with_smoothing(32))?;
//! record!(ctx; loss = 0.75)?;
//! # Ok::<(), devplot_core::PlotError>(())
//! ```

pub mod context;
pub mod default;
pub mod registry;

pub use context::RecorderContext;
pub use default::{
    init, is_initialized, record, set_recorder, shutdown, snapshot, with_default,
};
pub use registry::RecorderRegistry;

/// Record `name = value` pairs.
///
/// `record!(loss = l, score = s)` targets the thread's default context;
/// `record!(ctx; loss = l)` targets an explicit [`RecorderContext`].
/// Values are converted with `as f64`.
#[macro_export]
macro_rules! record {
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::default::record([$((stringify!($name), ($value) as f64)),+])
    };
    ($ctx:expr; $($name:ident = $value:expr),+ $(,)?) => {
        $ctx.record([$((stringify!($name), ($value) as f64)),+])
    };
}
