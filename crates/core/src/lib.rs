pub mod buffer;
pub mod error;
pub mod event;
pub mod filter;
pub mod state;
pub mod surface;

pub use buffer::SampleBuffer;
pub use error::{MetricFailure, PlotError, Result};
pub use event::SurfaceCall;
pub use filter::SmoothingFilter;
pub use state::MetricSnapshot;
pub use surface::{GridSlot, PaneHandle, RecordingSurface, Series, SeriesKind, Surface};
