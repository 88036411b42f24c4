//! Thread-local default context for callers that don't want to thread a
//! [`RecorderContext`] through their code.
//!
//! Nothing is created implicitly: [`init`] must run once per thread before
//! [`set_recorder`].  Recording before `init` is a no-op, the same as
//! recording an unregistered name.

use crate::context::RecorderContext;
use devplot_config::PaneConfig;
use devplot_core::{MetricSnapshot, PaneHandle, PlotError, Result, Surface};
use std::cell::RefCell;

type DefaultContext = RecorderContext<Box<dyn Surface>>;

thread_local! {
    static DEFAULT: RefCell<Option<DefaultContext>> = const { RefCell::new(None) };
}

/// Install the default context for this thread.
///
/// Idempotent: returns `Ok(false)` and keeps the existing context (dropping
/// `surface`) when one is already installed.
pub fn init(surface: impl Surface + 'static, columns: usize) -> Result<bool> {
    DEFAULT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return Ok(false);
        }
        let boxed: Box<dyn Surface> = Box::new(surface);
        *slot = Some(RecorderContext::with_columns(boxed, columns)?);
        tracing::debug!("Installed default recorder context ({columns} column(s))");
        Ok(true)
    })
}

pub fn is_initialized() -> bool {
    DEFAULT.with(|cell| cell.borrow().is_some())
}

/// Run `f` against the default context, if one is installed.
pub fn with_default<R>(f: impl FnOnce(&mut DefaultContext) -> R) -> Option<R> {
    DEFAULT.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Remove and return this thread's default context.
pub fn shutdown() -> Option<DefaultContext> {
    DEFAULT.with(|cell| cell.borrow_mut().take())
}

/// [`RecorderContext::set_recorder`] on the default context.
pub fn set_recorder(name: impl Into<String>, config: &PaneConfig) -> Result<PaneHandle> {
    with_default(|ctx| ctx.set_recorder(name, config)).unwrap_or(Err(PlotError::NoDefaultContext))
}

/// [`RecorderContext::record`] on the default context.
pub fn record<I, N>(pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (N, f64)>,
    N: AsRef<str>,
{
    with_default(|ctx| ctx.record(pairs)).unwrap_or(Ok(()))
}

/// [`RecorderContext::snapshot`] on the default context.
pub fn snapshot(name: &str) -> Option<MetricSnapshot> {
    with_default(|ctx| ctx.snapshot(name)).flatten()
}
