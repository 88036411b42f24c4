//! Terminal front end for `devplot`.
//!
//! Owns the sampling loop and wires together:
//! - the [`TextSurface`] that renders the pane grid to stdout
//! - the recorder context holding every configured metric
//! - the system sampler feeding it

pub mod chart;
pub mod surface;

pub use surface::TextSurface;

use devplot_config::DevplotConfig;
use devplot_core::{PlotError, Result, Surface};
use devplot_recorder::RecorderContext;
use devplot_system::SystemSampler;
use std::time::Duration;
use tracing::{info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Record system samples onto a text grid on stdout.
///
/// Runs `config.sampler.iterations` rounds, or forever when that is zero.
pub fn run(config: &DevplotConfig) -> Result<()> {
    config.validate()?;

    let surface = TextSurface::new(std::io::stdout(), &config.display);
    let mut ctx = RecorderContext::with_columns(surface, config.layout.columns)?;
    ctx.register_all(&config.metrics)?;
    info!(
        "Recording {} metric(s) on a {}x{} grid",
        ctx.registry().len(),
        ctx.layout().rows(),
        ctx.layout().columns()
    );

    let mut sampler = SystemSampler::new();
    sample_loop(&mut ctx, &mut sampler, config.sampler.interval_ms, config.sampler.iterations)
}

/// Feed `sampler` into `ctx` every `interval_ms`.
///
/// Per-metric redraw failures are logged and the loop carries on; any other
/// error stops it.
pub fn sample_loop<S: Surface>(
    ctx: &mut RecorderContext<S>,
    sampler: &mut SystemSampler,
    interval_ms: u64,
    iterations: u64,
) -> Result<()> {
    let interval = Duration::from_millis(interval_ms);
    let mut round: u64 = 0;

    while iterations == 0 || round < iterations {
        if round > 0 {
            std::thread::sleep(interval);
        }

        match ctx.record(sampler.sample()) {
            Ok(()) => {}
            Err(PlotError::Redraw(failures)) => {
                warn!("{} metric(s) failed to redraw in round {round}", failures.len());
            }
            Err(e) => return Err(e),
        }

        round += 1;
    }

    info!("Sampling finished after {round} round(s)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devplot_config::PaneConfig;
    use devplot_core::RecordingSurface;

    #[test]
    fn sample_loop_records_every_round() {
        let mut ctx = RecorderContext::new(RecordingSurface::new());
        ctx.set_recorder("memory", &PaneConfig::default()).unwrap();
        ctx.set_recorder("cpu", &PaneConfig::default().with_smoothing(4)).unwrap();

        sample_loop(&mut ctx, &mut SystemSampler::new(), 0, 3).unwrap();

        assert_eq!(ctx.snapshot("memory").unwrap().values.len(), 3);
        assert_eq!(ctx.snapshot("cpu").unwrap().indices, 0..3);
    }
}
