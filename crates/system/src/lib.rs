pub mod battery;
pub mod cpu;
pub mod memory;

use sysinfo::{Disks, System};

/// Synchronous source of system-usage samples.
///
/// Each call to [`sample`](Self::sample) refreshes the underlying `sysinfo`
/// state and returns `(name, percent)` pairs ready to be recorded.
pub struct SystemSampler {
    sys: System,
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSampler {
    pub fn new() -> Self {
        Self {
            sys: System::new_all(),
        }
    }

    /// Take one sample of every available metric.
    ///
    /// CPU usage is measured between two calls, so the first sample reads 0.
    /// `battery` is omitted on machines without one.
    pub fn sample(&mut self) -> Vec<(&'static str, f64)> {
        self.sys.refresh_all();

        // ── CPU ──────────────────────────────────────────────────────────────
        let per_core: Vec<f32> = self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        let mut pairs = vec![("cpu", cpu::average(&per_core))];

        // ── Memory ───────────────────────────────────────────────────────────
        pairs.push((
            "memory",
            memory::percent(self.sys.used_memory(), self.sys.total_memory()),
        ));
        pairs.push((
            "swap",
            memory::percent(self.sys.used_swap(), self.sys.total_swap()),
        ));

        // ── Disk ─────────────────────────────────────────────────────────────
        let disks = Disks::new_with_refreshed_list();
        let (disk_used, disk_total) = disks
            .iter()
            .find(|d| d.mount_point() == std::path::Path::new("/"))
            .map(|d| (memory::used(d.total_space(), d.available_space()), d.total_space()))
            .unwrap_or((0, 0));
        pairs.push(("disk", memory::percent(disk_used, disk_total)));

        // ── Battery ──────────────────────────────────────────────────────────
        if let Some(level) = battery::read_battery() {
            pairs.push(("battery", level));
        }

        tracing::trace!("System sample: {pairs:?}");
        pairs
    }
}
