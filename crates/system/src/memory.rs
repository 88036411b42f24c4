/// `used / total` as a percentage in `[0, 100]`; `0.0` when `total` is zero.
pub fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0).min(100.0)
}

/// Space in use given a total and what is still available.
///
/// Some filesystems report more available space than their total (reserved
/// blocks, quotas); that reads as nothing used.
pub fn used(total: u64, available: u64) -> u64 {
    total.saturating_sub(available)
}
