/// Read the battery charge from the Linux sysfs power-supply interface.
///
/// Returns the percentage of the first battery found, or `None` if the
/// system has no battery (desktop, VM).
pub fn read_battery() -> Option<f64> {
    for name in ["BAT0", "BAT1", "BAT2"] {
        let base = std::path::Path::new("/sys/class/power_supply").join(name);
        if !base.exists() {
            continue;
        }

        let capacity = std::fs::read_to_string(base.join("capacity")).ok()?;
        return capacity.trim().parse::<f64>().ok();
    }
    None
}
