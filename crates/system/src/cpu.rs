/// Mean of the per-core usages (each `0.0..=100.0`); `0.0` with no cores.
pub fn average(per_core: &[f32]) -> f64 {
    if per_core.is_empty() {
        return 0.0;
    }
    per_core.iter().map(|&c| f64::from(c)).sum::<f64>() / per_core.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_cores() {
        assert_eq!(average(&[10.0, 30.0]), 20.0);
    }

    #[test]
    fn average_without_cores() {
        assert_eq!(average(&[]), 0.0);
    }
}
