use crate::error::{PlotError, Result};
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Ordered history of scalar samples with globally monotonic indices.
///
/// The buffer keeps at most `capacity` of the most recent values.  Evicting
/// old values never renumbers the survivors: the k-th retained value always
/// has index `total_count - len + k`.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    capacity:    Option<NonZeroUsize>,
    total_count: u64,
    window:      VecDeque<f64>,
}

impl SampleBuffer {
    /// An unbounded buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer retaining at most `capacity` samples.  Zero is rejected.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| PlotError::invalid("max_history", "must be at least 1"))?;
        Ok(Self::bounded(capacity))
    }

    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            capacity:    Some(capacity),
            total_count: 0,
            window:      VecDeque::with_capacity(capacity.get()),
        }
    }

    /// Push a new sample, evicting the oldest ones past capacity.
    pub fn append(&mut self, value: f64) {
        self.total_count += 1;
        self.window.push_back(value);

        if let Some(cap) = self.capacity {
            while self.window.len() > cap.get() {
                self.window.pop_front();
            }
        }
    }

    /// Global indices of the retained samples, aligned with [`values`](Self::values).
    pub fn indices(&self) -> Range<u64> {
        self.total_count - self.window.len() as u64..self.total_count
    }

    /// Retained samples, oldest first.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + DoubleEndedIterator + Clone + '_ {
        self.window.iter().copied()
    }

    /// Copy of the retained samples, oldest first.
    pub fn to_vec(&self) -> Vec<f64> {
        self.window.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.window.back().copied()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Samples ever appended, including evicted ones.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: Option<usize>, n: u64) -> SampleBuffer {
        let mut buf = match capacity {
            Some(c) => SampleBuffer::with_capacity(c).unwrap(),
            None => SampleBuffer::new(),
        };
        for i in 0..n {
            buf.append(i as f64 * 10.0);
        }
        buf
    }

    #[test]
    fn unbounded_keeps_everything() {
        let buf = filled(None, 7);
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.indices(), 0..7);
        assert_eq!(buf.latest(), Some(60.0));
    }

    #[test]
    fn eviction_preserves_index_continuity() {
        for cap in 1..6 {
            for n in 0..12u64 {
                let buf = filled(Some(cap), n);
                let kept = n.min(cap as u64);
                assert_eq!(buf.len() as u64, kept);
                assert_eq!(buf.indices(), n - kept..n);
                // Each retained value still sits at its original index.
                for (idx, value) in buf.indices().zip(buf.values()) {
                    assert_eq!(value, idx as f64 * 10.0);
                }
            }
        }
    }

    #[test]
    fn indices_are_restartable() {
        let buf = filled(Some(3), 5);
        let first: Vec<u64> = buf.indices().collect();
        let second: Vec<u64> = buf.indices().collect();
        assert_eq!(first, vec![2, 3, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            SampleBuffer::with_capacity(0),
            Err(PlotError::InvalidConfiguration { field: "max_history", .. })
        ));
    }

    #[test]
    fn non_finite_samples_are_kept_in_order() {
        let mut buf = SampleBuffer::with_capacity(3).unwrap();
        for v in [1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            buf.append(v);
        }

        assert_eq!(buf.indices(), 1..4);
        assert_eq!(buf.total_count(), 4);
        let values = buf.to_vec();
        assert!(values[0].is_nan());
        assert_eq!(&values[1..], &[f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(buf.latest(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn empty_buffer() {
        let buf = SampleBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.indices(), 0..0);
        assert_eq!(buf.latest(), None);
    }
}
