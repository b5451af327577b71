//! Short memory of the amplitude and shine of the last chunks, for trend plots
//!
//! ```text
//!  oldest chunk                        newest chunk
//! ┌──────────┬──────────┬─────┬──────────┬──────────┐
//! │ evicted  │          │ ... │          │  pushed  │
//! └──────────┴──────────┴─────┴──────────┴──────────┘
//!  <-------------------- capacity ------------------>
//! ```
//! Both series always have the same length, entry `i` of the amplitude series
//! belongs to entry `i` of the shine series.

use std::collections::VecDeque;

use crate::config::HistoryConfig;
use crate::utils::{downsample, downsampled_len};

/// bounded series of scalars, new values enter at the back, old ones leave at the front
#[derive(Clone, Debug)]
pub struct RollingSeries {
    values: VecDeque<f32>,
    capacity: usize,
}

impl RollingSeries {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last(&self) -> Option<f32> {
        self.values.back().copied()
    }

    pub fn push(&mut self, value: f32) {
        self.values.push_back(value);
    }

    /// removes up to `amount` of the oldest values
    pub fn evict(&mut self, amount: usize) {
        let amount = amount.min(self.values.len());
        self.values.drain(..amount);
    }

    /// number of values over capacity
    pub fn excess(&self) -> usize {
        self.values.len().saturating_sub(self.capacity)
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.values.iter().copied().collect()
    }

    /// x coordinates spreading the values evenly over (0..=1)
    pub fn positions(&self) -> Vec<f32> {
        let len = self.values.len();
        if len == 1 {
            return vec![0.0];
        }
        (0..len).map(|i| i as f32 / (len - 1) as f32).collect()
    }
}

/// amplitude and shine traces that are pushed and evicted in lockstep
#[derive(Clone, Debug)]
pub struct RollingHistory {
    config: HistoryConfig,
    amplitude: RollingSeries,
    shine: RollingSeries,
}

impl RollingHistory {
    /// history that remembers `config.memory_chunks` chunks of `chunk_size` samples
    pub fn new(config: HistoryConfig, chunk_size: usize) -> Self {
        let capacity = config.memory_chunks * downsampled_len(chunk_size, config.sampling_ratio);
        Self {
            config,
            amplitude: RollingSeries::new(capacity),
            shine: RollingSeries::new(capacity),
        }
    }

    pub fn amplitude(&self) -> &RollingSeries {
        &self.amplitude
    }

    pub fn shine(&self) -> &RollingSeries {
        &self.shine
    }

    pub fn capacity(&self) -> usize {
        self.amplitude.capacity()
    }

    /// appends the downsampled chunk and one shine entry for each of its samples
    ///
    /// without a shine value the previous entry is repeated, or 0.0 if there is none yet
    pub fn update(&mut self, samples: &[i32], shine: Option<f32>) {
        let shine_entry = match shine {
            Some(shine) => shine / self.config.shine_divisor,
            None => {
                log::debug!("no shine this chunk, repeating last value");
                self.shine.last().unwrap_or(0.0)
            }
        };

        let mut sign = 1.0;
        for sample in downsample(samples, self.config.sampling_ratio) {
            self.amplitude
                .push(sign * (sample as f32 / self.config.amplitude_scale).abs());
            self.shine.push(shine_entry);
            if self.config.alternate_sign {
                sign = -sign;
            }
        }

        let excess = self.amplitude.excess();
        self.amplitude.evict(excess);
        self.shine.evict(excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(chunk_size: usize) -> RollingHistory {
        RollingHistory::new(HistoryConfig::default(), chunk_size)
    }

    #[test]
    fn capacity_is_nine_downsampled_chunks() {
        assert_eq!(history(8192).capacity(), 9 * 820);
        assert_eq!(history(100).capacity(), 90);
    }

    #[test]
    fn stabilizes_at_capacity() {
        let mut history = history(100);
        let chunk: Vec<i32> = (0..100).collect();

        for tick in 0..20 {
            history.update(&chunk, Some(5.0));
            assert_eq!(history.amplitude().len(), history.shine().len());
            assert_eq!(history.amplitude().len(), ((tick + 1) * 10).min(90));
        }
        assert_eq!(history.amplitude().len(), history.capacity());
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = history(20);
        for tick in 0..12 {
            let chunk = vec![tick * 1_000_000; 20];
            history.update(&chunk, Some(tick as f32));
        }
        // nine chunks of two entries remain, the first three chunks are gone
        let shine = history.shine().to_vec();
        assert_eq!(shine.len(), 18);
        assert_eq!(shine[0], 0.3);
        assert_eq!(shine[17], 1.1);
    }

    #[test]
    fn amplitude_is_scaled_and_alternating() {
        let mut history = history(40);
        let chunk = vec![-1_073_741_824; 40]; // -2^30
        history.update(&chunk, Some(1.0));

        let amplitude = history.amplitude().to_vec();
        assert_eq!(amplitude, vec![0.25, -0.25, 0.25, -0.25]);

        let config = HistoryConfig {
            alternate_sign: false,
            ..Default::default()
        };
        let mut history = RollingHistory::new(config, 40);
        history.update(&chunk, Some(1.0));
        assert!(history.amplitude().iter().all(|a| a == 0.25));
    }

    #[test]
    fn missing_shine_repeats_last_value() {
        let mut history = history(20);
        history.update(&[0; 20], None);
        assert_eq!(history.shine().to_vec(), vec![0.0, 0.0]);

        history.update(&[0; 20], Some(6.0));
        history.update(&[0; 20], None);
        assert_eq!(history.shine().to_vec(), vec![0.0, 0.0, 0.6, 0.6, 0.6, 0.6]);
        assert!(history.shine().iter().all(|s| !s.is_nan()));
    }

    #[test]
    fn positions_span_unit_interval() {
        let mut series = RollingSeries::new(10);
        assert!(series.positions().is_empty());
        series.push(1.0);
        assert_eq!(series.positions(), vec![0.0]);
        series.push(2.0);
        series.push(3.0);
        assert_eq!(series.positions(), vec![0.0, 0.5, 1.0]);
    }
}
