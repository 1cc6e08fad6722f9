//! Memory usage sampling via jemalloc statistics.
//!
//! The search loop samples allocator state once per expansion and reports the
//! peak growth over the run. Readings go through the jemalloc control
//! interface; the binary installs `tikv-jemallocator` as the global allocator
//! so the numbers cover the arena, visited set and frontier.

use tikv_jemalloc_ctl::{epoch, epoch_mib, stats};

const MIB: f64 = 1024.0 * 1024.0;

/// Tracks peak allocated bytes relative to a baseline taken at construction.
pub struct MemorySampler {
    epoch: epoch_mib,
    allocated: stats::allocated_mib,
    baseline: usize,
    peak: usize,
}

impl MemorySampler {
    /// Captures the baseline reading for the run about to start.
    ///
    /// # Panics
    ///
    /// Panics if the jemalloc control interface is unavailable, which only
    /// happens when the crate is built against a different allocator setup.
    #[must_use]
    pub fn start() -> Self {
        let epoch_handle = epoch::mib().unwrap();
        let allocated = stats::allocated::mib().unwrap();

        epoch_handle.advance().unwrap();
        let baseline = allocated.read().unwrap();

        Self {
            epoch: epoch_handle,
            allocated,
            baseline,
            peak: baseline,
        }
    }

    /// Takes one reading, keeping the largest seen so far.
    pub fn sample(&mut self) {
        if self.epoch.advance().is_ok() {
            if let Ok(now) = self.allocated.read() {
                self.peak = self.peak.max(now);
            }
        }
    }

    /// Peak growth over the baseline, in MiB.
    #[must_use]
    pub fn peak_delta_mib(&self) -> f64 {
        self.peak.saturating_sub(self.baseline) as f64 / MIB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_delta_is_non_negative() {
        let mut sampler = MemorySampler::start();
        let _buffer = vec![0_u8; 1 << 20];
        sampler.sample();
        assert!(sampler.peak_delta_mib() >= 0.0);
    }
}
