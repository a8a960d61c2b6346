//! Progress and timing hooks for segmentation runs
//!
//! Observers receive callbacks at key points of a run without being able to
//! influence it. The recursion calls [`SegmentationObserver::on_prefix`] once
//! per prefix, which doubles as a progress indicator for long runs.

use crate::types::{BlocksResult, Phase};
use std::time::Duration;
use tracing::{debug, trace};

/// Hooks invoked during a segmentation run
///
/// All methods have empty default implementations.
pub trait SegmentationObserver {
    /// Called once the prior is calibrated, before the recursion starts
    fn on_start(&mut self, _cells: usize, _ncp_prior: f64) {}

    /// Called after prefix `k` (of `cells`) has been solved
    fn on_prefix(&mut self, _k: usize, _cells: usize) {}

    /// Called when a phase completes
    fn on_phase(&mut self, _phase: Phase, _elapsed: Duration) {}

    /// Called with the final result
    fn on_finish(&mut self, _result: &BlocksResult) {}

    /// Check if this observer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Observer that ignores every callback
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SegmentationObserver for NullObserver {
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Observer that reports progress and phase timings through `tracing`
///
/// Progress is logged at `trace` level every `step_percent` percent of the
/// recursion; phase timings are logged at `debug`.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    step_percent: usize,
    next_report: usize,
}

impl TracingObserver {
    /// Report progress every `step_percent` percent (clamped to 1..=100)
    pub fn new(step_percent: usize) -> Self {
        Self {
            step_percent: step_percent.clamp(1, 100),
            next_report: 0,
        }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(10)
    }
}

impl SegmentationObserver for TracingObserver {
    fn on_start(&mut self, cells: usize, ncp_prior: f64) {
        self.next_report = 0;
        debug!(cells, ncp_prior, "starting recursion");
    }

    fn on_prefix(&mut self, k: usize, cells: usize) {
        let done = (k + 1) * 100 / cells;
        if done >= self.next_report {
            trace!("{}/{} prefixes ({}%)", k + 1, cells, done);
            self.next_report = done + self.step_percent;
        }
    }

    fn on_phase(&mut self, phase: Phase, elapsed: Duration) {
        debug!(%phase, elapsed_us = elapsed.as_micros() as u64, "phase complete");
    }

    fn on_finish(&mut self, result: &BlocksResult) {
        debug!(
            blocks = result.block_count(),
            cells = result.sample_size(),
            "segmentation complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_observer_disabled() {
        assert!(!NullObserver.is_enabled());
        assert!(TracingObserver::default().is_enabled());
    }

    #[test]
    fn test_tracing_observer_schedule() {
        let mut observer = TracingObserver::new(25);
        observer.on_start(8, -5.0);
        observer.on_prefix(0, 8); // 12%
        assert_eq!(observer.next_report, 37);
        observer.on_prefix(1, 8); // 25%, below next report
        assert_eq!(observer.next_report, 37);
        observer.on_prefix(2, 8); // 37%
        assert_eq!(observer.next_report, 62);
        observer.on_prefix(7, 8); // 100%
        assert_eq!(observer.next_report, 125);
    }

    #[test]
    fn test_step_is_clamped() {
        assert_eq!(TracingObserver::new(0).step_percent, 1);
        assert_eq!(TracingObserver::new(500).step_percent, 100);
    }
}
