//! Shared data generators for segmentation tests

#![allow(dead_code)]

use blocks_changepoint::{BlocksResult, Phase, SegmentationObserver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Exp;
use std::time::Duration;

/// Evenly spaced events with a dense burst in `[100, 110)`
pub fn burst_positions() -> Vec<f64> {
    let mut positions: Vec<f64> = (0..100).map(|i| i as f64).collect();
    positions.extend((0..200).map(|i| 100.0 + 0.05 * i as f64));
    positions.extend((1..91).map(|i| 110.0 + i as f64));
    positions
}

/// Poisson arrivals whose rate switches at each entry of `segments`
///
/// Each segment is `(duration, rate)`. Arrival times are continuous, so
/// duplicates are practically impossible.
pub fn poisson_arrivals(segments: &[(f64, f64)], seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arrivals = Vec::new();
    let mut start = 0.0;
    for &(duration, rate) in segments {
        let gaps = Exp::new(rate).unwrap();
        let mut t = start + rng.sample(gaps);
        while t < start + duration {
            arrivals.push(t);
            t += rng.sample(gaps);
        }
        start += duration;
    }
    arrivals
}

/// Observer that records every callback it receives
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub starts: Vec<(usize, f64)>,
    pub prefixes: Vec<usize>,
    pub phases: Vec<Phase>,
    pub finished_blocks: Option<usize>,
}

impl SegmentationObserver for RecordingObserver {
    fn on_start(&mut self, cells: usize, ncp_prior: f64) {
        self.starts.push((cells, ncp_prior));
    }

    fn on_prefix(&mut self, k: usize, _cells: usize) {
        self.prefixes.push(k);
    }

    fn on_phase(&mut self, phase: Phase, _elapsed: Duration) {
        self.phases.push(phase);
    }

    fn on_finish(&mut self, result: &BlocksResult) {
        self.finished_blocks = Some(result.block_count());
    }
}
