//! Bayesian Blocks detector
//!
//! Ties the pipeline together: validated sample → cell edges → calibrated
//! kernel → recursion → backtracking → edge selection.

use crate::backtrack::{block_starts, block_weights};
use crate::edges::CellEdges;
use crate::kernel::CashKernel;
use crate::observer::{SegmentationObserver, TracingObserver};
use crate::segmenter::{optimal_partition, PartitionTables};
use crate::traits::{BlockSegmenter, ChangePointDetectorProperties, ConfigurableDetector};
use crate::types::{BlocksResult, Phase, PhaseTimings};
use blocks_core::execution::num_threads;
use blocks_core::{Error, ExecutionStrategy, Result, WeightedSample};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};

/// Default false positive rate used to calibrate the change point prior
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// Bayesian Blocks parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocksParameters {
    /// False positive rate `p0` used to calibrate the change point prior.
    /// Smaller values yield fewer, larger blocks.
    pub false_positive_rate: f64,
    /// How candidate block starts are scored
    pub execution: ExecutionStrategy,
    /// Attach per-phase wall-clock timings to the result
    pub collect_timings: bool,
}

impl Default for BlocksParameters {
    fn default() -> Self {
        Self {
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
            execution: ExecutionStrategy::default(),
            collect_timings: false,
        }
    }
}

impl BlocksParameters {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.false_positive_rate.is_finite() && self.false_positive_rate > 0.0) {
            return Err(Error::invalid_false_positive_rate(self.false_positive_rate));
        }
        Ok(())
    }
}

/// Bayesian Blocks segmenter
#[derive(Debug, Clone, Default)]
pub struct BayesianBlocks {
    params: BlocksParameters,
}

impl BayesianBlocks {
    /// Create a segmenter with the given false positive rate
    pub fn new(false_positive_rate: f64) -> Self {
        Self {
            params: BlocksParameters {
                false_positive_rate,
                ..BlocksParameters::default()
            },
        }
    }

    /// Set the execution strategy for candidate scoring
    pub fn with_execution(mut self, execution: ExecutionStrategy) -> Self {
        self.params.execution = execution;
        self
    }

    /// Enable or disable phase timing collection
    pub fn with_timings(mut self, collect_timings: bool) -> Self {
        self.params.collect_timings = collect_timings;
        self
    }

    /// Segment an already validated sample, reporting progress through
    /// `tracing`
    pub fn segment_sample(&self, sample: &WeightedSample) -> Result<BlocksResult> {
        self.segment_sample_observed(sample, &mut TracingObserver::default())
    }

    /// Segment an already validated sample with a custom observer
    #[instrument(
        skip(self, sample, observer),
        fields(cells = sample.len(), p0 = self.params.false_positive_rate)
    )]
    pub fn segment_sample_observed(
        &self,
        sample: &WeightedSample,
        observer: &mut dyn SegmentationObserver,
    ) -> Result<BlocksResult> {
        self.params.validate()?;
        let mut timings = PhaseTimings::default();
        let n = sample.len();

        let start = Instant::now();
        let edges = CellEdges::from_sample(sample)?;
        let cumulative = sample.cumulative_weights();
        let kernel = CashKernel::calibrated(self.params.false_positive_rate, n)?;
        finish_phase(Phase::Init, start, &mut timings, observer);
        observer.on_start(n, kernel.ncp_prior());
        if self.params.execution.use_parallel(n) {
            debug!(threads = num_threads(), "scoring candidates in parallel");
        }

        let start = Instant::now();
        // A single cell has zero width and is always one block
        let tables = if n == 1 {
            PartitionTables {
                best: Vec::new(),
                last: Vec::new(),
            }
        } else {
            optimal_partition(
                &cumulative,
                &edges,
                &kernel,
                self.params.execution,
                observer,
            )?
        };
        finish_phase(Phase::Recursion, start, &mut timings, observer);

        let start = Instant::now();
        let starts = if n == 1 {
            vec![0, 1]
        } else {
            block_starts(&tables.last)?
        };
        let selected = edges.select(&starts)?;
        let weights = block_weights(&cumulative, &starts);
        finish_phase(Phase::Backtrack, start, &mut timings, observer);

        let mut result = BlocksResult::new(
            selected,
            starts,
            weights,
            tables.best,
            tables.last,
            kernel.ncp_prior(),
            n,
        );
        if self.params.collect_timings {
            result = result.with_timings(timings);
        }
        observer.on_finish(&result);
        Ok(result)
    }
}

fn finish_phase(
    phase: Phase,
    start: Instant,
    timings: &mut PhaseTimings,
    observer: &mut dyn SegmentationObserver,
) {
    let elapsed = start.elapsed();
    timings.record(phase, elapsed);
    observer.on_phase(phase, elapsed);
}

impl ChangePointDetectorProperties for BayesianBlocks {
    fn algorithm_name(&self) -> &'static str {
        "BayesianBlocks"
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl BlockSegmenter for BayesianBlocks {
    fn segment_weighted(&self, positions: &[f64], weights: &[f64]) -> Result<BlocksResult> {
        self.params.validate()?;
        let sample = WeightedSample::from_weighted(positions, weights)?;
        self.segment_sample(&sample)
    }

    fn segment_positions(&self, positions: &[f64]) -> Result<BlocksResult> {
        self.params.validate()?;
        let sample = WeightedSample::from_positions(positions)?;
        self.segment_sample(&sample)
    }
}

impl ConfigurableDetector for BayesianBlocks {
    type Parameters = BlocksParameters;

    fn with_parameters(params: Self::Parameters) -> Self {
        Self { params }
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) {
        self.params = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NullObserver;

    #[test]
    fn test_worked_example() {
        let detector = BayesianBlocks::default();
        let result = detector
            .segment_weighted(&[0.0, 1.0, 2.0, 3.0], &[1.0, 1.0, 1.0, 1.0])
            .unwrap();
        assert_eq!(result.edges(), &[0.0, 3.0]);
        assert_eq!(result.block_starts(), &[0, 4]);
        assert_eq!(result.last(), &[0, 0, 0, 0]);
        assert_eq!(result.block_count(), 1);
        assert!((result.ncp_prior() - (-4.9701)).abs() < 1e-4);
    }

    #[test]
    fn test_single_position() {
        let result = BayesianBlocks::default()
            .segment_weighted(&[2.5], &[7.0])
            .unwrap();
        assert_eq!(result.edges(), &[2.5, 2.5]);
        assert_eq!(result.block_count(), 1);
        assert!(result.best().is_empty());
        let block = result.blocks().next().unwrap();
        assert_eq!(block.weight, 7.0);
    }

    #[test]
    fn test_invalid_false_positive_rate() {
        for p0 in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = BayesianBlocks::new(p0)
                .segment_weighted(&[0.0, 1.0], &[1.0, 1.0])
                .unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)), "p0 = {p0}");
        }
    }

    #[test]
    fn test_timings_only_when_requested() {
        let sample = WeightedSample::from_positions(&[0.0, 1.0, 1.0, 4.0]).unwrap();
        let plain = BayesianBlocks::default()
            .segment_sample_observed(&sample, &mut NullObserver)
            .unwrap();
        assert!(plain.timings().is_none());

        let timed = BayesianBlocks::default()
            .with_timings(true)
            .segment_sample_observed(&sample, &mut NullObserver)
            .unwrap();
        assert!(timed.timings().is_some());
        assert_eq!(timed.edges(), plain.edges());
    }

    #[test]
    fn test_configurable() {
        let mut detector = BayesianBlocks::with_parameters(BlocksParameters {
            false_positive_rate: 0.05,
            ..BlocksParameters::default()
        });
        assert_eq!(detector.parameters().false_positive_rate, 0.05);
        detector.set_parameters(BlocksParameters::default());
        assert_eq!(
            detector.parameters().false_positive_rate,
            DEFAULT_FALSE_POSITIVE_RATE
        );
        assert_eq!(detector.algorithm_name(), "BayesianBlocks");
        assert_eq!(detector.minimum_sample_size(), 1);
    }
}
