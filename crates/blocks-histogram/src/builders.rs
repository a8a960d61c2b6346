//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::Histogram;
use blocks_changepoint::{BayesianBlocks, BlockSegmenter, BlocksParameters, ConfigurableDetector};
use blocks_core::{Error, Result};
use tracing::debug;

/// Range of a non-empty sample, rejecting NaN and infinities
fn finite_range(sample: &[f64]) -> Result<(f64, f64)> {
    if sample.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
        return Err(Error::NonFinitePosition { index });
    }
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

/// Unit-width bin around `value`, for samples with a single distinct value
fn degenerate_edges(value: f64) -> [f64; 2] {
    [value - 0.5, value + 0.5]
}

fn fill_unit(hist: &mut Histogram, sample: &[f64]) -> Result<()> {
    for &value in sample {
        hist.fill(value, 1.0)?;
    }
    Ok(())
}

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// the sample range.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let (min, max) = finite_range(sample)?;

        let mut hist = if min == max {
            Histogram::with_edges(&degenerate_edges(min))?
        } else {
            let width = (max - min) / self.num_bins as f64;
            let mut edges: Vec<f64> = (0..self.num_bins)
                .map(|i| min + i as f64 * width)
                .collect();
            // Ensure last bin includes max
            edges.push(max);
            Histogram::with_edges(&edges)?
        };

        fill_unit(&mut hist, sample)?;
        Ok(hist)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Adaptive histogram builder using Bayesian Blocks edges
///
/// Repeated sample values are counted, so the edges are those of the
/// aggregating segmentation of the sample.
#[derive(Debug, Clone, Default)]
pub struct BayesianBlocksBuilder {
    detector: BayesianBlocks,
}

impl BayesianBlocksBuilder {
    /// Create a builder with the given false positive rate
    pub fn new(false_positive_rate: f64) -> Self {
        Self {
            detector: BayesianBlocks::new(false_positive_rate),
        }
    }

    /// Create a builder from full segmentation parameters
    pub fn with_parameters(params: BlocksParameters) -> Self {
        Self {
            detector: BayesianBlocks::with_parameters(params),
        }
    }

    /// Segmentation parameters in use
    pub fn parameters(&self) -> &BlocksParameters {
        self.detector.parameters()
    }

    /// Build a histogram from positions with explicit weights
    ///
    /// Positions must be distinct, as for [`BlockSegmenter::segment_weighted`].
    pub fn build_weighted(&self, positions: &[f64], weights: &[f64]) -> Result<Histogram> {
        let result = self.detector.segment_weighted(positions, weights)?;
        let mut hist = self.empty_histogram(result.edges())?;
        for (&value, &weight) in positions.iter().zip(weights) {
            hist.fill(value, weight)?;
        }
        Ok(hist)
    }

    fn empty_histogram(&self, edges: &[f64]) -> Result<Histogram> {
        debug!(bins = edges.len() - 1, "bayesian blocks edges computed");
        if edges.len() == 2 && edges[0] == edges[1] {
            Histogram::with_edges(&degenerate_edges(edges[0]))
        } else {
            Histogram::with_edges(edges)
        }
    }
}

impl HistogramBuilder for BayesianBlocksBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let result = self.detector.segment_positions(sample)?;
        let mut hist = self.empty_histogram(result.edges())?;
        fill_unit(&mut hist, sample)?;
        Ok(hist)
    }
}
