//! Core traits for block segmentation
//!
//! The two entry points are kept as separately named operations: the strict
//! weighted one rejects repeated positions, the positions-only one folds them
//! into counts. There is no hidden mode flag switching between the two.

use crate::types::BlocksResult;
use blocks_core::Result;

/// Properties of a segmenter that don't depend on the input
pub trait ChangePointDetectorProperties {
    /// Get the name of the segmentation algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum number of unique positions required
    fn minimum_sample_size(&self) -> usize;
}

/// Optimal piecewise-constant segmentation of weighted events
pub trait BlockSegmenter: ChangePointDetectorProperties {
    /// Segment positions with explicit, strictly positive weights.
    ///
    /// Positions must be distinct.
    fn segment_weighted(&self, positions: &[f64], weights: &[f64]) -> Result<BlocksResult>;

    /// Segment bare positions; repeated values become integer weights.
    fn segment_positions(&self, positions: &[f64]) -> Result<BlocksResult>;
}

/// Parameter access for configurable segmenters
pub trait ConfigurableDetector {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Self;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters);
}
