//! Exact Bayesian Blocks segmentation
//!
//! Finds the optimal partition of a set of weighted event positions into
//! contiguous blocks of constant rate. The fitness of a block is the Cash
//! statistic of its weight and width; each additional block is penalized by
//! a prior calibrated from a false positive rate.
//!
//! # Pipeline
//!
//! 1. [`WeightedSample`](blocks_core::WeightedSample): validated, sorted, unique
//!    positions with positive weights
//! 2. [`CellEdges`]: Voronoi cell boundaries between consecutive positions
//! 3. [`CashKernel`]: block fitness with a calibrated change point prior
//! 4. [`optimal_partition`]: the O(N²) recursion producing `best` and `last`
//! 5. [`block_starts`]: backtracking from the last cell
//!
//! # Usage
//!
//! ```rust
//! use blocks_changepoint::{segment, segment_weighted};
//!
//! // Four evenly spaced events form a single block
//! let edges = segment_weighted(&[0.0, 1.0, 2.0, 3.0], &[1.0; 4], 0.01).unwrap();
//! assert_eq!(edges, vec![0.0, 3.0]);
//!
//! // Repeated positions are folded into counts
//! let edges = segment(&[5.0, 1.0, 1.0, 3.0], 0.01).unwrap();
//! assert_eq!(edges.first(), Some(&1.0));
//! assert_eq!(edges.last(), Some(&5.0));
//! ```
//!
//! For progress reporting, timings or the full dynamic programming tables use
//! [`BayesianBlocks`] directly.

pub mod backtrack;
pub mod bayesian_blocks;
pub mod edges;
pub mod kernel;
pub mod observer;
pub mod segmenter;
pub mod traits;
pub mod types;

pub use backtrack::{block_starts, block_weights};
pub use bayesian_blocks::{BayesianBlocks, BlocksParameters, DEFAULT_FALSE_POSITIVE_RATE};
pub use edges::CellEdges;
pub use kernel::{cash, ncp_prior, CashKernel};
pub use observer::{NullObserver, SegmentationObserver, TracingObserver};
pub use segmenter::{optimal_partition, PartitionTables};
pub use traits::{BlockSegmenter, ChangePointDetectorProperties, ConfigurableDetector};
pub use types::{Block, BlocksResult, Phase, PhaseTimings};

use blocks_core::Result;

/// Block edges for positions with explicit weights
///
/// Positions must be distinct and finite, weights strictly positive. The
/// result starts at the smallest and ends at the largest position.
pub fn segment_weighted(positions: &[f64], weights: &[f64], false_positive_rate: f64) -> Result<Vec<f64>> {
    BayesianBlocks::new(false_positive_rate)
        .segment_weighted(positions, weights)
        .map(BlocksResult::into_edges)
}

/// Block edges for bare positions, counting repeated values
pub fn segment(positions: &[f64], false_positive_rate: f64) -> Result<Vec<f64>> {
    BayesianBlocks::new(false_positive_rate)
        .segment_positions(positions)
        .map(BlocksResult::into_edges)
}
