//! Optimal adaptive binning with Bayesian Blocks
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`blocks_core`]: errors, validated samples, execution strategy
//! - [`blocks_changepoint`]: the Bayesian Blocks segmentation itself
//! - [`blocks_histogram`]: histograms built or rebinned with Bayesian Blocks
//!   edges
//!
//! ```rust
//! use bayesian_blocks::{segment, segment_weighted};
//!
//! let edges = segment_weighted(&[0.0, 1.0, 2.0, 3.0], &[1.0; 4], 0.01).unwrap();
//! assert_eq!(edges, vec![0.0, 3.0]);
//!
//! let edges = segment(&[1.0, 1.0, 1.0, 2.0], 0.01).unwrap();
//! assert_eq!(edges, vec![1.0, 2.0]);
//! ```

pub use blocks_changepoint;
pub use blocks_core;
pub use blocks_histogram;

pub use blocks_changepoint::{
    segment, segment_weighted, BayesianBlocks, BlockSegmenter, BlocksParameters, BlocksResult,
    ConfigurableDetector, SegmentationObserver, DEFAULT_FALSE_POSITIVE_RATE,
};
pub use blocks_core::{Error, ExecutionStrategy, Result, WeightedSample};
pub use blocks_histogram::{
    rebin, rebin_with_edges, scale_by_width, Histogram, HistogramBuilder, NonIntegerContents,
};
