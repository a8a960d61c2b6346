//! Histograms with Bayesian Blocks binning
//!
//! This crate provides a small variable-width histogram type, builders that
//! choose bin edges from a sample, and operations that rebin an existing
//! histogram using Bayesian Blocks.
//!
//! # Key Features
//!
//! - **Adaptive binning**: [`BayesianBlocksBuilder`] places edges where the
//!   event rate changes
//! - **Rebinning**: [`rebin`] turns a fine histogram into one with optimal
//!   variable-width bins, carrying underflow and overflow over
//! - **Reusable edges**: [`rebin_with_edges`] applies edges computed once to
//!   further histograms
//!
//! # Examples
//!
//! ## Adaptive Bins
//!
//! ```rust
//! use blocks_histogram::{BayesianBlocksBuilder, HistogramBuilder};
//!
//! let data = vec![0.0, 1.0, 2.0, 3.0];
//! let histogram = BayesianBlocksBuilder::new(0.01).build(&data).unwrap();
//!
//! // Evenly spaced data is a single block
//! assert_eq!(histogram.edges(), vec![0.0, 3.0]);
//! assert_eq!(histogram.contents(), vec![4.0]);
//! ```
//!
//! ## Rebinning a Histogram
//!
//! ```rust
//! use blocks_histogram::{fixed_histogram, rebin, scale_by_width, NonIntegerContents};
//! use blocks_changepoint::BlocksParameters;
//!
//! let mut data: Vec<f64> = (0..50).map(|i| i as f64).collect();
//! data.extend((0..200).map(|i| 20.0 + 0.05 * i as f64));
//!
//! let fine = fixed_histogram(&data, 100).unwrap();
//! let coarse = rebin(&fine, &BlocksParameters::default(), NonIntegerContents::Reject).unwrap();
//! assert!(coarse.len() < fine.len());
//! assert_eq!(coarse.total_content(), fine.total_content());
//!
//! // Per-unit-width densities for plotting
//! let density = scale_by_width(&coarse);
//! println!("{density}");
//! ```

pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{BayesianBlocksBuilder, FixedWidthBuilder};
pub use ops::{rebin, rebin_with_edges, scale_by_width, NonIntegerContents};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use blocks_core::Result;

// Convenience functions
/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Create a histogram with Bayesian Blocks edges
pub fn bayesian_blocks_histogram(data: &[f64], false_positive_rate: f64) -> Result<Histogram> {
    BayesianBlocksBuilder::new(false_positive_rate).build(data)
}
