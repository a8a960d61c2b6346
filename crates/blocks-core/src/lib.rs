//! Core types for Bayesian Blocks segmentation
//!
//! This crate holds the pieces every other blocks-* crate builds on:
//!
//! - [`Error`] and [`Result`]: the shared error taxonomy
//! - [`WeightedSample`]: validated, sorted, unique (position, weight) data
//! - [`ExecutionStrategy`]: sequential or parallel candidate scoring
//! - [`utils`]: prefix sums and the first-maximum scan used by the recursion
//!
//! # Example
//!
//! ```rust
//! use blocks_core::{Error, WeightedSample};
//!
//! // Strict path: duplicate positions are rejected
//! let err = WeightedSample::from_weighted(&[1.0, 1.0], &[1.0, 1.0]).unwrap_err();
//! assert!(matches!(err, Error::DuplicatePosition { .. }));
//!
//! // Aggregating path: duplicates become counts
//! let sample = WeightedSample::from_positions(&[1.0, 1.0, 2.0]).unwrap();
//! assert_eq!(sample.positions(), &[1.0, 2.0]);
//! assert_eq!(sample.weights(), &[2.0, 1.0]);
//! ```

pub mod error;
pub mod execution;
pub mod sample;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use execution::{parallel_available, ExecutionStrategy};
pub use sample::{validate, WeightedSample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, ExecutionStrategy, Result, WeightedSample};
}
