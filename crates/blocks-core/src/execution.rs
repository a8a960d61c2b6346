//! Execution strategy for the per-prefix candidate search
//!
//! The outer loop of the segmentation recursion is inherently sequential. The
//! inner search over candidate block starts is a pure reduction and may be
//! evaluated in parallel when the `parallel` feature is enabled. Whatever the
//! strategy, the maximum is always selected by a sequential scan so results
//! are identical bit for bit.

use serde::{Deserialize, Serialize};

/// Minimum number of candidates before [`ExecutionStrategy::Auto`] goes parallel
pub const AUTO_PARALLEL_THRESHOLD: usize = 4096;

/// Execution strategy for candidate scoring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// Score candidates sequentially
    #[default]
    Sequential,
    /// Score candidates in parallel (falls back to sequential without the
    /// `parallel` feature)
    Parallel,
    /// Go parallel once a prefix has enough candidates
    Auto,
}

impl ExecutionStrategy {
    /// Whether scoring `candidates` start positions should run in parallel
    pub fn use_parallel(&self, candidates: usize) -> bool {
        if !parallel_available() {
            return false;
        }
        match self {
            Self::Sequential => false,
            Self::Parallel => candidates > 1,
            Self::Auto => candidates >= AUTO_PARALLEL_THRESHOLD,
        }
    }
}

/// Whether the crate was built with parallel support
pub fn parallel_available() -> bool {
    cfg!(feature = "parallel")
}

/// Number of worker threads available to parallel scoring
pub fn num_threads() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_never_parallel() {
        assert!(!ExecutionStrategy::Sequential.use_parallel(1_000_000));
        assert!(!ExecutionStrategy::default().use_parallel(1_000_000));
    }

    #[test]
    fn test_auto_threshold() {
        assert!(!ExecutionStrategy::Auto.use_parallel(AUTO_PARALLEL_THRESHOLD - 1));
        assert_eq!(
            ExecutionStrategy::Auto.use_parallel(AUTO_PARALLEL_THRESHOLD),
            parallel_available()
        );
    }

    #[test]
    fn test_thread_count() {
        assert!(num_threads() >= 1);
        if !parallel_available() {
            assert_eq!(num_threads(), 1);
        }
    }
}
