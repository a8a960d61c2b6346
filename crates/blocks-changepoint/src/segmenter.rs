//! The optimal partition recursion
//!
//! For every prefix of cells `0..=k` the recursion finds the best partition by
//! trying each cell `r` as the start of the final block:
//!
//! ```text
//! score(r) = fitness(W[r..=k], edge[k+1] - edge[r]) + best[r-1]   (best[-1] = 0)
//! best[k]  = max_r score(r)
//! last[k]  = smallest r attaining best[k]
//! ```
//!
//! Range weights come from prefix sums, so the whole recursion is O(N²) time
//! and O(N) memory. Prefixes must be solved in increasing order; the scores of
//! one prefix are independent of each other and may be computed in parallel.

use crate::edges::CellEdges;
use crate::kernel::CashKernel;
use crate::observer::SegmentationObserver;
use blocks_core::utils::first_argmax;
use blocks_core::{Error, ExecutionStrategy, Result};

/// Dynamic programming tables of a solved recursion
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionTables {
    /// Optimal fitness of cells `0..=k`
    pub best: Vec<f64>,
    /// First cell of the final block in the optimum for cells `0..=k`
    pub last: Vec<usize>,
}

/// Solve the recursion for all prefixes
///
/// `cumulative` holds prefix sums of the cell weights (length `cells + 1`,
/// starting at zero).
pub fn optimal_partition(
    cumulative: &[f64],
    edges: &CellEdges,
    kernel: &CashKernel,
    strategy: ExecutionStrategy,
    observer: &mut dyn SegmentationObserver,
) -> Result<PartitionTables> {
    let n = edges.cells();
    if cumulative.len() != n + 1 {
        return Err(Error::Invariant(format!(
            "{} prefix sums for {} cells",
            cumulative.len(),
            n
        )));
    }

    let mut best: Vec<f64> = Vec::with_capacity(n);
    let mut last: Vec<usize> = Vec::with_capacity(n);
    let mut scores: Vec<f64> = Vec::with_capacity(n);
    let report = observer.is_enabled();

    for k in 0..n {
        score_candidates(
            &mut scores,
            k,
            cumulative,
            edges,
            kernel,
            &best,
            strategy.use_parallel(k + 1),
        );

        // A losing non-finite score would otherwise be skipped by the argmax
        if let Some(r) = scores.iter().position(|s| !s.is_finite()) {
            return Err(Error::non_finite(&format!(
                "fitness of block {r}..={k}"
            )));
        }
        let (r, value) = first_argmax(&scores)
            .ok_or_else(|| Error::Invariant(format!("no candidates for prefix {k}")))?;

        best.push(value);
        last.push(r);
        if report {
            observer.on_prefix(k, n);
        }
    }

    Ok(PartitionTables { best, last })
}

/// Fill `scores[r]` for every candidate start `r` in `0..=k`
fn score_candidates(
    scores: &mut Vec<f64>,
    k: usize,
    cumulative: &[f64],
    edges: &CellEdges,
    kernel: &CashKernel,
    best: &[f64],
    parallel: bool,
) {
    let score = |r: usize| {
        let count = cumulative[k + 1] - cumulative[r];
        let width = edges.block_width(r, k);
        let previous = if r == 0 { 0.0 } else { best[r - 1] };
        kernel.block_fitness(count, width) + previous
    };

    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            (0..k + 1).into_par_iter().map(score).collect_into_vec(scores);
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    scores.clear();
    scores.extend((0..=k).map(score));
}
