//! Types used for Bayesian Blocks segmentation results

use std::fmt;
use std::time::Duration;

/// Phases of a segmentation run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Edge construction, prefix sums and prior calibration
    Init,
    /// The O(N²) dynamic program
    Recursion,
    /// Backtracking and edge selection
    Backtrack,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Init => write!(f, "init"),
            Phase::Recursion => write!(f, "recursion"),
            Phase::Backtrack => write!(f, "backtrack"),
        }
    }
}

/// Wall-clock time spent in each phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub init: Duration,
    pub recursion: Duration,
    pub backtrack: Duration,
}

impl PhaseTimings {
    /// Record the duration of one phase
    pub fn record(&mut self, phase: Phase, elapsed: Duration) {
        match phase {
            Phase::Init => self.init = elapsed,
            Phase::Recursion => self.recursion = elapsed,
            Phase::Backtrack => self.backtrack = elapsed,
        }
    }

    /// Sum of all phases
    pub fn total(&self) -> Duration {
        self.init + self.recursion + self.backtrack
    }
}

impl fmt::Display for PhaseTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "init: {:?}, recursion: {:?}, backtrack: {:?}",
            self.init, self.recursion, self.backtrack
        )
    }
}

/// One block of the optimal partition
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Left edge of the block
    pub left: f64,
    /// Right edge of the block
    pub right: f64,
    /// Total weight of the cells in this block
    pub weight: f64,
    /// Index of the first cell
    pub first_cell: usize,
    /// Number of cells merged into this block
    pub cells: usize,
}

impl Block {
    /// Width of the block
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): weight={}, cells={}",
            self.left, self.right, self.weight, self.cells
        )
    }
}

/// Result of a Bayesian Blocks segmentation
#[derive(Debug, Clone)]
pub struct BlocksResult {
    edges: Vec<f64>,
    block_starts: Vec<usize>,
    block_weights: Vec<f64>,
    best: Vec<f64>,
    last: Vec<usize>,
    ncp_prior: f64,
    sample_size: usize,
    timings: Option<PhaseTimings>,
}

impl BlocksResult {
    /// Assemble a result; `block_starts` and `edges` must have equal length
    /// and `block_weights` one entry less.
    pub(crate) fn new(
        edges: Vec<f64>,
        block_starts: Vec<usize>,
        block_weights: Vec<f64>,
        best: Vec<f64>,
        last: Vec<usize>,
        ncp_prior: f64,
        sample_size: usize,
    ) -> Self {
        Self {
            edges,
            block_starts,
            block_weights,
            best,
            last,
            ncp_prior,
            sample_size,
            timings: None,
        }
    }

    pub(crate) fn with_timings(mut self, timings: PhaseTimings) -> Self {
        self.timings = Some(timings);
        self
    }

    /// Block edges, always starting at the smallest and ending at the largest
    /// position
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Consume the result and keep only the edges
    pub fn into_edges(self) -> Vec<f64> {
        self.edges
    }

    /// Cell index at which each edge sits (`0` first, number of cells last)
    pub fn block_starts(&self) -> &[usize] {
        &self.block_starts
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// Number of internal change points
    pub fn change_point_count(&self) -> usize {
        self.block_count() - 1
    }

    /// Optimal fitness of every prefix of cells
    ///
    /// Empty for a single-cell sample, where no recursion is run.
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// First cell of the final block in each prefix optimum
    ///
    /// Empty for a single-cell sample.
    pub fn last(&self) -> &[usize] {
        &self.last
    }

    /// Fitness of the optimal partition of the whole sample
    pub fn fitness(&self) -> Option<f64> {
        self.best.last().copied()
    }

    /// The change point prior used
    pub fn ncp_prior(&self) -> f64 {
        self.ncp_prior
    }

    /// Number of unique positions (cells) that were segmented
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Phase timings, when collection was enabled
    pub fn timings(&self) -> Option<&PhaseTimings> {
        self.timings.as_ref()
    }

    /// The blocks of the optimal partition, left to right
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        (0..self.block_count()).map(move |i| Block {
            left: self.edges[i],
            right: self.edges[i + 1],
            weight: self.block_weights[i],
            first_cell: self.block_starts[i],
            cells: self.block_starts[i + 1] - self.block_starts[i],
        })
    }
}

impl fmt::Display for BlocksResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BayesianBlocks({} blocks over {} cells, ncp_prior={:.4})",
            self.block_count(),
            self.sample_size,
            self.ncp_prior
        )
    }
}
