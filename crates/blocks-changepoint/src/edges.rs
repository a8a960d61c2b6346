//! Candidate block boundaries
//!
//! N sorted unique positions define N elementary cells. Cell `i` spans
//! `[edge[i], edge[i + 1])` where the inner edges sit halfway between
//! neighbouring positions and the outer edges are the extreme positions
//! themselves.

use blocks_core::utils::is_strictly_increasing;
use blocks_core::{Error, Result, WeightedSample};

/// The N + 1 boundaries of the N elementary cells of a sample
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdges {
    edges: Vec<f64>,
}

impl CellEdges {
    /// Build cell edges from sorted, strictly increasing positions
    ///
    /// A single position yields the degenerate pair `[x, x]`.
    pub fn from_positions(sorted_positions: &[f64]) -> Result<Self> {
        let n = sorted_positions.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let mut edges = Vec::with_capacity(n + 1);
        edges.push(sorted_positions[0]);
        // Halving before adding keeps midpoints of huge positions finite
        edges.extend(
            sorted_positions
                .windows(2)
                .map(|w| 0.5 * w[0] + 0.5 * w[1]),
        );
        edges.push(sorted_positions[n - 1]);

        if n > 1 && !is_strictly_increasing(&edges) {
            return Err(Error::Invariant(
                "cell edges are not strictly increasing".to_string(),
            ));
        }
        // Every block width is bounded by the total span
        if !(edges[n] - edges[0]).is_finite() {
            return Err(Error::Invariant(format!(
                "span of cell edges [{}, {}] overflows",
                edges[0], edges[n]
            )));
        }

        Ok(Self { edges })
    }

    /// Build cell edges for a validated sample
    pub fn from_sample(sample: &WeightedSample) -> Result<Self> {
        Self::from_positions(sample.positions())
    }

    /// Number of cells (one less than the number of edges)
    pub fn cells(&self) -> usize {
        self.edges.len() - 1
    }

    /// All edges in increasing order
    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// Width of the block made of cells `first..=last`
    #[inline]
    pub fn block_width(&self, first: usize, last: usize) -> f64 {
        self.edges[last + 1] - self.edges[first]
    }

    /// Map block-start cell indices to edge values
    ///
    /// Indices must lie in `0..=cells()`.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<f64>> {
        indices
            .iter()
            .map(|&i| {
                self.edges.get(i).copied().ok_or_else(|| {
                    Error::Invariant(format!(
                        "cell index {i} outside edge table of length {}",
                        self.edges.len()
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_midpoints() {
        let edges = CellEdges::from_positions(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(edges.as_slice(), &[0.0, 0.5, 1.5, 2.5, 3.0]);
        assert_eq!(edges.cells(), 4);
        assert_eq!(edges.block_width(0, 3), 3.0);
        assert_eq!(edges.block_width(1, 2), 2.0);
    }

    #[test]
    fn test_uneven_spacing() {
        let edges = CellEdges::from_positions(&[-2.0, 0.0, 10.0]).unwrap();
        assert_eq!(edges.as_slice(), &[-2.0, -1.0, 5.0, 10.0]);
    }

    #[test]
    fn test_single_position() {
        let edges = CellEdges::from_positions(&[4.2]).unwrap();
        assert_eq!(edges.as_slice(), &[4.2, 4.2]);
        assert_eq!(edges.cells(), 1);
    }

    #[test]
    fn test_rejects_empty_and_unsorted() {
        assert!(matches!(CellEdges::from_positions(&[]), Err(Error::EmptyInput)));
        assert!(matches!(
            CellEdges::from_positions(&[1.0, 1.0]),
            Err(Error::Invariant(_))
        ));
    }

    #[test]
    fn test_huge_positions_have_finite_midpoints() {
        let edges = CellEdges::from_positions(&[1e308, 1.5e308]).unwrap();
        let mid = edges.as_slice()[1];
        assert!(mid.is_finite() && mid > 1e308 && mid < 1.5e308);
        assert!((mid / 1.25e308 - 1.0).abs() < 1e-15);
        assert!(edges.block_width(0, 1).is_finite());
    }

    #[test]
    fn test_overflowing_span_rejected() {
        let result = CellEdges::from_positions(&[-1e308, 0.0, 1e308]);
        assert!(matches!(result, Err(Error::Invariant(_))));
        let result = CellEdges::from_positions(&[-f64::MAX, f64::MAX]);
        assert!(matches!(result, Err(Error::Invariant(_))));
    }

    #[test]
    fn test_select() {
        let edges = CellEdges::from_positions(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(edges.select(&[0, 2, 4]).unwrap(), vec![0.0, 1.5, 3.0]);
        assert!(matches!(edges.select(&[0, 5]), Err(Error::Invariant(_))));
    }
}
