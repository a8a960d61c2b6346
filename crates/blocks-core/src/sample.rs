//! Validated, sorted, weighted samples
//!
//! Every segmentation starts from a [`WeightedSample`]: positions strictly
//! increasing, weights strictly positive, at least one point. The type can only
//! be built through the two checked constructors below, so downstream code never
//! has to re-check these invariants.
//!
//! - [`WeightedSample::from_weighted`] is the strict path: duplicate positions
//!   are an error.
//! - [`WeightedSample::from_positions`] is the aggregating path: duplicates are
//!   folded into integer weights.

use crate::utils::prefix_sums;
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use tracing::trace;

/// A sorted sample of unique positions with strictly positive weights
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSample {
    positions: Vec<f64>,
    weights: Vec<f64>,
}

/// Check a raw (position, weight) sample without sorting it.
///
/// Checks run in a fixed order: lengths, emptiness, weights, then positions.
/// Duplicate positions are not checked here since they are only an error for
/// the strict entry point.
pub fn validate(positions: &[f64], weights: &[f64]) -> Result<()> {
    if positions.len() != weights.len() {
        return Err(Error::size_mismatch(positions.len(), weights.len()));
    }
    if positions.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| w.is_nan() || **w <= 0.0)
    {
        return Err(Error::InvalidWeight { index, value });
    }
    check_finite_positions(positions)
}

fn check_finite_positions(positions: &[f64]) -> Result<()> {
    match positions.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(Error::NonFinitePosition { index }),
        None => Ok(()),
    }
}

impl WeightedSample {
    /// Build a sample from explicit positions and weights.
    ///
    /// The input may be in any order; it is sorted by position with weights
    /// carried along. Fails with [`Error::DuplicatePosition`] when two positions
    /// compare equal.
    pub fn from_weighted(positions: &[f64], weights: &[f64]) -> Result<Self> {
        validate(positions, weights)?;

        let mut pairs: Vec<(f64, f64)> = positions
            .iter()
            .copied()
            .zip(weights.iter().copied())
            .collect();
        // Positions are finite here, so total ordering equals numeric ordering
        // except that -0.0 sorts directly before 0.0, which the scan below catches
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(pair) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(Error::DuplicatePosition { value: pair[1].0 });
        }

        let (positions, weights) = pairs.into_iter().unzip();
        Ok(Self { positions, weights })
    }

    /// Build a sample from bare positions, turning repeated values into counts.
    ///
    /// Order of the input is irrelevant. Each unique value gets a weight equal
    /// to its number of occurrences.
    pub fn from_positions(positions: &[f64]) -> Result<Self> {
        if positions.is_empty() {
            return Err(Error::EmptyInput);
        }
        check_finite_positions(positions)?;

        let mut counts: BTreeMap<OrderedFloat<f64>, f64> = BTreeMap::new();
        for &x in positions {
            *counts.entry(OrderedFloat(x)).or_insert(0.0) += 1.0;
        }
        trace!(
            "aggregated {} positions into {} unique values",
            positions.len(),
            counts.len()
        );

        let (positions, weights) = counts.into_iter().map(|(x, c)| (x.0, c)).unzip();
        Ok(Self { positions, weights })
    }

    /// Sorted, strictly increasing positions
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Weights aligned with [`positions`](Self::positions)
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of unique positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Smallest position
    pub fn min(&self) -> f64 {
        self.positions[0]
    }

    /// Largest position
    pub fn max(&self) -> f64 {
        self.positions[self.positions.len() - 1]
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Cumulative weights, `cum[0] = 0` and `cum[i + 1] = cum[i] + w[i]`
    pub fn cumulative_weights(&self) -> Vec<f64> {
        prefix_sums(&self.weights)
    }

    /// Iterate over `(position, weight)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.weights.iter().copied())
    }

    /// Split into owned position and weight vectors
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.positions, self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_order() {
        // Length is checked before emptiness or weights
        assert!(matches!(
            validate(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(Error::LengthMismatch { positions: 3, weights: 2 })
        ));
        assert!(matches!(validate(&[], &[]), Err(Error::EmptyInput)));
        assert!(matches!(
            validate(&[1.0, 2.0], &[1.0, 0.0]),
            Err(Error::InvalidWeight { index: 1, .. })
        ));
        assert!(matches!(
            validate(&[1.0, 2.0], &[-3.0, 1.0]),
            Err(Error::InvalidWeight { index: 0, .. })
        ));
        assert!(matches!(
            validate(&[1.0, 2.0], &[1.0, f64::NAN]),
            Err(Error::InvalidWeight { index: 1, .. })
        ));
        assert!(matches!(
            validate(&[1.0, f64::INFINITY], &[1.0, 1.0]),
            Err(Error::NonFinitePosition { index: 1 })
        ));
    }

    #[test]
    fn test_from_weighted_sorts_and_carries_weights() {
        let sample = WeightedSample::from_weighted(&[3.0, 1.0, 2.0], &[30.0, 10.0, 20.0]).unwrap();
        assert_eq!(sample.positions(), &[1.0, 2.0, 3.0]);
        assert_eq!(sample.weights(), &[10.0, 20.0, 30.0]);
        assert_eq!(sample.min(), 1.0);
        assert_eq!(sample.max(), 3.0);
        assert_eq!(sample.total_weight(), 60.0);
    }

    #[test]
    fn test_from_weighted_rejects_duplicates() {
        assert!(matches!(
            WeightedSample::from_weighted(&[1.0, 1.0], &[1.0, 1.0]),
            Err(Error::DuplicatePosition { value }) if value == 1.0
        ));
        // Duplicates need not be adjacent in the input
        assert!(matches!(
            WeightedSample::from_weighted(&[2.0, 5.0, 2.0], &[1.0, 1.0, 1.0]),
            Err(Error::DuplicatePosition { .. })
        ));
        // Signed zeros compare equal
        assert!(matches!(
            WeightedSample::from_weighted(&[0.0, -0.0], &[1.0, 1.0]),
            Err(Error::DuplicatePosition { .. })
        ));
    }

    #[test]
    fn test_from_positions_aggregates() {
        let sample = WeightedSample::from_positions(&[2.0, 1.0, 2.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(sample.positions(), &[1.0, 2.0, 3.0]);
        assert_eq!(sample.weights(), &[2.0, 3.0, 1.0]);
        assert_eq!(sample.total_weight(), 6.0);
    }

    #[test]
    fn test_from_positions_rejects_bad_input() {
        assert!(matches!(WeightedSample::from_positions(&[]), Err(Error::EmptyInput)));
        assert!(matches!(
            WeightedSample::from_positions(&[1.0, f64::NAN]),
            Err(Error::NonFinitePosition { index: 1 })
        ));
    }

    #[test]
    fn test_cumulative_weights() {
        let sample = WeightedSample::from_weighted(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(sample.cumulative_weights(), vec![0.0, 1.0, 3.0, 6.0]);
    }
}
