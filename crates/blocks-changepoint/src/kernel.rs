//! Block fitness kernel
//!
//! Scores a candidate block with the Cash statistic (the Poisson
//! log-likelihood of a constant rate over the block, up to a constant) and
//! charges a calibrated prior penalty per change point.

use blocks_core::{Error, Result};

/// Scargle's empirical calibration of the change point prior
///
/// `ncp_prior = ln(73.53 * p0 * n^-0.478) - 4`
///
/// Larger `p0` or smaller `n` gives a weaker (less negative) penalty and
/// therefore more blocks.
pub fn ncp_prior(false_positive_rate: f64, cells: usize) -> f64 {
    (73.53 * false_positive_rate * (cells as f64).powf(-0.478)).ln() - 4.0
}

/// Cash statistic `count * ln(count / width)`
#[inline]
pub fn cash(count: f64, width: f64) -> f64 {
    count * (count / width).ln()
}

/// Fitness kernel combining the Cash statistic with a fixed change point prior
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CashKernel {
    ncp_prior: f64,
}

impl CashKernel {
    /// Kernel with the prior calibrated for `cells` cells at rate `p0`
    pub fn calibrated(false_positive_rate: f64, cells: usize) -> Result<Self> {
        if !(false_positive_rate.is_finite() && false_positive_rate > 0.0) {
            return Err(Error::invalid_false_positive_rate(false_positive_rate));
        }
        if cells == 0 {
            return Err(Error::EmptyInput);
        }
        Ok(Self::with_prior(ncp_prior(false_positive_rate, cells)))
    }

    /// Kernel with an explicit prior penalty
    pub fn with_prior(ncp_prior: f64) -> Self {
        Self { ncp_prior }
    }

    /// The per-block prior penalty
    pub fn ncp_prior(&self) -> f64 {
        self.ncp_prior
    }

    /// Fitness of a single block holding `count` weight over `width`
    #[inline]
    pub fn block_fitness(&self, count: f64, width: f64) -> f64 {
        cash(count, width) + self.ncp_prior
    }
}
