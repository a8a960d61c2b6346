//! Core types for histogram representation

use blocks_core::{Error, Result};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Sum of the weights filled into this bin
    pub content: f64,
}

impl HistogramBin {
    /// Create an empty bin
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            content: 0.0,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin (half-open)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }

    /// Content per unit width
    pub fn density(&self) -> f64 {
        let width = self.width();
        if width > 0.0 {
            self.content / width
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): content={}, density={:.3}",
            self.left,
            self.right,
            self.content,
            self.density()
        )
    }
}

/// A one-dimensional histogram with variable-width bins
///
/// Bins are contiguous. Values below the first edge land in the underflow,
/// values above the last edge in the overflow. The last bin includes its
/// right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    underflow: f64,
    overflow: f64,
}

impl Histogram {
    /// Create an empty histogram from strictly increasing, finite edges
    pub fn with_edges(edges: &[f64]) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "a histogram needs at least 2 edges, got {}",
                edges.len()
            )));
        }
        if let Some(index) = edges.iter().position(|e| !e.is_finite()) {
            return Err(Error::InvalidInput(format!("edge {index} is not finite")));
        }
        if let Some(index) = edges.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::InvalidInput(format!(
                "edges must be strictly increasing: edge {} = {} >= edge {} = {}",
                index,
                edges[index],
                index + 1,
                edges[index + 1]
            )));
        }

        let bins = edges
            .windows(2)
            .map(|w| HistogramBin::new(w[0], w[1]))
            .collect();
        Ok(Self {
            bins,
            underflow: 0.0,
            overflow: 0.0,
        })
    }

    /// Add `weight` at `value`
    pub fn fill(&mut self, value: f64, weight: f64) -> Result<()> {
        if value.is_nan() {
            return Err(Error::InvalidInput("cannot fill NaN".to_string()));
        }
        if !weight.is_finite() {
            return Err(Error::InvalidInput(format!(
                "fill weight {weight} is not finite"
            )));
        }
        self.accumulate(value, weight);
        Ok(())
    }

    /// Add `amount` to whichever bin (or under/overflow) holds `value`
    pub(crate) fn accumulate(&mut self, value: f64, amount: f64) {
        match self.find_bin(value) {
            Some(index) => self.bins[index].content += amount,
            None if value < self.min() => self.underflow += amount,
            None => self.overflow += amount,
        }
    }

    pub(crate) fn set_underflow(&mut self, content: f64) {
        self.underflow = content;
    }

    pub(crate) fn set_overflow(&mut self, content: f64) {
        self.overflow = content;
    }

    pub(crate) fn bins_mut(&mut self) -> &mut [HistogramBin] {
        &mut self.bins
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Lower edge of the first bin
    pub fn min(&self) -> f64 {
        self.bins[0].left
    }

    /// Upper edge of the last bin
    pub fn max(&self) -> f64 {
        self.bins[self.bins.len() - 1].right
    }

    /// Content below the first edge
    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    /// Content above the last edge
    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Sum of in-range bin contents (under/overflow excluded)
    pub fn total_content(&self) -> f64 {
        self.bins.iter().map(|bin| bin.content).sum()
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if value.is_nan() || value < self.min() || value > self.max() {
            return None;
        }
        // Last bin includes the right boundary
        let index = self.bins.partition_point(|bin| bin.right <= value);
        Some(index.min(self.bins.len() - 1))
    }

    /// Get bin contents as a vector
    pub fn contents(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.content).collect()
    }

    /// Get densities (content / width) as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::density).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::center).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.left).collect();
        edges.push(self.max());
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, content={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_content(),
            self.min(),
            self.max()
        )
    }
}
