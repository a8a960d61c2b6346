//! Rebinning operations
//!
//! [`rebin`] treats the centers of non-empty bins as event positions and
//! their contents as weights, segments them, and moves every original bin's
//! content into the new bin that contains its center.

use crate::types::Histogram;
use blocks_changepoint::{BayesianBlocks, BlockSegmenter, BlocksParameters, ConfigurableDetector};
use blocks_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What to do with bin contents that are not whole numbers
///
/// The block fitness treats weights as event counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonIntegerContents {
    /// Fail with [`Error::InvalidInput`]
    #[default]
    Reject,
    /// Round to the nearest integer; bins that round to zero are skipped
    Round,
    /// Use contents as real-valued weights
    Keep,
}

/// Rebin a histogram with Bayesian Blocks edges
///
/// Empty bins are skipped, so the new edges run from the center of the first
/// non-empty bin to the center of the last one. If only one bin is non-empty
/// its original edges are kept. Underflow and overflow are carried over
/// unchanged. The result holds contents, not densities; see
/// [`scale_by_width`].
#[instrument(skip(hist, params), fields(bins = hist.len()))]
pub fn rebin(
    hist: &Histogram,
    params: &BlocksParameters,
    policy: NonIntegerContents,
) -> Result<Histogram> {
    let mut centers = Vec::new();
    let mut weights = Vec::new();
    let mut rounded = 0usize;

    for (index, bin) in hist.bins().iter().enumerate() {
        let mut content = bin.content;
        if content.fract() != 0.0 {
            match policy {
                NonIntegerContents::Reject => {
                    return Err(Error::InvalidInput(format!(
                        "bin {index} has non-integer content {content}"
                    )));
                }
                NonIntegerContents::Round => {
                    content = content.round();
                    rounded += 1;
                }
                NonIntegerContents::Keep => {}
            }
        }
        if content != 0.0 {
            centers.push(bin.center());
            weights.push(content);
        }
    }

    if rounded > 0 {
        warn!(bins = rounded, "non-integer bin contents rounded");
    }

    let edges = match centers.as_slice() {
        [] => return Err(Error::EmptyInput),
        [center] => {
            let index = hist.find_bin(*center).ok_or_else(|| {
                Error::Invariant(format!("bin center {center} outside its histogram"))
            })?;
            let bin = &hist.bins()[index];
            vec![bin.left, bin.right]
        }
        _ => BayesianBlocks::with_parameters(*params)
            .segment_weighted(&centers, &weights)?
            .into_edges(),
    };
    debug!(from = hist.len(), to = edges.len() - 1, "rebinned");

    let mut out = Histogram::with_edges(&edges)?;
    for (&center, &content) in centers.iter().zip(&weights) {
        out.accumulate(center, content);
    }
    out.set_underflow(hist.underflow());
    out.set_overflow(hist.overflow());
    Ok(out)
}

/// Rebin a histogram onto previously computed edges
///
/// Each original bin's content moves to the new bin holding its center;
/// centers outside the new range go to the underflow or overflow.
pub fn rebin_with_edges(hist: &Histogram, edges: &[f64]) -> Result<Histogram> {
    let mut out = Histogram::with_edges(edges)?;
    out.set_underflow(hist.underflow());
    out.set_overflow(hist.overflow());
    for bin in hist.bins() {
        out.accumulate(bin.center(), bin.content);
    }
    Ok(out)
}

/// Divide each bin's content by its width
///
/// Underflow and overflow have no width and are left as they are.
pub fn scale_by_width(hist: &Histogram) -> Histogram {
    let mut out = hist.clone();
    for bin in out.bins_mut() {
        bin.content = bin.density();
    }
    out
}
