//! Recover block boundaries from the `last` table

use blocks_core::{Error, Result};

/// Walk the `last` table backwards from the final cell.
///
/// Returns the cell indices at which blocks start, in increasing order,
/// followed by the total number of cells. The first element is always `0`.
pub fn block_starts(last: &[usize]) -> Result<Vec<usize>> {
    let mut starts = Vec::new();
    let mut i = last.len();
    while i != 0 {
        starts.push(i);
        let next = last[i - 1];
        if next >= i {
            return Err(Error::Invariant(format!(
                "block starting at cell {next} cannot end at cell {}",
                i - 1
            )));
        }
        i = next;
    }
    starts.push(0);
    starts.reverse();
    Ok(starts)
}

/// Sum of cell weights between consecutive block starts
pub fn block_weights(cumulative: &[f64], starts: &[usize]) -> Vec<f64> {
    starts
        .windows(2)
        .map(|w| cumulative[w[1]] - cumulative[w[0]])
        .collect()
}
