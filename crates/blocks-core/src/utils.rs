//! Utility functions for working with data slices

/// Cumulative sums with a leading zero
///
/// The returned vector has `data.len() + 1` entries so that the sum of
/// `data[r..=k]` is `cum[k + 1] - cum[r]`. Summation runs strictly left to
/// right, which keeps range sums reproducible between calls.
///
/// # Examples
///
/// ```rust
/// use blocks_core::utils::prefix_sums;
///
/// let cum = prefix_sums(&[1.0, 2.0, 3.0]);
/// assert_eq!(cum, vec![0.0, 1.0, 3.0, 6.0]);
/// assert_eq!(cum[3] - cum[1], 5.0);
/// ```
pub fn prefix_sums(data: &[f64]) -> Vec<f64> {
    let mut cum = Vec::with_capacity(data.len() + 1);
    let mut acc = 0.0;
    cum.push(acc);
    for &x in data {
        acc += x;
        cum.push(acc);
    }
    cum
}

/// Check that a slice is strictly increasing
///
/// Empty and single-element slices are trivially increasing. NaN never
/// compares greater, so any NaN makes the check fail.
///
/// # Examples
///
/// ```rust
/// use blocks_core::utils::is_strictly_increasing;
///
/// assert!(is_strictly_increasing(&[0.0, 0.5, 2.0]));
/// assert!(!is_strictly_increasing(&[0.0, 0.0, 2.0]));
/// ```
pub fn is_strictly_increasing(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[1] > w[0])
}

/// Position of the first maximum in a slice
///
/// Scans left to right and only replaces the running maximum on a strictly
/// greater value, so the smallest index wins ties. Returns `None` for an
/// empty slice. NaN entries are never selected unless the slice starts with one.
///
/// # Examples
///
/// ```rust
/// use blocks_core::utils::first_argmax;
///
/// assert_eq!(first_argmax(&[1.0, 3.0, 3.0, 2.0]), Some((1, 3.0)));
/// assert_eq!(first_argmax(&[]), None);
/// ```
pub fn first_argmax(data: &[f64]) -> Option<(usize, f64)> {
    let (&first, rest) = data.split_first()?;
    let mut best = (0, first);
    for (i, &x) in rest.iter().enumerate() {
        if x > best.1 {
            best = (i + 1, x);
        }
    }
    Some(best)
}
