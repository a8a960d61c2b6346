//! Shared utilities for integration tests

#![allow(dead_code)]

/// Samples that exercise sorting and aggregation edge cases
pub fn edge_case_positions() -> Vec<Vec<f64>> {
    vec![
        vec![0.0],                            // Single point
        vec![1.0, 1.0, 1.0],                  // All duplicates
        vec![3.0, 2.0, 1.0],                  // Reverse order
        vec![-0.0, 0.0, 1.0],                 // Signed zeros
        vec![1e-300, 1e300, -1e300],          // Extreme magnitudes
        vec![0.1, 0.2, 0.30000000000000004],  // Near-equal values
    ]
}

/// Count how often `value` occurs in `data` (exact equality)
pub fn occurrences(data: &[f64], value: f64) -> usize {
    data.iter().filter(|&&x| x == value).count()
}
