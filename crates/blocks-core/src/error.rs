//! Error types for Bayesian Blocks segmentation
//!
//! Provides a unified error type for all blocks-* crates.

use thiserror::Error;

/// Core error type for segmentation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Positions and weights have different lengths
    #[error("Length mismatch: {positions} positions but {weights} weights")]
    LengthMismatch { positions: usize, weights: usize },

    /// No samples were supplied
    #[error("Empty input: at least one sample is required")]
    EmptyInput,

    /// A weight is zero, negative or NaN
    #[error("Invalid weight {value} at index {index}: weights must be strictly positive")]
    InvalidWeight { index: usize, value: f64 },

    /// A repeated position reached the weighted entry point
    #[error("Duplicate position {value}: weighted samples require distinct positions")]
    DuplicatePosition { value: f64 },

    /// A position is NaN or infinite
    #[error("Non-finite position at index {index}")]
    NonFinitePosition { index: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data that is not a sample (edges, histogram layout)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal numeric invariant violated; indicates a validation gap
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for mismatched position/weight lengths
    pub fn size_mismatch(positions: usize, weights: usize) -> Self {
        Self::LengthMismatch { positions, weights }
    }

    /// Create an error for an out-of-range false-positive rate
    pub fn invalid_false_positive_rate(p0: f64) -> Self {
        Self::InvalidParameter(format!(
            "false positive rate {p0} must be finite and strictly positive"
        ))
    }

    /// Create an invariant error for NaN/Inf values produced by a computation
    pub fn non_finite(context: &str) -> Self {
        Self::Invariant(format!("{context} produced NaN or infinite values"))
    }

    /// Whether this error was raised by input validation (as opposed to an
    /// internal failure)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::EmptyInput
                | Self::InvalidWeight { .. }
                | Self::DuplicatePosition { .. }
                | Self::NonFinitePosition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LengthMismatch { positions: 3, weights: 2 };
        assert_eq!(err.to_string(), "Length mismatch: 3 positions but 2 weights");

        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "Empty input: at least one sample is required");

        let err = Error::InvalidWeight { index: 1, value: 0.0 };
        assert_eq!(
            err.to_string(),
            "Invalid weight 0 at index 1: weights must be strictly positive"
        );

        let err = Error::DuplicatePosition { value: 1.5 };
        assert_eq!(
            err.to_string(),
            "Duplicate position 1.5: weighted samples require distinct positions"
        );

        let err = Error::NonFinitePosition { index: 4 };
        assert_eq!(err.to_string(), "Non-finite position at index 4");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::size_mismatch(10, 7) {
            Error::LengthMismatch { positions, weights } => {
                assert_eq!(positions, 10);
                assert_eq!(weights, 7);
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        let err = Error::invalid_false_positive_rate(-0.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: false positive rate -0.5 must be finite and strictly positive"
        );

        let err = Error::non_finite("block fitness");
        assert_eq!(
            err.to_string(),
            "Invariant violated: block fitness produced NaN or infinite values"
        );
    }

    #[test]
    fn test_validation_classification() {
        assert!(Error::EmptyInput.is_validation());
        assert!(Error::DuplicatePosition { value: 0.0 }.is_validation());
        assert!(!Error::Invariant("x".to_string()).is_validation());
        assert!(!Error::InvalidParameter("p0".to_string()).is_validation());
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
