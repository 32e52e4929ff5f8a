//! Error types for model configuration, fitting, and prediction.
//!
//! ## Purpose
//!
//! This module defines [`OlsError`], the single error enum used across the
//! crate. Every fallible operation returns `Result<_, OlsError>`.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors are raised at the first violation; no recovery.
//! * **no_std**: `Display` is implemented over `core::fmt`; the
//!   `std::error::Error` impl is feature-gated.
//! * **Stable Messages**: Display strings are part of the tested contract.
//!
//! ## Non-goals
//!
//! * This module does not wrap or translate lower-level library errors.
//! * This module does not carry backtraces or source chains.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while configuring, fitting, or evaluating a model.
#[derive(Debug, Clone, PartialEq)]
pub enum OlsError {
    /// Input arrays are empty.
    EmptyInput,

    /// Feature and target lengths are inconsistent.
    MismatchedInputs {
        /// Length of the flattened feature array.
        x_len: usize,
        /// Length of the target array.
        y_len: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the input.
    InvalidNumericValue(String),

    /// Not enough samples to determine the requested coefficients.
    TooFewPoints {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Invalid number of feature dimensions.
    InvalidDimensions(usize),

    /// Invalid regularization strength.
    InvalidAlpha(f64),

    /// The candidate grid for cross-validation is empty.
    EmptyAlphaGrid,

    /// Invalid held-out fraction for train/test splitting.
    InvalidTestFraction(f64),

    /// Invalid polynomial kernel degree.
    InvalidKernelDegree(u32),

    /// Invalid kernel scale parameter.
    InvalidGamma(f64),

    /// The normal equations matrix is singular and cannot be solved.
    NumericalSingularity,

    /// Prediction input does not match the fitted model's feature count.
    DimensionMismatch {
        /// Features per sample expected by the model.
        expected: usize,
        /// Length of the provided input array.
        got: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for OlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OlsError::EmptyInput => write!(f, "Input arrays are empty"),
            OlsError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} values, y has {}", x_len, y_len)
            }
            OlsError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            OlsError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            OlsError::InvalidDimensions(dims) => {
                write!(f, "Invalid dimensions: {} (must be at least 1)", dims)
            }
            OlsError::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha: {} (must be >= 0 and finite)", alpha)
            }
            OlsError::EmptyAlphaGrid => {
                write!(
                    f,
                    "Alpha grid is empty: cross-validation needs at least one candidate"
                )
            }
            OlsError::InvalidTestFraction(fraction) => {
                write!(
                    f,
                    "Invalid test fraction: {} (must be > 0 and < 1)",
                    fraction
                )
            }
            OlsError::InvalidKernelDegree(degree) => {
                write!(f, "Invalid kernel degree: {} (must be at least 1)", degree)
            }
            OlsError::InvalidGamma(gamma) => {
                write!(f, "Invalid gamma: {} (must be > 0 and finite)", gamma)
            }
            OlsError::NumericalSingularity => {
                write!(
                    f,
                    "Normal equations are singular: features are collinear or constant"
                )
            }
            OlsError::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "Dimension mismatch: model expects {} features per sample, input has length {}",
                    expected, got
                )
            }
            OlsError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OlsError {}
