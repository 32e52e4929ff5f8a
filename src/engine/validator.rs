//! Input validation for model configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for estimator parameters and
//! input data. It checks requirements such as input lengths, finite values,
//! and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the fitting itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::Kernel;
use crate::primitives::errors::OlsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimator configuration and input data.
///
/// Provides static methods returning `Result<(), OlsError>` that fail fast
/// upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate feature and target arrays for fitting.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        dimensions: usize,
    ) -> Result<(), OlsError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(OlsError::EmptyInput);
        }

        // Check 2: Matching lengths (x.len() should be y.len() * dimensions)
        let n_y = y.len();
        if x.len() != n_y * dimensions {
            return Err(OlsError::MismatchedInputs {
                x_len: x.len(),
                y_len: n_y,
            });
        }

        // Check 3: Sufficient points for any regression at all
        if n_y < 2 {
            return Err(OlsError::TooFewPoints { got: n_y, min: 2 });
        }

        // Check 4: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of feature dimensions.
    pub fn validate_dimensions(dimensions: usize) -> Result<(), OlsError> {
        if dimensions == 0 {
            return Err(OlsError::InvalidDimensions(dimensions));
        }
        Ok(())
    }

    /// Validate a regularization strength.
    pub fn validate_alpha<T: Float>(alpha: T) -> Result<(), OlsError> {
        if !alpha.is_finite() || alpha < T::zero() {
            return Err(OlsError::InvalidAlpha(alpha.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a candidate grid of regularization strengths.
    pub fn validate_alpha_grid<T: Float>(alphas: &[T]) -> Result<(), OlsError> {
        if alphas.is_empty() {
            return Err(OlsError::EmptyAlphaGrid);
        }
        for &alpha in alphas {
            Self::validate_alpha(alpha)?;
        }
        Ok(())
    }

    /// Validate kernel parameters.
    pub fn validate_kernel<T: Float>(kernel: &Kernel<T>) -> Result<(), OlsError> {
        match *kernel {
            Kernel::Linear => Ok(()),
            Kernel::Polynomial {
                degree,
                gamma,
                coef0,
            } => {
                if degree == 0 {
                    return Err(OlsError::InvalidKernelDegree(degree));
                }
                if let Some(g) = gamma {
                    if !g.is_finite() || g <= T::zero() {
                        return Err(OlsError::InvalidGamma(g.to_f64().unwrap_or(f64::NAN)));
                    }
                }
                if !coef0.is_finite() {
                    return Err(OlsError::InvalidNumericValue(format!(
                        "coef0={}",
                        coef0.to_f64().unwrap_or(f64::NAN)
                    )));
                }
                Ok(())
            }
        }
    }
}
