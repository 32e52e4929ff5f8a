//! Fit-quality metrics.
//!
//! ## Purpose
//!
//! This module provides the error metrics used to compare model variants:
//! mean squared error, its root, mean absolute error, and the coefficient of
//! determination (R²).
//!
//! ## Invariants
//!
//! * All metrics are pure and deterministic.
//! * `actual` and `predicted` must have equal, non-zero length; metrics over
//!   empty inputs return zero rather than dividing by it.
//!
//! ## Non-goals
//!
//! * This module does not perform fitting or validation of inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// ============================================================================
// Metric Functions
// ============================================================================

/// Mean squared error between targets and predictions.
pub fn mean_squared_error<T: Float>(actual: &[T], predicted: &[T]) -> T {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return T::zero();
    }
    let mut acc = T::zero();
    for (&a, &p) in actual.iter().zip(predicted.iter()) {
        let err = a - p;
        acc = acc + err * err;
    }
    acc / T::from(n).unwrap()
}

/// Root mean squared error.
pub fn root_mean_squared_error<T: Float>(actual: &[T], predicted: &[T]) -> T {
    mean_squared_error(actual, predicted).sqrt()
}

/// Mean absolute error.
pub fn mean_absolute_error<T: Float>(actual: &[T], predicted: &[T]) -> T {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return T::zero();
    }
    let mut acc = T::zero();
    for (&a, &p) in actual.iter().zip(predicted.iter()) {
        acc = acc + (a - p).abs();
    }
    acc / T::from(n).unwrap()
}

/// Coefficient of determination: `1 - SS_res / SS_tot`.
///
/// A constant target has zero variance to explain; the score is then 1 for
/// an exact fit and 0 otherwise.
pub fn r2_score<T: Float>(actual: &[T], predicted: &[T]) -> T {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return T::zero();
    }
    let n_t = T::from(n).unwrap();
    let mean = actual.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;

    let mut ss_res = T::zero();
    let mut ss_tot = T::zero();
    for (&a, &p) in actual.iter().zip(predicted.iter()) {
        let res = a - p;
        let dev = a - mean;
        ss_res = ss_res + res * res;
        ss_tot = ss_tot + dev * dev;
    }

    if ss_tot == T::zero() {
        return if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        };
    }
    T::one() - ss_res / ss_tot
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Bundle of fit-quality metrics for one prediction set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T: Float> {
    /// Mean squared error.
    pub mse: T,
    /// Root mean squared error.
    pub rmse: T,
    /// Mean absolute error.
    pub mae: T,
    /// Coefficient of determination.
    pub r2: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute all metrics for one (targets, predictions) pair.
    pub fn compute(actual: &[T], predicted: &[T]) -> Self {
        Self {
            mse: mean_squared_error(actual, predicted),
            rmse: root_mean_squared_error(actual, predicted),
            mae: mean_absolute_error(actual, predicted),
            r2: r2_score(actual, predicted),
        }
    }

    /// Residuals `actual - predicted`, in input order.
    pub fn residuals(actual: &[T], predicted: &[T]) -> Vec<T> {
        actual
            .iter()
            .zip(predicted.iter())
            .map(|(&a, &p)| a - p)
            .collect()
    }
}

impl<T: Float + fmt::Display> fmt::Display for Diagnostics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  MSE:  {:.10}", self.mse)?;
        writeln!(f, "  RMSE: {:.6}", self.rmse)?;
        writeln!(f, "  MAE:  {:.6}", self.mae)?;
        write!(f, "  R^2:  {:.10}", self.r2)
    }
}
