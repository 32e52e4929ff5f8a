//! Closed-form ridge (L2-regularized) regression.
//!
//! ## Purpose
//!
//! This module implements ridge regression in closed form:
//! `coef = (XcᵀXc + αI)⁻¹ Xcᵀyc` over centered data, QR-solved rather than
//! inverted. Centering keeps the intercept out of the penalty, so
//! `intercept = ȳ − x̄·coef`.
//!
//! ## Key concepts
//!
//! * **Shrinkage**: α > 0 biases coefficients toward zero; α = 0 reduces to
//!   ordinary least squares.
//! * **Still Linear**: regularization does not change the hypothesis space —
//!   a ridge model cannot capture an interaction the raw features lack.
//!
//! ## Invariants
//!
//! * For α > 0 the regularized system is positive definite and the solve
//!   succeeds for any finite input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::embedding::FeatureEmbedding;
use crate::algorithms::linear::LinearFit;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::OlsError;

// ============================================================================
// Fitted Model
// ============================================================================

/// Outcome of a ridge fit, including how its alpha was chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeFit<T: FloatLinalg> {
    /// The fitted linear model.
    pub model: LinearFit<T>,
    /// The regularization strength that was used.
    pub alpha: T,
    /// Mean per-fold RMSE for each candidate, when alpha came from
    /// cross-validation; `None` for a fixed alpha.
    pub cv_scores: Option<Vec<T>>,
}

impl<T: FloatLinalg> RidgeFit<T> {
    /// Predict targets for a row-major feature matrix.
    pub fn predict(&self, x: &[T]) -> Result<Vec<T>, OlsError> {
        self.model.predict(x)
    }

    /// Predict the target for a single sample.
    pub fn predict_one(&self, sample: &[T]) -> Result<T, OlsError> {
        self.model.predict_one(sample)
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a ridge model with regularization strength `alpha`.
///
/// `x` is row-major with `dimensions` raw columns. The caller has already
/// validated lengths, finiteness, and `alpha`.
pub fn fit_ridge<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    dimensions: usize,
    embedding: FeatureEmbedding,
    alpha: T,
) -> Result<LinearFit<T>, OlsError> {
    let n = y.len();
    let embedded = embedding.embed(x, dimensions);
    let k = embedding.output_dimensions(dimensions);

    if n < 2 {
        return Err(OlsError::TooFewPoints { got: n, min: 2 });
    }

    // Column means of the embedded design and the target mean.
    let n_t = T::from(n).unwrap();
    let mut col_means = vec![T::zero(); k];
    for row in embedded.chunks_exact(k) {
        for (mean, &value) in col_means.iter_mut().zip(row.iter()) {
            *mean = *mean + value;
        }
    }
    for mean in col_means.iter_mut() {
        *mean = *mean / n_t;
    }
    let y_mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;

    // Accumulate XcᵀXc (+ αI on the diagonal) and Xcᵀyc over centered rows.
    let mut gram = vec![T::zero(); k * k];
    let mut rhs = vec![T::zero(); k];
    let mut centered_row = vec![T::zero(); k];

    for (row, &target) in embedded.chunks_exact(k).zip(y.iter()) {
        for (c, (&value, &mean)) in row.iter().zip(col_means.iter()).enumerate() {
            centered_row[c] = value - mean;
        }
        let yc = target - y_mean;
        for i in 0..k {
            rhs[i] = rhs[i] + centered_row[i] * yc;
            for j in 0..=i {
                gram[i * k + j] = gram[i * k + j] + centered_row[i] * centered_row[j];
            }
        }
    }
    for i in 0..k {
        gram[i * k + i] = gram[i * k + i] + alpha;
        for j in (i + 1)..k {
            gram[i * k + j] = gram[j * k + i];
        }
    }

    let coefficients = T::solve_square(&gram, &rhs, k).ok_or(OlsError::NumericalSingularity)?;

    let intercept = y_mean
        - coefficients
            .iter()
            .zip(col_means.iter())
            .fold(T::zero(), |acc, (&c, &m)| acc + c * m);

    Ok(LinearFit {
        coefficients,
        intercept,
        embedding,
        dimensions,
    })
}
