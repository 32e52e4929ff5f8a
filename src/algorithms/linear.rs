//! Closed-form linear least-squares fitting.
//!
//! ## Purpose
//!
//! This module implements the closed-form solution to linear regression:
//! augment the (optionally embedded) feature matrix with a constant column,
//! then solve for the weight vector minimizing squared error. The last
//! weight is the intercept; the rest are the coefficients.
//!
//! ## Design notes
//!
//! * **Normal Equations**: the default path forms `XᵀX` and `Xᵀy` and
//!   QR-solves the square system. A singular `XᵀX` (collinear or constant
//!   columns) fails with `NumericalSingularity`.
//! * **SVD**: the alternative path solves the rectangular system directly
//!   and returns the minimum-norm solution for rank-deficient designs.
//! * **Purity**: fitting and prediction are pure; no global state.
//!
//! ## Invariants
//!
//! * For targets that are an exact linear combination of the embedded
//!   features plus a constant, the true weights are recovered within
//!   floating-point tolerance.
//! * `predict` output length equals the number of input rows.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::embedding::FeatureEmbedding;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::OlsError;

// ============================================================================
// Solver Selection
// ============================================================================

/// Strategy for computing the least-squares solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    /// Form `XᵀX w = Xᵀy` and QR-solve the square system (closed form).
    #[default]
    NormalEquations,

    /// SVD on the augmented design matrix (minimum-norm least squares).
    Svd,
}

// ============================================================================
// Fitted Model
// ============================================================================

/// A fitted linear model: coefficients, intercept, and the embedding that
/// produced its feature space.
///
/// Immutable once computed; prediction borrows it freely.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit<T: Float> {
    /// One coefficient per (embedded) feature column.
    pub coefficients: Vec<T>,
    /// Constant offset added to every prediction.
    pub intercept: T,
    /// Embedding applied to raw inputs before the dot product.
    pub embedding: FeatureEmbedding,
    /// Raw features per sample expected by `predict`.
    pub dimensions: usize,
}

impl<T: FloatLinalg> LinearFit<T> {
    /// Predict targets for a row-major feature matrix.
    ///
    /// Applies the model's embedding, then computes `X·coef + intercept`
    /// row-wise. Pure; the input is only read.
    pub fn predict(&self, x: &[T]) -> Result<Vec<T>, OlsError> {
        if self.dimensions == 0 || x.len() % self.dimensions != 0 {
            return Err(OlsError::DimensionMismatch {
                expected: self.dimensions,
                got: x.len(),
            });
        }

        let embedded = self.embedding.embed(x, self.dimensions);
        let k = self.coefficients.len();
        let mut predictions = Vec::with_capacity(embedded.len() / k);

        for row in embedded.chunks_exact(k) {
            let mut acc = self.intercept;
            for (value, coef) in row.iter().zip(self.coefficients.iter()) {
                acc = acc + *value * *coef;
            }
            predictions.push(acc);
        }
        Ok(predictions)
    }

    /// Predict the target for a single sample.
    pub fn predict_one(&self, sample: &[T]) -> Result<T, OlsError> {
        if sample.len() != self.dimensions {
            return Err(OlsError::DimensionMismatch {
                expected: self.dimensions,
                got: sample.len(),
            });
        }
        Ok(self.predict(sample)?[0])
    }
}

impl<T: Float + fmt::Display> fmt::Display for LinearFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coefficients: [")?;
        for (i, coef) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.6}", coef)?;
        }
        writeln!(f, "]")?;
        write!(f, "Intercept:    {:.6}", self.intercept)
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a linear model by the requested solver path.
///
/// `x` is row-major with `dimensions` raw columns; `y` holds one target per
/// row. The caller has already validated lengths and finiteness.
pub fn fit_linear<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    dimensions: usize,
    embedding: FeatureEmbedding,
    solver: Solver,
) -> Result<LinearFit<T>, OlsError> {
    let n = y.len();
    let embedded = embedding.embed(x, dimensions);
    let k = embedding.output_dimensions(dimensions);

    // The augmented design has k + 1 columns (bias last); the system is
    // underdetermined below that many rows.
    if n < k + 1 {
        return Err(OlsError::TooFewPoints { got: n, min: k + 1 });
    }

    let weights = match solver {
        Solver::NormalEquations => solve_via_normal_equations(&embedded, y, k)?,
        Solver::Svd => solve_via_svd(&embedded, y, n, k)?,
    };

    let mut coefficients = weights;
    let intercept = coefficients.pop().unwrap_or_else(T::zero);

    Ok(LinearFit {
        coefficients,
        intercept,
        embedding,
        dimensions,
    })
}

/// Accumulate `XᵀX` and `Xᵀy` over the bias-augmented design and QR-solve.
fn solve_via_normal_equations<T: FloatLinalg>(
    embedded: &[T],
    y: &[T],
    k: usize,
) -> Result<Vec<T>, OlsError> {
    let aug = k + 1;
    let mut xtx = vec![T::zero(); aug * aug];
    let mut xty = vec![T::zero(); aug];

    for (row, &target) in embedded.chunks_exact(k).zip(y.iter()) {
        for i in 0..aug {
            let vi = if i < k { row[i] } else { T::one() };
            xty[i] = xty[i] + vi * target;
            // Lower triangle only; mirrored below.
            for j in 0..=i {
                let vj = if j < k { row[j] } else { T::one() };
                xtx[i * aug + j] = xtx[i * aug + j] + vi * vj;
            }
        }
    }
    for i in 0..aug {
        for j in (i + 1)..aug {
            xtx[i * aug + j] = xtx[j * aug + i];
        }
    }

    T::solve_square(&xtx, &xty, aug).ok_or(OlsError::NumericalSingularity)
}

/// Build the bias-augmented design explicitly and solve by SVD.
fn solve_via_svd<T: FloatLinalg>(
    embedded: &[T],
    y: &[T],
    n: usize,
    k: usize,
) -> Result<Vec<T>, OlsError> {
    let aug = k + 1;
    let mut design = Vec::with_capacity(n * aug);
    for row in embedded.chunks_exact(k) {
        design.extend_from_slice(row);
        design.push(T::one());
    }

    T::solve_least_squares(&design, y, n, aug).ok_or(OlsError::NumericalSingularity)
}
