//! Kernel ridge regression in dual form.
//!
//! ## Purpose
//!
//! This module implements kernel ridge regression: instead of expanding
//! features explicitly, it solves `(K + αI) a = y` over the kernel Gram
//! matrix and predicts with `ŷ(q) = Σᵢ aᵢ k(xᵢ, q)`. With a degree-2
//! polynomial kernel the induced feature space contains every pairwise
//! product, so a multiplicative target becomes learnable without ever
//! materializing the interaction column.
//!
//! ## Design notes
//!
//! * **Dual Form**: one coefficient per training sample; the fitted model
//!   keeps a copy of the training features for prediction.
//! * **No Intercept**: the constant term, when wanted, comes from the
//!   kernel's `coef0`.
//! * **Cost**: fitting is O(n²) memory and an n×n solve; suited to the
//!   dataset sizes this crate targets, not to large-scale training.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::kernel::Kernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::OlsError;

// ============================================================================
// Fitted Model
// ============================================================================

/// A fitted kernel ridge model.
///
/// Holds the dual coefficients and the training features they refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelFit<T: FloatLinalg> {
    /// One dual coefficient per training sample.
    pub dual_coefficients: Vec<T>,
    /// Row-major copy of the training features.
    train_features: Vec<T>,
    /// Raw features per sample.
    dimensions: usize,
    /// Kernel used at fit time, reused for prediction.
    kernel: Kernel<T>,
}

impl<T: FloatLinalg> KernelFit<T> {
    /// Raw features per sample expected by `predict`.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Predict targets for a row-major feature matrix.
    pub fn predict(&self, x: &[T]) -> Result<Vec<T>, OlsError> {
        if self.dimensions == 0 || x.len() % self.dimensions != 0 {
            return Err(OlsError::DimensionMismatch {
                expected: self.dimensions,
                got: x.len(),
            });
        }

        let default_gamma = default_gamma::<T>(self.dimensions);
        let mut predictions = Vec::with_capacity(x.len() / self.dimensions);

        for query in x.chunks_exact(self.dimensions) {
            let mut acc = T::zero();
            for (train_row, &dual) in self
                .train_features
                .chunks_exact(self.dimensions)
                .zip(self.dual_coefficients.iter())
            {
                acc = acc + dual * self.kernel.compute(train_row, query, default_gamma);
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

// ============================================================================
// Fitting
// ============================================================================

/// Fit a kernel ridge model: solve `(K + αI) a = y`.
///
/// The caller has already validated lengths, finiteness, `alpha`, and the
/// kernel parameters.
pub fn fit_kernel_ridge<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    dimensions: usize,
    kernel: Kernel<T>,
    alpha: T,
) -> Result<KernelFit<T>, OlsError> {
    let n = y.len();
    if n < 2 {
        return Err(OlsError::TooFewPoints { got: n, min: 2 });
    }

    let default_gamma = default_gamma::<T>(dimensions);

    // Gram matrix, symmetric: compute the lower triangle and mirror.
    let mut gram = vec![T::zero(); n * n];
    for i in 0..n {
        let row_i = &x[i * dimensions..(i + 1) * dimensions];
        for j in 0..=i {
            let row_j = &x[j * dimensions..(j + 1) * dimensions];
            let value = kernel.compute(row_i, row_j, default_gamma);
            gram[i * n + j] = value;
            gram[j * n + i] = value;
        }
        gram[i * n + i] = gram[i * n + i] + alpha;
    }

    let dual_coefficients = T::solve_square(&gram, y, n).ok_or(OlsError::NumericalSingularity)?;

    Ok(KernelFit {
        dual_coefficients,
        train_features: x.to_vec(),
        dimensions,
        kernel,
    })
}

/// The `1 / dimensions` gamma fallback used when none is configured.
#[inline]
fn default_gamma<T: FloatLinalg>(dimensions: usize) -> T {
    T::one() / T::from(dimensions.max(1)).unwrap()
}
