//! Kernel functions for dual-form ridge regression.
//!
//! ## Purpose
//!
//! This module defines the kernel functions used by the kernel ridge
//! estimator. A kernel computes a similarity between two feature vectors;
//! the polynomial kernel implicitly spans all monomials up to its degree,
//! which is what lets a linear solver capture interaction terms such as
//! `a * b` without building them explicitly.
//!
//! ## Key concepts
//!
//! * **Linear**: `k(x, z) = <x, z>` — equivalent to plain ridge in dual form.
//! * **Polynomial**: `k(x, z) = (gamma * <x, z> + coef0)^degree`.
//! * **Gamma default**: when unset, `gamma = 1 / dimensions` at fit time.
//!
//! ## Invariants
//!
//! * Kernels are symmetric: `k(x, z) == k(z, x)`.
//! * Evaluation is pure and total over finite inputs.

// External dependencies
use num_traits::Float;

// ============================================================================
// Kernel Functions
// ============================================================================

/// Kernel function selection for the kernel ridge estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel<T: Float> {
    /// Linear kernel: the plain inner product.
    Linear,

    /// Polynomial kernel `(gamma * <x, z> + coef0)^degree`.
    Polynomial {
        /// Polynomial degree (>= 1). Degree 2 spans pairwise products.
        degree: u32,
        /// Inner-product scale; `None` defaults to `1 / dimensions`.
        gamma: Option<T>,
        /// Additive constant inside the power.
        coef0: T,
    },
}

impl<T: Float> Default for Kernel<T> {
    fn default() -> Self {
        Kernel::Linear
    }
}

impl<T: Float> Kernel<T> {
    /// A degree-`degree` polynomial kernel with `coef0 = 1` and default gamma.
    pub fn polynomial(degree: u32) -> Self {
        Kernel::Polynomial {
            degree,
            gamma: None,
            coef0: T::one(),
        }
    }

    /// Evaluate the kernel between two feature vectors of equal length.
    ///
    /// `default_gamma` is used for the polynomial kernel when no explicit
    /// gamma was configured.
    pub fn compute(&self, x: &[T], z: &[T], default_gamma: T) -> T {
        let dot = x
            .iter()
            .zip(z.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b);

        match *self {
            Kernel::Linear => dot,
            Kernel::Polynomial {
                degree,
                gamma,
                coef0,
            } => {
                let gamma = gamma.unwrap_or(default_gamma);
                let base = gamma * dot + coef0;
                powi(base, degree)
            }
        }
    }
}

/// Integer power by repeated multiplication.
///
/// Kernel degrees are tiny (2-4 in practice), so the naive product is both
/// exact and faster than a float `powf`.
#[inline]
fn powi<T: Float>(base: T, exponent: u32) -> T {
    let mut result = T::one();
    for _ in 0..exponent {
        result = result * base;
    }
    result
}
