//! # ols-rs — Closed-Form Linear Regression with Explicit Feature Embeddings
//!
//! A small, dependency-light regression crate built around the closed-form
//! (normal equations) solution to linear least squares, with ridge and
//! kernel ridge estimators and explicit feature embeddings for linearizing
//! non-linear targets.
//!
//! ## Why explicit embeddings?
//!
//! A linear model can represent `f(a, b) = a + b` exactly — the target is a
//! linear combination of the inputs. It cannot represent `g(a, b) = a * b`,
//! no matter how it is regularized: the interaction between `a` and `b` is
//! outside the hypothesis space. There are two classic ways out:
//!
//! 1. **Embed explicitly**: map `(a, b) → (a, b, a·b)`. The target is now an
//!    exact linear function of the new features, and the ordinary solver
//!    recovers it — coefficients `[0, 0, 1]`, intercept `0`.
//! 2. **Kernelize**: a degree-2 polynomial kernel spans the same product
//!    terms implicitly, at the cost of a dual-form solve.
//!
//! This crate implements both, next to each other, so the equivalence is
//! easy to demonstrate. The bundled `calculator` binary walks through the
//! whole exercise on synthetic integer data.
//!
//! ## Quick Start
//!
//! ### Learning addition (exactly linear)
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! // Row-major pairs (a, b) and targets a + b
//! let x: Vec<f64> = vec![1.0, 2.0, 3.0, 5.0, 2.0, 7.0, 4.0, 1.0];
//! let y = vec![3.0, 8.0, 9.0, 5.0];
//!
//! let model = Ols::new()
//!     .dimensions(2)
//!     .estimator(ClosedForm)
//!     .build()?;
//!
//! let fit = model.fit(&x, &y)?;
//!
//! // The true weights are recovered: w = [1, 1], b = 0
//! assert!((fit.predict_one(&[25.0, 17.0])? - 42.0).abs() < 1e-6);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ### Learning multiplication (linear only after embedding)
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! let x: Vec<f64> = vec![
//!     1.0, 2.0, 3.0, 5.0, 2.0, 7.0, //
//!     4.0, 1.0, 5.0, 3.0, 6.0, 2.0,
//! ];
//! let products = vec![2.0, 15.0, 14.0, 4.0, 15.0, 12.0];
//!
//! let model = Ols::new()
//!     .dimensions(2)
//!     .embedding(Interaction) // (a, b) -> (a, b, a*b)
//!     .estimator(ClosedForm)
//!     .build()?;
//!
//! let fit = model.fit(&x, &products)?;
//!
//! assert!((fit.predict_one(&[25.0, 17.0])? - 425.0).abs() < 1e-6);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ### Ridge with cross-validated alpha
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 5.0, 2.0, 7.0, 4.0, 1.0, 5.0, 3.0, 6.0, 2.0];
//! let y = vec![3.0, 8.0, 9.0, 5.0, 8.0, 8.0];
//!
//! let alphas = [0.001, 0.01, 0.1, 1.0, 10.0];
//! let model = Ols::new()
//!     .dimensions(2)
//!     .cross_validate(KFold(3, &alphas).seed(42))
//!     .estimator(Ridge)
//!     .build()?;
//!
//! let fit = model.fit(&x, &y)?;
//! assert!(alphas.contains(&fit.alpha));
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter          | Default          | Range/Options                      | Estimator            |
//! |--------------------|------------------|------------------------------------|----------------------|
//! | **dimensions**     | 1                | [1, ∞)                             | All                  |
//! | **embedding**      | `Identity`       | `Identity`, `Interaction`, `Quadratic` | ClosedForm, Ridge |
//! | **solver**         | `NormalEquations`| `NormalEquations`, `Svd`           | ClosedForm           |
//! | **alpha**          | 1.0              | [0, ∞)                             | Ridge, KernelRidge   |
//! | **cross_validate** | None             | `KFold(k, &alphas)`, `LOOCV(&alphas)` | Ridge             |
//! | **kernel**         | `Linear`         | `Linear`, `Polynomial`             | KernelRidge          |
//!
//! ## Result and Error Handling
//!
//! Every `build` and `fit` returns `Result<_, OlsError>`; the `?` operator
//! is idiomatic. The one numerically interesting failure is
//! `OlsError::NumericalSingularity`:
//! the normal-equations path refuses to fit a design whose columns are
//! collinear or constant, rather than silently returning one of the
//! infinitely many solutions. The `Svd` solver path returns the
//! minimum-norm solution instead, matching the behavior of `lstsq`-style
//! libraries.
//!
//! ## Minimal Usage (no_std)
//!
//! The solvers, embeddings, metrics, and splitting run without the standard
//! library (an allocator is required). Disable default features to drop
//! `std`; this removes only the `rand`-backed synthetic dataset generator:
//!
//! ```toml
//! [dependencies]
//! ols-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Hastie, T., Tibshirani, R. & Friedman, J. (2009). "The Elements of
//!   Statistical Learning", ch. 3 (linear methods) and ch. 5 (kernels).
//! - Golub, G. H. & Van Loan, C. F. (2013). "Matrix Computations" (QR and
//!   SVD least squares).

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the nalgebra linear algebra bridge (QR square solves, SVD least
// squares) and kernel functions.
mod math;

// Layer 3: Algorithms - the estimators.
//
// Contains feature embeddings, the closed-form linear solver, ridge, and
// kernel ridge.
mod algorithms;

// Layer 4: Evaluation - metrics, splitting, and alpha search.
mod evaluation;

// Layer 5: Engine - parameter and input validation.
mod engine;

// High-level fluent API.
//
// Provides the `Ols` builder for configuring and fitting estimators.
mod api;

// Std-only: synthetic arithmetic datasets for the calculator exercise.
#[cfg(feature = "std")]
mod synthetic;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use ols_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error, take_rows,
        take_values, train_test_split, Diagnostics,
        Estimator::{ClosedForm, KernelRidge, Ridge},
        FeatureEmbedding::{Identity, Interaction, Quadratic},
        KFold, Kernel, KernelFit, LinearFit, OlsBuilder as Ols, OlsError, RidgeFit,
        Solver::{NormalEquations, Svd},
        TrainTestSplit, LOOCV,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{operand_pairs, OperandDataset};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation tools.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
