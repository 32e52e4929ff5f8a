//! High-level API for closed-form regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring regression
//! parameters and choosing an estimator (ClosedForm, Ridge, or KernelRidge).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized
//!   estimator builders.
//! * **Validated**: Parameters are validated during `build()`.
//! * **Type-Safe**: Generic over `FloatLinalg` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Estimators**: ClosedForm (plain least squares), Ridge (L2), and
//!   KernelRidge (dual form).
//! * **Configuration Flow**: Builder pattern ending in
//!   `.estimator(Estimator::Kind)`.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`OlsBuilder`] via `Ols::new()`.
//! 2. Chain configuration methods (`.dimensions()`, `.embedding()`, etc.).
//! 3. Select an estimator via `.estimator(ClosedForm)` to get a concrete
//!    builder, then `.build()` and `.fit(&x, &y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::kernel_ridge::fit_kernel_ridge;
use crate::algorithms::linear::fit_linear;
use crate::algorithms::ridge::fit_ridge;
use crate::engine::validator::Validator;
use crate::evaluation::search::CVKind;

// Publicly re-exported types
pub use crate::algorithms::embedding::FeatureEmbedding;
pub use crate::algorithms::kernel_ridge::KernelFit;
pub use crate::algorithms::linear::{LinearFit, Solver};
pub use crate::algorithms::ridge::RidgeFit;
pub use crate::evaluation::metrics::{
    mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error, Diagnostics,
};
pub use crate::evaluation::search::{CVConfig, KFold, LOOCV};
pub use crate::evaluation::split::{take_rows, take_values, train_test_split, TrainTestSplit};
pub use crate::math::kernel::Kernel;
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::errors::OlsError;

#[cfg(feature = "std")]
pub use crate::synthetic::{operand_pairs, OperandDataset};

/// Marker types for selecting estimators.
#[allow(non_snake_case)]
pub mod Estimator {
    pub use super::{ClosedForm, KernelRidge, Ridge};
}

// ============================================================================
// Generic Builder
// ============================================================================

/// Fluent builder for configuring regression parameters and estimators.
#[derive(Debug, Clone)]
pub struct OlsBuilder<T: FloatLinalg + Debug> {
    /// Raw feature columns per sample.
    pub dimensions: Option<usize>,

    /// Feature embedding applied before fitting.
    pub embedding: Option<FeatureEmbedding>,

    /// Solver path for the closed-form estimator.
    pub solver: Option<Solver>,

    /// Regularization strength (Ridge and KernelRidge).
    pub alpha: Option<T>,

    /// Candidate alphas for cross-validation (Ridge only).
    pub alpha_grid: Option<Vec<T>>,

    /// CV strategy (K-Fold/LOOCV).
    pub(crate) cv_kind: Option<CVKind>,

    /// CV seed for reproducibility.
    pub(crate) cv_seed: Option<u64>,

    /// Kernel function (KernelRidge only).
    pub kernel: Option<Kernel<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug> Default for OlsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + Debug> OlsBuilder<T> {
    /// Select an estimator to transition to a concrete builder.
    pub fn estimator<E>(self, _estimator: E) -> E::Output
    where
        E: OlsEstimator<T>,
    {
        E::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            dimensions: None,
            embedding: None,
            solver: None,
            alpha: None,
            alpha_grid: None,
            cv_kind: None,
            cv_seed: None,
            kernel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of raw feature columns per sample (default: 1).
    pub fn dimensions(mut self, dims: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dims);
        self
    }

    /// Set the feature embedding applied before fitting.
    pub fn embedding(mut self, embedding: FeatureEmbedding) -> Self {
        if self.embedding.is_some() {
            self.duplicate_param = Some("embedding");
        }
        self.embedding = Some(embedding);
        self
    }

    /// Set the solver path for the closed-form estimator.
    pub fn solver(mut self, solver: Solver) -> Self {
        if self.solver.is_some() {
            self.duplicate_param = Some("solver");
        }
        self.solver = Some(solver);
        self
    }

    /// Set the regularization strength.
    pub fn alpha(mut self, alpha: T) -> Self {
        if self.alpha.is_some() {
            self.duplicate_param = Some("alpha");
        }
        self.alpha = Some(alpha);
        self
    }

    /// Enable automatic alpha selection via cross-validation (Ridge only).
    pub fn cross_validate(mut self, config: CVConfig<'_, T>) -> Self {
        if self.alpha_grid.is_some() {
            self.duplicate_param = Some("cross_validate");
        }
        self.alpha_grid = Some(config.alphas().to_vec());
        self.cv_kind = Some(config.kind());
        self.cv_seed = config.get_seed();
        self
    }

    /// Set the kernel function (KernelRidge only).
    pub fn kernel(mut self, kernel: Kernel<T>) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }
}

/// Trait for transitioning from the generic builder to a concrete one.
pub trait OlsEstimator<T: FloatLinalg + Debug> {
    /// The output estimator builder.
    type Output;

    /// Convert a generic [`OlsBuilder`] into a concrete estimator builder.
    fn convert(builder: OlsBuilder<T>) -> Self::Output;
}

// ============================================================================
// Closed-Form Estimator
// ============================================================================

/// Marker for plain closed-form least squares.
#[derive(Debug, Clone, Copy)]
pub struct ClosedForm;

impl<T: FloatLinalg + Debug> OlsEstimator<T> for ClosedForm {
    type Output = ClosedFormBuilder<T>;

    fn convert(builder: OlsBuilder<T>) -> Self::Output {
        let mut result = ClosedFormBuilder::default();

        if let Some(dims) = builder.dimensions {
            result.dimensions = dims;
        }
        if let Some(embedding) = builder.embedding {
            result.embedding = embedding;
        }
        if let Some(solver) = builder.solver {
            result.solver = solver;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Builder for the closed-form least-squares estimator.
#[derive(Debug, Clone)]
pub struct ClosedFormBuilder<T: FloatLinalg + Debug> {
    /// Raw feature columns per sample.
    pub dimensions: usize,
    /// Feature embedding applied before fitting.
    pub embedding: FeatureEmbedding,
    /// Solver path.
    pub solver: Solver,
    /// Tracks if any parameter was set multiple times.
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
    #[doc(hidden)]
    pub _precision: PhantomData<T>,
}

impl<T: FloatLinalg + Debug> Default for ClosedFormBuilder<T> {
    fn default() -> Self {
        Self {
            dimensions: 1,
            embedding: FeatureEmbedding::Identity,
            solver: Solver::NormalEquations,
            duplicate_param: None,
            _precision: PhantomData,
        }
    }
}

impl<T: FloatLinalg + Debug> ClosedFormBuilder<T> {
    /// Validate the configuration and produce a ready-to-fit model.
    pub fn build(self) -> Result<ClosedFormModel<T>, OlsError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(OlsError::DuplicateParameter { parameter });
        }
        Validator::validate_dimensions(self.dimensions)?;

        Ok(ClosedFormModel {
            dimensions: self.dimensions,
            embedding: self.embedding,
            solver: self.solver,
            _precision: PhantomData,
        })
    }
}

/// A validated closed-form least-squares model, ready to fit.
#[derive(Debug, Clone, Copy)]
pub struct ClosedFormModel<T: FloatLinalg + Debug> {
    dimensions: usize,
    embedding: FeatureEmbedding,
    solver: Solver,
    _precision: PhantomData<T>,
}

impl<T: FloatLinalg + Debug> ClosedFormModel<T> {
    /// Fit the model to a row-major feature matrix and target vector.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<LinearFit<T>, OlsError> {
        Validator::validate_inputs(x, y, self.dimensions)?;
        fit_linear(x, y, self.dimensions, self.embedding, self.solver)
    }
}

// ============================================================================
// Ridge Estimator
// ============================================================================

/// Marker for L2-regularized (ridge) regression.
#[derive(Debug, Clone, Copy)]
pub struct Ridge;

impl<T: FloatLinalg + Debug> OlsEstimator<T> for Ridge {
    type Output = RidgeBuilder<T>;

    fn convert(builder: OlsBuilder<T>) -> Self::Output {
        let mut result = RidgeBuilder::default();

        if let Some(dims) = builder.dimensions {
            result.dimensions = dims;
        }
        if let Some(embedding) = builder.embedding {
            result.embedding = embedding;
        }
        if let Some(alpha) = builder.alpha {
            result.alpha = alpha;
        }
        if let Some(grid) = builder.alpha_grid {
            result.alpha_grid = Some(grid);
        }
        if let Some(kind) = builder.cv_kind {
            result.cv_kind = Some(kind);
        }
        result.cv_seed = builder.cv_seed;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Builder for the ridge estimator.
#[derive(Debug, Clone)]
pub struct RidgeBuilder<T: FloatLinalg + Debug> {
    /// Raw feature columns per sample.
    pub dimensions: usize,
    /// Feature embedding applied before fitting.
    pub embedding: FeatureEmbedding,
    /// Fixed regularization strength (ignored when a grid is set).
    pub alpha: T,
    /// Candidate alphas for cross-validation.
    pub alpha_grid: Option<Vec<T>>,
    /// CV strategy.
    pub(crate) cv_kind: Option<CVKind>,
    /// CV seed.
    pub(crate) cv_seed: Option<u64>,
    /// Tracks if any parameter was set multiple times.
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug> Default for RidgeBuilder<T> {
    fn default() -> Self {
        Self {
            dimensions: 1,
            embedding: FeatureEmbedding::Identity,
            alpha: T::one(),
            alpha_grid: None,
            cv_kind: None,
            cv_seed: None,
            duplicate_param: None,
        }
    }
}

impl<T: FloatLinalg + Debug> RidgeBuilder<T> {
    /// Validate the configuration and produce a ready-to-fit model.
    pub fn build(self) -> Result<RidgeModel<T>, OlsError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(OlsError::DuplicateParameter { parameter });
        }
        Validator::validate_dimensions(self.dimensions)?;
        Validator::validate_alpha(self.alpha)?;
        if let Some(grid) = &self.alpha_grid {
            Validator::validate_alpha_grid(grid)?;
        }

        Ok(RidgeModel {
            dimensions: self.dimensions,
            embedding: self.embedding,
            alpha: self.alpha,
            alpha_grid: self.alpha_grid,
            cv_kind: self.cv_kind,
            cv_seed: self.cv_seed,
        })
    }
}

/// A validated ridge model, ready to fit.
#[derive(Debug, Clone)]
pub struct RidgeModel<T: FloatLinalg + Debug> {
    dimensions: usize,
    embedding: FeatureEmbedding,
    alpha: T,
    alpha_grid: Option<Vec<T>>,
    cv_kind: Option<CVKind>,
    cv_seed: Option<u64>,
}

impl<T: FloatLinalg + Debug> RidgeModel<T> {
    /// Fit the model, selecting alpha by cross-validation when a grid was
    /// configured.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<RidgeFit<T>, OlsError> {
        Validator::validate_inputs(x, y, self.dimensions)?;

        if let (Some(grid), Some(kind)) = (&self.alpha_grid, self.cv_kind) {
            let (best_alpha, scores) =
                kind.select_alpha(x, y, self.dimensions, self.embedding, grid, self.cv_seed);
            let model = fit_ridge(x, y, self.dimensions, self.embedding, best_alpha)?;
            return Ok(RidgeFit {
                model,
                alpha: best_alpha,
                cv_scores: Some(scores),
            });
        }

        let model = fit_ridge(x, y, self.dimensions, self.embedding, self.alpha)?;
        Ok(RidgeFit {
            model,
            alpha: self.alpha,
            cv_scores: None,
        })
    }
}

// ============================================================================
// Kernel Ridge Estimator
// ============================================================================

/// Marker for kernel ridge regression.
#[derive(Debug, Clone, Copy)]
pub struct KernelRidge;

impl<T: FloatLinalg + Debug> OlsEstimator<T> for KernelRidge {
    type Output = KernelRidgeBuilder<T>;

    fn convert(builder: OlsBuilder<T>) -> Self::Output {
        let mut result = KernelRidgeBuilder::default();

        if let Some(dims) = builder.dimensions {
            result.dimensions = dims;
        }
        if let Some(alpha) = builder.alpha {
            result.alpha = alpha;
        }
        if let Some(kernel) = builder.kernel {
            result.kernel = kernel;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Builder for the kernel ridge estimator.
#[derive(Debug, Clone)]
pub struct KernelRidgeBuilder<T: FloatLinalg + Debug> {
    /// Raw feature columns per sample.
    pub dimensions: usize,
    /// Regularization strength.
    pub alpha: T,
    /// Kernel function.
    pub kernel: Kernel<T>,
    /// Tracks if any parameter was set multiple times.
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug> Default for KernelRidgeBuilder<T> {
    fn default() -> Self {
        Self {
            dimensions: 1,
            alpha: T::one(),
            kernel: Kernel::Linear,
            duplicate_param: None,
        }
    }
}

impl<T: FloatLinalg + Debug> KernelRidgeBuilder<T> {
    /// Validate the configuration and produce a ready-to-fit model.
    pub fn build(self) -> Result<KernelRidgeModel<T>, OlsError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(OlsError::DuplicateParameter { parameter });
        }
        Validator::validate_dimensions(self.dimensions)?;
        Validator::validate_alpha(self.alpha)?;
        Validator::validate_kernel(&self.kernel)?;

        Ok(KernelRidgeModel {
            dimensions: self.dimensions,
            alpha: self.alpha,
            kernel: self.kernel,
        })
    }
}

/// A validated kernel ridge model, ready to fit.
#[derive(Debug, Clone)]
pub struct KernelRidgeModel<T: FloatLinalg + Debug> {
    dimensions: usize,
    alpha: T,
    kernel: Kernel<T>,
}

impl<T: FloatLinalg + Debug> KernelRidgeModel<T> {
    /// Fit the model to a row-major feature matrix and target vector.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<KernelFit<T>, OlsError> {
        Validator::validate_inputs(x, y, self.dimensions)?;
        fit_kernel_ridge(x, y, self.dimensions, self.kernel, self.alpha)
    }
}
