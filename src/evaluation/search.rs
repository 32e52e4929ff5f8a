//! Cross-validated search over ridge regularization strengths.
//!
//! ## Purpose
//!
//! This module selects the best regularization strength (alpha) for ridge
//! regression from a candidate grid, using k-fold or leave-one-out
//! cross-validation.
//!
//! ## Design notes
//!
//! * **Generic Strategy**: Supports both k-fold and leave-one-out (LOOCV).
//! * **Scoring**: Selects the alpha that minimizes mean per-fold RMSE.
//! * **Shuffling**: Fold assignment optionally shuffles indices with an
//!   explicit seed; LOOCV is deterministic and ignores the seed.
//!
//! ## Invariants
//!
//! * Training and test sets are disjoint in each fold.
//! * A candidate whose fit fails on some fold scores infinity and is never
//!   selected ahead of a candidate that fit everywhere.
//!
//! ## Non-goals
//!
//! * This module does not search over embeddings or kernel parameters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::embedding::FeatureEmbedding;
use crate::algorithms::ridge::fit_ridge;
use crate::evaluation::metrics::root_mean_squared_error;
use crate::evaluation::rng::shuffle_indices;
use crate::evaluation::split::{take_rows, take_values};
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Internal CV Kind (for storage)
// ============================================================================

/// Internal representation of the CV method for storage (no lifetime needed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CVKind {
    /// K-fold cross-validation with k folds.
    KFold(usize),
    /// Leave-one-out cross-validation.
    #[allow(clippy::upper_case_acronyms)]
    LOOCV,
}

// ============================================================================
// Cross-Validation Configuration
// ============================================================================

/// Cross-validation configuration combining strategy, candidates, and seed.
#[derive(Debug, Clone)]
pub struct CVConfig<'a, T> {
    /// The CV strategy kind.
    pub(crate) kind: CVKind,
    /// Candidate regularization strengths to evaluate.
    pub(crate) alphas: &'a [T],
    /// Random seed for reproducible fold shuffling (K-Fold only).
    pub(crate) seed: Option<u64>,
}

impl<'a, T> CVConfig<'a, T> {
    /// Set the random seed for reproducible K-Fold cross-validation.
    ///
    /// Using the same seed produces identical fold assignments across runs.
    /// LOOCV is deterministic and ignores the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the candidate slice.
    pub fn alphas(&self) -> &[T] {
        self.alphas
    }

    /// Get the CV kind for internal use.
    pub(crate) fn kind(&self) -> CVKind {
        self.kind
    }

    /// Get the seed for internal use.
    pub(crate) fn get_seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Create a K-fold cross-validation configuration.
#[allow(non_snake_case)]
pub fn KFold<T>(k: usize, alphas: &[T]) -> CVConfig<'_, T> {
    CVConfig {
        kind: CVKind::KFold(k),
        alphas,
        seed: None,
    }
}

/// Create a leave-one-out cross-validation configuration.
#[allow(non_snake_case)]
pub fn LOOCV<T>(alphas: &[T]) -> CVConfig<'_, T> {
    CVConfig {
        kind: CVKind::LOOCV,
        alphas,
        seed: None,
    }
}

// ============================================================================
// Cross-Validation Execution
// ============================================================================

impl CVKind {
    /// Run cross-validation to select the best alpha.
    ///
    /// Returns the winning alpha and the mean RMSE score per candidate.
    pub(crate) fn select_alpha<T: FloatLinalg>(
        self,
        x: &[T],
        y: &[T],
        dimensions: usize,
        embedding: FeatureEmbedding,
        alphas: &[T],
        seed: Option<u64>,
    ) -> (T, Vec<T>) {
        match self {
            CVKind::KFold(k) => {
                Self::kfold_search(x, y, dimensions, embedding, alphas, k, seed)
            }
            CVKind::LOOCV => {
                let n = y.len();
                Self::kfold_search(x, y, dimensions, embedding, alphas, n, None)
            }
        }
    }

    /// Select the best alpha based on cross-validation scores.
    fn select_best_alpha<T: FloatLinalg>(alphas: &[T], scores: &[T]) -> (T, Vec<T>) {
        if alphas.is_empty() {
            return (T::zero(), Vec::new());
        }

        let best_idx = scores
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0);

        (alphas[best_idx], scores.to_vec())
    }

    /// Perform k-fold cross-validation (LOOCV is the `k == n` case).
    fn kfold_search<T: FloatLinalg>(
        x: &[T],
        y: &[T],
        dimensions: usize,
        embedding: FeatureEmbedding,
        alphas: &[T],
        k: usize,
        seed: Option<u64>,
    ) -> (T, Vec<T>) {
        let n = y.len();
        if n < k || k < 2 {
            return (
                alphas.first().copied().unwrap_or_else(T::zero),
                vec![T::zero(); alphas.len()],
            );
        }

        let fold_size = n / k;
        let mut cv_scores = vec![T::zero(); alphas.len()];

        // Generate indices and optionally shuffle if a seed is provided
        let mut indices: Vec<usize> = (0..n).collect();
        if let Some(s) = seed {
            shuffle_indices(&mut indices, s);
        }

        for (alpha_idx, &alpha) in alphas.iter().enumerate() {
            // Store RMSE for each fold, then compute the mean
            let mut fold_rmses = Vec::with_capacity(k);
            let mut failed = false;

            for fold in 0..k {
                // Define the test range for this fold
                let test_start = fold * fold_size;
                let test_end = if fold == k - 1 {
                    n // Last fold includes the remainder
                } else {
                    (fold + 1) * fold_size
                };

                // Build train/test subsets from the (shuffled) indices
                let train_idx: Vec<usize> = indices[..test_start]
                    .iter()
                    .chain(indices[test_end..].iter())
                    .copied()
                    .collect();
                let test_idx = &indices[test_start..test_end];

                let train_x = take_rows(x, dimensions, &train_idx);
                let train_y = take_values(y, &train_idx);
                let test_x = take_rows(x, dimensions, test_idx);
                let test_y = take_values(y, test_idx);

                match fit_ridge(&train_x, &train_y, dimensions, embedding, alpha)
                    .and_then(|fit| fit.predict(&test_x))
                {
                    Ok(predictions) => {
                        fold_rmses.push(root_mean_squared_error(&test_y, &predictions));
                    }
                    Err(_) => {
                        failed = true;
                        break;
                    }
                }
            }

            cv_scores[alpha_idx] = if failed || fold_rmses.is_empty() {
                T::infinity()
            } else {
                let sum: T = fold_rmses.iter().copied().fold(T::zero(), |a, b| a + b);
                sum / T::from(fold_rmses.len()).unwrap()
            };
        }

        Self::select_best_alpha(alphas, &cv_scores)
    }
}
