//! Train/test splitting with explicit seeding.
//!
//! ## Purpose
//!
//! This module partitions sample indices into disjoint train and test sets.
//! The shuffle seed is an explicit parameter — reproducibility never depends
//! on process-global random state.
//!
//! ## Invariants
//!
//! * Train and test index sets are disjoint and together cover `0..n`.
//! * The test set holds `ceil(n * test_fraction)` indices.
//! * The same `(n, fraction, seed)` triple always produces the same split.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::rng::shuffle_indices;
use crate::primitives::errors::OlsError;

// ============================================================================
// Train/Test Split
// ============================================================================

/// Disjoint train/test index sets over `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    /// Indices of the training rows.
    pub train_indices: Vec<usize>,
    /// Indices of the held-out rows.
    pub test_indices: Vec<usize>,
}

/// Split `n` samples into train and test index sets.
///
/// With `seed = None` the split is the unshuffled head/tail partition, which
/// is mainly useful in tests; pass a seed for a randomized split.
pub fn train_test_split<T: Float>(
    n: usize,
    test_fraction: T,
    seed: Option<u64>,
) -> Result<TrainTestSplit, OlsError> {
    let fraction = test_fraction.to_f64().unwrap_or(f64::NAN);
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(OlsError::InvalidTestFraction(fraction));
    }

    let n_test = (n as f64 * fraction).ceil() as usize;
    if n == 0 || n_test >= n {
        return Err(OlsError::TooFewPoints { got: n, min: 2 });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    if let Some(s) = seed {
        shuffle_indices(&mut indices, s);
    }

    let test_indices = indices.split_off(n - n_test);
    Ok(TrainTestSplit {
        train_indices: indices,
        test_indices,
    })
}

/// Gather rows of a row-major matrix by index.
pub fn take_rows<T: Float>(x: &[T], dimensions: usize, indices: &[usize]) -> Vec<T> {
    let mut out = Vec::with_capacity(indices.len() * dimensions);
    for &i in indices {
        out.extend_from_slice(&x[i * dimensions..(i + 1) * dimensions]);
    }
    out
}

/// Gather entries of a target vector by index.
pub fn take_values<T: Float>(y: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| y[i]).collect()
}
