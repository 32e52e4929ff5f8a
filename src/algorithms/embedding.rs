//! Explicit feature embeddings for linearizing non-linear targets.
//!
//! ## Purpose
//!
//! This module defines [`FeatureEmbedding`], a fixed, deterministic expansion
//! of the raw feature space. A target that is non-linear in the raw features
//! (multiplication being the canonical case) can become exactly linear in the
//! expanded space: `a * b` is not a linear combination of `(a, b)`, but it is
//! of `(a, b, a*b)`.
//!
//! ## Design notes
//!
//! * **Shape-Preserving**: Row count and row order are preserved exactly.
//! * **Total**: Embeddings are pure functions with no failure modes.
//! * **Column Layout**: Raw columns come first, expansion terms after, so a
//!   fitted coefficient vector reads naturally against the input.
//!
//! ## Invariants
//!
//! * `embed(x, d).len() == (x.len() / d) * output_dimensions(d)`.
//! * `Identity` is the no-op embedding: output equals input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Feature Embedding
// ============================================================================

/// Deterministic feature-space expansion applied before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureEmbedding {
    /// Keep the raw features unchanged.
    #[default]
    Identity,

    /// Append all pairwise interaction products `x_i * x_j` (i < j).
    ///
    /// For two raw columns this is the `(a, b) -> (a, b, a*b)` map.
    Interaction,

    /// Append squares and pairwise products (all degree-2 monomials).
    Quadratic,
}

impl FeatureEmbedding {
    /// Number of output columns for `dimensions` raw columns.
    #[inline]
    pub const fn output_dimensions(&self, dimensions: usize) -> usize {
        match self {
            FeatureEmbedding::Identity => dimensions,
            FeatureEmbedding::Interaction => {
                dimensions + dimensions * (dimensions.saturating_sub(1)) / 2
            }
            FeatureEmbedding::Quadratic => dimensions + dimensions * (dimensions + 1) / 2,
        }
    }

    /// Embed a row-major feature matrix, preserving row count and order.
    ///
    /// `x.len()` must be a multiple of `dimensions`; the caller validates.
    pub fn embed<T: Float>(&self, x: &[T], dimensions: usize) -> Vec<T> {
        if matches!(self, FeatureEmbedding::Identity) {
            return x.to_vec();
        }

        let rows = x.len() / dimensions;
        let out_dims = self.output_dimensions(dimensions);
        let mut out = Vec::with_capacity(rows * out_dims);

        for row in x.chunks_exact(dimensions) {
            self.embed_row(row, &mut out);
        }
        out
    }

    /// Append the expansion of a single row to `out`.
    fn embed_row<T: Float>(&self, row: &[T], out: &mut Vec<T>) {
        // Raw columns first
        out.extend_from_slice(row);

        let d = row.len();
        match self {
            FeatureEmbedding::Identity => {}
            FeatureEmbedding::Interaction => {
                for i in 0..d {
                    for j in (i + 1)..d {
                        out.push(row[i] * row[j]);
                    }
                }
            }
            FeatureEmbedding::Quadratic => {
                for i in 0..d {
                    for j in i..d {
                        out.push(row[i] * row[j]);
                    }
                }
            }
        }
    }
}
