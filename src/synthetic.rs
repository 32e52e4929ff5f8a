//! Synthetic arithmetic datasets for the calculator exercise.
//!
//! ## Purpose
//!
//! This module generates the paired-integer datasets the demonstration binary
//! and the integration tests train on: `samples` pairs `(a, b)` drawn
//! uniformly from a closed integer range, with both the addition and the
//! multiplication target computed up front.
//!
//! ## Design notes
//!
//! * **Explicit Seed**: the seed is a parameter, never process-global state;
//!   the same seed yields the same dataset on every run.
//! * **std-only**: generation uses `rand`'s seeded `StdRng` and is gated
//!   behind the `std` feature; the solvers themselves never draw randomness.

use rand::prelude::*;

// External dependencies
use num_traits::Float;

// ============================================================================
// Dataset
// ============================================================================

/// Paired operands with their addition and multiplication targets.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandDataset<T: Float> {
    /// Row-major feature matrix: two columns, `(a, b)` per row.
    pub features: Vec<T>,
    /// Addition targets, `a + b` per row.
    pub sums: Vec<T>,
    /// Multiplication targets, `a * b` per row.
    pub products: Vec<T>,
}

impl<T: Float> OperandDataset<T> {
    /// Number of sample rows.
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Raw feature columns per row.
    pub const fn dimensions(&self) -> usize {
        2
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Generate `samples` integer pairs uniform in `[low, high]` (inclusive).
///
/// Both operands are drawn independently from the same seeded stream, so a
/// fixed seed reproduces the full dataset exactly.
pub fn operand_pairs<T: Float>(samples: usize, low: i32, high: i32, seed: u64) -> OperandDataset<T> {
    assert!(high >= low);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut features = Vec::with_capacity(samples * 2);
    let mut sums = Vec::with_capacity(samples);
    let mut products = Vec::with_capacity(samples);

    for _ in 0..samples {
        let a = rng.gen_range(low..=high);
        let b = rng.gen_range(low..=high);
        features.push(T::from(a).unwrap());
        features.push(T::from(b).unwrap());
        sums.push(T::from(a + b).unwrap());
        products.push(T::from(a as i64 * b as i64).unwrap());
    }

    OperandDataset {
        features,
        sums,
        products,
    }
}
