//! Linear algebra backend for closed-form regression.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the linear algebra
//! operations used by the solvers, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Square systems (normal equations, kernel systems) are solved with QR
//!   decomposition (Householder reflections) instead of literal inversion,
//!   for numerical stability.
//! * A (numerically) zero pivot on the R diagonal means the system is
//!   singular; the solve reports failure instead of falling back to a
//!   minimum-norm answer, so callers can surface the singularity.
//! * Rectangular least-squares problems are solved by SVD, which tolerates
//!   rank deficiency and returns the minimum-norm solution.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the square system A * w = b, where A is n x n column-major.
    ///
    /// Returns `None` when A is singular.
    fn solve_square(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;

    /// Solve the rectangular least-squares problem min ||X w - y||,
    /// where X is rows x cols row-major. Returns the minimum-norm solution.
    fn solve_least_squares(x: &[Self], y: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_square(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_square_f64(a, b, n)
    }
    #[inline]
    fn solve_least_squares(x: &[Self], y: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f64(x, y, rows, cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_square(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_square_f32(a, b, n)
    }
    #[inline]
    fn solve_least_squares(x: &[Self], y: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f32(x, y, rows, cols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve the square system A * w = b using f64 precision.
    ///
    /// QR-based: a pivot of R below `eps * 100 * max_pivot` is treated as
    /// zero and the system is reported singular.
    pub fn solve_square_f64(a: &[f64], b: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let qr = matrix.qr();
        let r = qr.r();

        let max_pivot = (0..n).map(|i| r[(i, i)].abs()).fold(0.0_f64, f64::max);
        if max_pivot == 0.0 {
            return None;
        }
        let tolerance = f64::EPSILON * 100.0 * max_pivot;
        for i in 0..n {
            if r[(i, i)].abs() < tolerance {
                return None;
            }
        }

        qr.solve(&rhs).map(|s| s.as_slice().to_vec())
    }

    /// Solve the least-squares problem min ||X w - y|| using f64 precision.
    pub fn solve_least_squares_f64(
        x: &[f64],
        y: &[f64],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(rows, cols, x);
        let rhs = DVector::from_column_slice(y);

        matrix
            .svd(true, true)
            .solve(&rhs, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve the square system A * w = b using f32 precision.
    pub fn solve_square_f32(a: &[f32], b: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let qr = matrix.qr();
        let r = qr.r();

        let max_pivot = (0..n).map(|i| r[(i, i)].abs()).fold(0.0_f32, f32::max);
        if max_pivot == 0.0 {
            return None;
        }
        let tolerance = f32::EPSILON * 100.0 * max_pivot;
        for i in 0..n {
            if r[(i, i)].abs() < tolerance {
                return None;
            }
        }

        qr.solve(&rhs).map(|s| s.as_slice().to_vec())
    }

    /// Solve the least-squares problem min ||X w - y|| using f32 precision.
    pub fn solve_least_squares_f32(
        x: &[f32],
        y: &[f32],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(rows, cols, x);
        let rhs = DVector::from_column_slice(y);

        matrix
            .svd(true, true)
            .solve(&rhs, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}
