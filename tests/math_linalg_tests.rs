#![cfg(feature = "dev")]
//! Tests for the nalgebra linear algebra backend.

use approx::assert_relative_eq;

use ols_rs::internals::math::linalg::{nalgebra_backend, FloatLinalg};

// ============================================================================
// Square Solves
// ============================================================================

#[test]
fn test_solve_square_diagonal_system() {
    // A = diag(2, 4), b = (2, 8) -> w = (1, 2)
    let a = [2.0, 0.0, 0.0, 4.0];
    let b = [2.0, 8.0];

    let w = f64::solve_square(&a, &b, 2).unwrap();
    assert_relative_eq!(w[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(w[1], 2.0, epsilon = 1e-12);
}

#[test]
fn test_solve_square_general_system() {
    // A = [[4, 1], [2, 3]] (column-major), b = (9, 13) -> w = (1.4, 3.4)
    let a = [4.0, 2.0, 1.0, 3.0];
    let b = [9.0, 13.0];

    let w = f64::solve_square(&a, &b, 2).unwrap();
    assert_relative_eq!(w[0], 1.4, epsilon = 1e-12);
    assert_relative_eq!(w[1], 3.4, epsilon = 1e-12);
}

#[test]
fn test_solve_square_detects_singularity() {
    // Second column is twice the first.
    let a = [1.0, 2.0, 2.0, 4.0];
    let b = [1.0, 2.0];

    assert_eq!(f64::solve_square(&a, &b, 2), None);
}

#[test]
fn test_solve_square_detects_the_zero_matrix() {
    let a = [0.0; 4];
    let b = [1.0, 2.0];

    assert_eq!(nalgebra_backend::solve_square_f64(&a, &b, 2), None);
}

#[test]
fn test_solve_square_f32_path() {
    let a = [2.0_f32, 0.0, 0.0, 4.0];
    let b = [2.0_f32, 8.0];

    let w = f32::solve_square(&a, &b, 2).unwrap();
    assert_relative_eq!(w[0], 1.0_f32, epsilon = 1e-5);
    assert_relative_eq!(w[1], 2.0_f32, epsilon = 1e-5);
}

// ============================================================================
// Least Squares
// ============================================================================

#[test]
fn test_least_squares_consistent_overdetermined_system() {
    // X = [[1, 1], [2, 1], [3, 1]] row-major, y = 2x + 1
    let x = [1.0, 1.0, 2.0, 1.0, 3.0, 1.0];
    let y = [3.0, 5.0, 7.0];

    let w = f64::solve_least_squares(&x, &y, 3, 2).unwrap();
    assert_relative_eq!(w[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(w[1], 1.0, epsilon = 1e-10);
}

#[test]
fn test_least_squares_minimizes_residual_for_inconsistent_system() {
    // Overdetermined and inconsistent: the solution is the projection.
    // X = [[1, 1], [1, 1], [2, 1]] has distinct rows mapping to clashing y.
    let x = [1.0, 1.0, 1.0, 1.0, 2.0, 1.0];
    let y = [1.0, 3.0, 4.0];

    let w = f64::solve_least_squares(&x, &y, 3, 2).unwrap();
    // Residual at the first two rows must split the difference.
    let fitted0 = w[0] + w[1];
    assert_relative_eq!(fitted0, 2.0, epsilon = 1e-10);
}

#[test]
fn test_least_squares_rank_deficient_returns_minimum_norm() {
    // Both columns identical: any (w0, w1) with w0 + w1 = 2 fits; the
    // minimum-norm answer is (1, 1).
    let x = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
    let y = [2.0, 4.0, 6.0];

    let w = f64::solve_least_squares(&x, &y, 3, 2).unwrap();
    assert_relative_eq!(w[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(w[1], 1.0, epsilon = 1e-10);
}
