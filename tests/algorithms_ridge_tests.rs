//! Tests for the closed-form ridge estimator.
//!
//! ## Test Organization
//!
//! 1. **Limits** - alpha 0 matches OLS; large alpha shrinks
//! 2. **Intercept** - the intercept is not penalized
//! 3. **Cross-Validation** - alpha selection from a grid
//! 4. **Validation** - parameter errors

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ols_rs::prelude::*;

fn addition_data() -> (Vec<f64>, Vec<f64>) {
    let x = vec![
        1.0, 2.0, 3.0, 5.0, 2.0, 7.0, //
        4.0, 1.0, 6.0, 3.0, 5.0, 9.0, //
        8.0, 2.0, 7.0, 6.0,
    ];
    let y = x.chunks_exact(2).map(|p| p[0] + p[1]).collect();
    (x, y)
}

// ============================================================================
// Limits
// ============================================================================

#[test]
fn test_alpha_zero_matches_ordinary_least_squares() {
    let (x, y) = addition_data();

    let ols = Ols::new()
        .dimensions(2)
        .estimator(ClosedForm)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let ridge = Ols::new()
        .dimensions(2)
        .alpha(0.0)
        .estimator(Ridge)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    for (a, b) in ols.coefficients.iter().zip(ridge.model.coefficients.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }
    assert_abs_diff_eq!(ols.intercept, ridge.model.intercept, epsilon = 1e-8);
}

#[test]
fn test_large_alpha_shrinks_coefficients() {
    let (x, y) = addition_data();

    let small = Ols::new()
        .dimensions(2)
        .alpha(1e-6)
        .estimator(Ridge)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let large = Ols::new()
        .dimensions(2)
        .alpha(1e6)
        .estimator(Ridge)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let norm = |coefs: &[f64]| coefs.iter().map(|c| c * c).sum::<f64>().sqrt();
    assert!(norm(&large.model.coefficients) < 0.01 * norm(&small.model.coefficients));
}

#[test]
fn test_ridge_recovers_linear_target_with_tiny_alpha() {
    let (x, y) = addition_data();

    let fit = Ols::new()
        .dimensions(2)
        .alpha(1e-9)
        .estimator(Ridge)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_relative_eq!(fit.model.coefficients[0], 1.0, epsilon = 1e-6);
    assert_relative_eq!(fit.model.coefficients[1], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(fit.model.intercept, 0.0, epsilon = 1e-6);
}

// ============================================================================
// Intercept
// ============================================================================

#[test]
fn test_intercept_is_not_penalized() {
    // Constant shift of the target must reappear in the intercept even under
    // heavy regularization of the coefficients.
    let (x, y) = addition_data();
    let shifted: Vec<f64> = y.iter().map(|v| v + 100.0).collect();

    let fit = Ols::new()
        .dimensions(2)
        .alpha(1e6)
        .estimator(Ridge)
        .build()
        .unwrap()
        .fit(&x, &shifted)
        .unwrap();

    let y_mean = shifted.iter().sum::<f64>() / shifted.len() as f64;
    // Coefficients are shrunk to ~0, so the intercept carries the mean.
    assert_relative_eq!(fit.model.intercept, y_mean, epsilon = 1e-2);
}

// ============================================================================
// Cross-Validation
// ============================================================================

#[test]
fn test_cv_prefers_weak_regularization_on_exactly_linear_data() {
    let (x, y) = addition_data();

    let fit = Ols::new()
        .dimensions(2)
        .cross_validate(KFold(4, &[0.001, 1000.0]).seed(42))
        .estimator(Ridge)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(fit.alpha, 0.001);
    let scores = fit.cv_scores.as_ref().unwrap();
    assert_eq!(scores.len(), 2);
    assert!(scores[0] < scores[1]);
}

#[test]
fn test_cv_selection_is_deterministic_for_a_fixed_seed() {
    let (x, y) = addition_data();
    let grid = [0.001, 0.1, 10.0, 1000.0];

    let run = || {
        Ols::new()
            .dimensions(2)
            .cross_validate(KFold(4, &grid).seed(7))
            .estimator(Ridge)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.alpha, second.alpha);
    assert_eq!(first.cv_scores, second.cv_scores);
}

#[test]
fn test_loocv_selects_from_the_grid() {
    let (x, y) = addition_data();
    let grid = [0.001, 1000.0];

    let fit = Ols::new()
        .dimensions(2)
        .cross_validate(LOOCV(&grid))
        .estimator(Ridge)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(grid.contains(&fit.alpha));
    assert_eq!(fit.cv_scores.as_ref().unwrap().len(), grid.len());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_negative_alpha_is_rejected_at_build() {
    let err = Ols::new()
        .dimensions(2)
        .alpha(-1.0)
        .estimator(Ridge)
        .build()
        .unwrap_err();
    assert_eq!(err, OlsError::InvalidAlpha(-1.0));
}

#[test]
fn test_empty_alpha_grid_is_rejected_at_build() {
    let empty: [f64; 0] = [];
    let err = Ols::new()
        .dimensions(2)
        .cross_validate(KFold(5, &empty))
        .estimator(Ridge)
        .build()
        .unwrap_err();
    assert_eq!(err, OlsError::EmptyAlphaGrid);
}
