//! Tests for fit-quality metrics.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ols_rs::prelude::*;

// ============================================================================
// Point Metrics
// ============================================================================

#[test]
fn test_mse_and_rmse_hand_computed() {
    let actual = [1.0, 2.0, 3.0];
    let predicted = [2.0, 2.0, 2.0];

    assert_relative_eq!(
        mean_squared_error(&actual, &predicted),
        2.0 / 3.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        root_mean_squared_error(&actual, &predicted),
        (2.0_f64 / 3.0).sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn test_mae_hand_computed() {
    let actual = [1.0, 2.0, 3.0];
    let predicted = [2.5, 2.0, 2.0];

    assert_relative_eq!(
        mean_absolute_error(&actual, &predicted),
        (1.5 + 0.0 + 1.0) / 3.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_perfect_predictions() {
    let actual = [1.0, 2.0, 3.0];

    assert_abs_diff_eq!(mean_squared_error(&actual, &actual), 0.0);
    assert_relative_eq!(r2_score(&actual, &actual), 1.0, epsilon = 1e-12);
}

// ============================================================================
// R²
// ============================================================================

#[test]
fn test_r2_of_mean_prediction_is_zero() {
    let actual = [1.0, 2.0, 3.0];
    let mean = [2.0, 2.0, 2.0];

    assert_abs_diff_eq!(r2_score(&actual, &mean), 0.0, epsilon = 1e-12);
}

#[test]
fn test_r2_can_be_negative_for_worse_than_mean() {
    let actual = [1.0, 2.0, 3.0];
    let bad = [3.0, 3.0, 0.0];

    assert!(r2_score(&actual, &bad) < 0.0);
}

#[test]
fn test_r2_on_constant_target() {
    let actual = [5.0, 5.0, 5.0];

    // Nothing to explain: exact fit scores 1, anything else scores 0.
    assert_relative_eq!(r2_score(&actual, &actual), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(r2_score(&actual, &[5.0, 5.0, 4.0]), 0.0, epsilon = 1e-12);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_diagnostics_bundle_matches_point_metrics() {
    let actual = [1.0, 2.0, 3.0, 4.0];
    let predicted = [1.5, 2.0, 2.5, 4.5];

    let diag = Diagnostics::compute(&actual, &predicted);
    assert_relative_eq!(diag.mse, mean_squared_error(&actual, &predicted), epsilon = 1e-12);
    assert_relative_eq!(
        diag.rmse,
        root_mean_squared_error(&actual, &predicted),
        epsilon = 1e-12
    );
    assert_relative_eq!(diag.mae, mean_absolute_error(&actual, &predicted), epsilon = 1e-12);
    assert_relative_eq!(diag.r2, r2_score(&actual, &predicted), epsilon = 1e-12);
}

#[test]
fn test_residuals_preserve_order() {
    let actual = [1.0, 2.0, 3.0];
    let predicted = [0.5, 2.5, 3.0];

    assert_eq!(
        Diagnostics::residuals(&actual, &predicted),
        vec![0.5, -0.5, 0.0]
    );
}
