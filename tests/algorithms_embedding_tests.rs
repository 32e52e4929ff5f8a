//! Tests for explicit feature embeddings.
//!
//! ## Test Organization
//!
//! 1. **Shapes** - row and column counts under each embedding
//! 2. **Values** - the interaction and quadratic terms themselves
//! 3. **Linearization** - multiplication becomes exactly linear after
//!    the interaction embedding

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ols_rs::prelude::*;

// ============================================================================
// Shapes
// ============================================================================

#[test]
fn test_identity_is_a_passthrough() {
    let x = vec![1.0_f64, 2.0, 3.0, 4.0];
    assert_eq!(Identity.output_dimensions(2), 2);
    assert_eq!(Identity.embed(&x, 2), x);
}

#[test]
fn test_interaction_adds_one_column_for_two_raw_columns() {
    let x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let embedded = Interaction.embed(&x, 2);

    // Three rows in, three rows out; 2 columns become 3.
    assert_eq!(Interaction.output_dimensions(2), 3);
    assert_eq!(embedded.len(), 3 * 3);
}

#[test]
fn test_output_dimension_counts() {
    // d raw columns: interaction adds C(d, 2), quadratic adds d*(d+1)/2.
    assert_eq!(Interaction.output_dimensions(1), 1);
    assert_eq!(Interaction.output_dimensions(3), 6);
    assert_eq!(Quadratic.output_dimensions(2), 5);
    assert_eq!(Quadratic.output_dimensions(3), 9);
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_interaction_terms_and_row_order() {
    let x = vec![2.0_f64, 3.0, -4.0, 5.0];
    let embedded = Interaction.embed(&x, 2);

    assert_eq!(embedded, vec![2.0, 3.0, 6.0, -4.0, 5.0, -20.0]);
}

#[test]
fn test_quadratic_terms_for_two_columns() {
    let x = vec![2.0_f64, 3.0];
    let embedded = Quadratic.embed(&x, 2);

    // (a, b, a^2, ab, b^2)
    assert_eq!(embedded, vec![2.0, 3.0, 4.0, 6.0, 9.0]);
}

#[test]
fn test_interaction_terms_for_three_columns() {
    let x = vec![2.0_f64, 3.0, 5.0];
    let embedded = Interaction.embed(&x, 3);

    // (a, b, c, ab, ac, bc)
    assert_eq!(embedded, vec![2.0, 3.0, 5.0, 6.0, 10.0, 15.0]);
}

// ============================================================================
// Linearization
// ============================================================================

#[test]
fn test_interaction_embedding_linearizes_multiplication() {
    let x = vec![
        1.0, 2.0, 3.0, 5.0, 2.0, 7.0, //
        4.0, 1.0, 5.0, 3.0, 6.0, 2.0, //
        -3.0, 4.0, 2.0, -6.0,
    ];
    let products: Vec<f64> = x.chunks_exact(2).map(|p| p[0] * p[1]).collect();

    let fit = Ols::new()
        .dimensions(2)
        .embedding(Interaction)
        .estimator(ClosedForm)
        .build()
        .unwrap()
        .fit(&x, &products)
        .unwrap();

    // g(a, b) = 0*a + 0*b + 1*(a*b) + 0
    assert_eq!(fit.coefficients.len(), 3);
    assert_abs_diff_eq!(fit.coefficients[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fit.coefficients[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(fit.coefficients[2], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fit.intercept, 0.0, epsilon = 1e-9);

    let probe = fit.predict_one(&[25.0, 17.0]).unwrap();
    assert_abs_diff_eq!(probe, 425.0, epsilon = 1e-6);
}

#[test]
fn test_multiplication_is_not_linear_in_raw_features() {
    // Sign-symmetric design: the best linear fit of a*b is the zero
    // function, so the raw-feature model explains nothing.
    let x = vec![
        2.0, 3.0, -2.0, 3.0, 2.0, -3.0, -2.0, -3.0, //
        4.0, 1.0, -4.0, 1.0, 4.0, -1.0, -4.0, -1.0,
    ];
    let products: Vec<f64> = x.chunks_exact(2).map(|p| p[0] * p[1]).collect();

    let fit = Ols::new()
        .dimensions(2)
        .estimator(ClosedForm)
        .build()
        .unwrap()
        .fit(&x, &products)
        .unwrap();

    let predictions = fit.predict(&x).unwrap();
    let r2 = r2_score(&products, &predictions);
    assert!(r2 < 0.5, "plain linear fit should not explain products, r2={}", r2);
}
