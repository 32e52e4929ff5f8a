#![cfg(feature = "dev")]

use ols_rs::internals::primitives::errors::OlsError;

#[test]
fn test_ols_error_display() {
    // EmptyInput
    let err = OlsError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = OlsError::MismatchedInputs { x_len: 10, y_len: 5 };
    assert_eq!(format!("{}", err), "Length mismatch: x has 10 values, y has 5");

    // InvalidNumericValue
    let err = OlsError::InvalidNumericValue("x[3]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x[3]=NaN");

    // TooFewPoints
    let err = OlsError::TooFewPoints { got: 3, min: 5 };
    assert_eq!(format!("{}", err), "Too few points: got 3, need at least 5");

    // InvalidDimensions
    let err = OlsError::InvalidDimensions(0);
    assert_eq!(format!("{}", err), "Invalid dimensions: 0 (must be at least 1)");

    // InvalidAlpha
    let err = OlsError::InvalidAlpha(-1.0);
    assert_eq!(format!("{}", err), "Invalid alpha: -1 (must be >= 0 and finite)");

    // EmptyAlphaGrid
    let err = OlsError::EmptyAlphaGrid;
    assert_eq!(
        format!("{}", err),
        "Alpha grid is empty: cross-validation needs at least one candidate"
    );

    // InvalidTestFraction
    let err = OlsError::InvalidTestFraction(1.5);
    assert_eq!(
        format!("{}", err),
        "Invalid test fraction: 1.5 (must be > 0 and < 1)"
    );

    // InvalidKernelDegree
    let err = OlsError::InvalidKernelDegree(0);
    assert_eq!(
        format!("{}", err),
        "Invalid kernel degree: 0 (must be at least 1)"
    );

    // InvalidGamma
    let err = OlsError::InvalidGamma(-0.5);
    assert_eq!(format!("{}", err), "Invalid gamma: -0.5 (must be > 0 and finite)");

    // NumericalSingularity
    let err = OlsError::NumericalSingularity;
    assert_eq!(
        format!("{}", err),
        "Normal equations are singular: features are collinear or constant"
    );

    // DimensionMismatch
    let err = OlsError::DimensionMismatch { expected: 2, got: 5 };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: model expects 2 features per sample, input has length 5"
    );

    // DuplicateParameter
    let err = OlsError::DuplicateParameter { parameter: "alpha" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'alpha' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_errors_are_comparable_and_cloneable() {
    let err = OlsError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(err.clone(), err);
    assert_ne!(err, OlsError::EmptyInput);
}

#[test]
fn test_error_implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&OlsError::NumericalSingularity);
}
