//! Learning arithmetic from data: the calculator exercise.
//!
//! Generates paired integer samples, then contrasts estimators on two
//! targets: addition (exactly linear in the raw features) and multiplication
//! (linear only after an explicit interaction embedding or under a
//! polynomial kernel). Prints coefficients, MSE, and R² for every variant.

use ols_rs::prelude::*;

const SEED: u64 = 42;
const SAMPLES: usize = 1000;
const TEST_FRACTION: f64 = 0.3;
const RIDGE_ALPHAS: [f64; 7] = [0.001, 0.01, 0.1, 1.0, 10.0, 100.0, 1000.0];
const PROBE: [f64; 2] = [25.0, 17.0];

fn main() -> Result<(), OlsError> {
    banner("LEARNING ARITHMETIC FROM DATA");

    // ------------------------------------------------------------------
    // Part 1: dataset
    // ------------------------------------------------------------------
    section("[Part 1] Dataset");

    let data = operand_pairs::<f64>(SAMPLES, -100, 100, SEED);
    let split = train_test_split(data.len(), TEST_FRACTION, Some(SEED))?;

    let dims = data.dimensions();
    let x_train = take_rows(&data.features, dims, &split.train_indices);
    let x_test = take_rows(&data.features, dims, &split.test_indices);
    let sums_train = take_values(&data.sums, &split.train_indices);
    let sums_test = take_values(&data.sums, &split.test_indices);
    let products_train = take_values(&data.products, &split.train_indices);
    let products_test = take_values(&data.products, &split.test_indices);

    println!(
        "Samples: {} pairs drawn uniformly from [-100, 100] (seed {})",
        data.len(),
        SEED
    );
    println!(
        "Example: a={}, b={} -> a+b={}, a*b={}",
        data.features[0], data.features[1], data.sums[0], data.products[0]
    );
    println!(
        "Split:   {} train / {} test",
        split.train_indices.len(),
        split.test_indices.len()
    );

    // ------------------------------------------------------------------
    // Part 2: addition is linear in the raw features
    // ------------------------------------------------------------------
    section("[Part 2] Addition: f(a, b) = a + b");

    println!("Addition is linear: f(a, b) = 1*a + 1*b + 0, so a linear");
    println!("model recovers it exactly. Expected: w = [1, 1], b = 0.\n");

    let svd_fit = Ols::new()
        .dimensions(dims)
        .solver(Svd)
        .estimator(ClosedForm)
        .build()?
        .fit(&x_train, &sums_train)?;
    report_linear(
        "Least squares (SVD)",
        &svd_fit,
        (&x_train, &sums_train),
        (&x_test, &sums_test),
    )?;
    check("25 + 17", svd_fit.predict_one(&PROBE)?, 42.0);

    let normal_fit = Ols::new()
        .dimensions(dims)
        .estimator(ClosedForm)
        .build()?
        .fit(&x_train, &sums_train)?;
    report_linear(
        "Normal equations (closed form)",
        &normal_fit,
        (&x_train, &sums_train),
        (&x_test, &sums_test),
    )?;
    check("25 + 17", normal_fit.predict_one(&PROBE)?, 42.0);

    // ------------------------------------------------------------------
    // Part 3: multiplication is not linear in the raw features
    // ------------------------------------------------------------------
    section("[Part 3] Multiplication: g(a, b) = a * b");

    println!("Multiplication is an interaction: a*b cannot be written as");
    println!("w1*a + w2*b + c, so plain and ridge regression both fail.\n");

    let plain_fit = Ols::new()
        .dimensions(dims)
        .estimator(ClosedForm)
        .build()?
        .fit(&x_train, &products_train)?;
    report_linear(
        "Plain least squares",
        &plain_fit,
        (&x_train, &products_train),
        (&x_test, &products_test),
    )?;

    let ridge_fit = Ols::new()
        .dimensions(dims)
        .cross_validate(KFold(5, &RIDGE_ALPHAS).seed(SEED))
        .estimator(Ridge)
        .build()?
        .fit(&x_train, &products_train)?;
    report_linear(
        &format!("Ridge (alpha = {} by 5-fold CV)", ridge_fit.alpha),
        &ridge_fit.model,
        (&x_train, &products_train),
        (&x_test, &products_test),
    )?;
    println!("  Regularization cannot add the missing interaction term.");

    let kernel_fit = Ols::new()
        .dimensions(dims)
        .alpha(0.001)
        .kernel(Kernel::polynomial(2))
        .estimator(KernelRidge)
        .build()?
        .fit(&x_train, &products_train)?;
    let kernel_test = kernel_fit.predict(&x_test)?;
    println!("\nKernel ridge (polynomial, degree 2, alpha = 0.001):");
    println!(
        "  Test:  MSE {:.10}, R^2 {:.10}",
        mean_squared_error(&products_test, &kernel_test),
        r2_score(&products_test, &kernel_test)
    );
    check("25 * 17", kernel_fit.predict_one(&PROBE)?, 425.0);

    let embedded_fit = Ols::new()
        .dimensions(dims)
        .embedding(Interaction)
        .estimator(ClosedForm)
        .build()?
        .fit(&x_train, &products_train)?;
    report_linear(
        "Interaction embedding (a, b) -> (a, b, a*b)",
        &embedded_fit,
        (&x_train, &products_train),
        (&x_test, &products_test),
    )?;
    println!("  In the embedded space the target is exactly linear again:");
    println!("  expected w = [0, 0, 1], b = 0.");
    check("25 * 17", embedded_fit.predict_one(&PROBE)?, 425.0);

    println!();
    Ok(())
}

// ============================================================================
// Report Helpers
// ============================================================================

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn section(title: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(60));
}

/// Print one fitted linear variant: weights, then train/test fit quality.
fn report_linear(
    label: &str,
    fit: &LinearFit<f64>,
    train: (&[f64], &[f64]),
    test: (&[f64], &[f64]),
) -> Result<(), OlsError> {
    let (x_train, y_train) = train;
    let (x_test, y_test) = test;
    let train_pred = fit.predict(x_train)?;
    let test_pred = fit.predict(x_test)?;

    println!("\n{}:", label);
    println!("  {}", format!("{}", fit).replace('\n', "\n  "));
    println!(
        "  Train: MSE {:.10}, R^2 {:.10}",
        mean_squared_error(y_train, &train_pred),
        r2_score(y_train, &train_pred)
    );
    println!(
        "  Test:  MSE {:.10}, R^2 {:.10}",
        mean_squared_error(y_test, &test_pred),
        r2_score(y_test, &test_pred)
    );
    Ok(())
}

fn check(expression: &str, predicted: f64, expected: f64) {
    println!(
        "  Check: {} -> {:.2} (expected {})",
        expression, predicted, expected
    );
}
