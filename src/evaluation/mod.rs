//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides everything used to judge and compare fitted models:
//! - Fit-quality metrics (MSE, RMSE, MAE, R²)
//! - Seeded train/test splitting
//! - Cross-validated search over ridge regularization strengths

/// Fit-quality metrics.
pub mod metrics;

/// Seeded train/test splitting.
pub mod split;

/// Cross-validated alpha search.
pub mod search;

/// Minimal PRNG shared by split and search.
pub(crate) mod rng;
