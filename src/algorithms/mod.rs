//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the estimators and the feature-space machinery:
//! - Explicit feature embeddings (`Identity`, `Interaction`, `Quadratic`)
//! - Closed-form linear least squares (normal equations or SVD)
//! - Ridge regression (closed form, centered)
//! - Kernel ridge regression (dual form)

/// Explicit feature embeddings.
pub mod embedding;

/// Closed-form linear least squares.
pub mod linear;

/// Closed-form ridge regression.
pub mod ridge;

/// Kernel ridge regression in dual form.
pub mod kernel_ridge;
