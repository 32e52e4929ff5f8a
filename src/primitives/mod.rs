//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental types shared by every other layer.
//! It currently contains the crate-wide error enum.

/// Error types for configuration, fitting, and prediction.
pub mod errors;
