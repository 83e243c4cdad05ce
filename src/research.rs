//! This directory provides some features for evaluating
//! a fitted classifier:
//! - Loss functions,
//! - Cross validation.

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;

/// Defines a train/test fold generator.
pub mod cross_validation;


pub use loss_functions::{accuracy, zero_one_loss};
pub use cross_validation::CrossValidation;
