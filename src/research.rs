//! This directory provides some features for research.
//! - k-fold cross validation of a grown tree

/// Provides an iterator over train/test tables.
pub mod cross_validation;

pub use cross_validation::CrossValidation;
