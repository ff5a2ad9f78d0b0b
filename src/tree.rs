//! Grows and represents decision trees.

/// Defines the ID3 algorithm.
pub mod id3;
/// Defines the classifier produced by `Id3`.
pub mod decision_tree;
/// Defines the builder of `Id3`.
pub mod builder;

/// Defines the nodes of `DecisionTree`.
mod node;
mod criterion;
mod train_node;


pub use id3::{Id3, build_tree};
pub use builder::{Id3Builder, DEFAULT_MAX_DEPTH, DEFAULT_UNKNOWN_LABEL};
pub use decision_tree::{DecisionTree, classify};
pub use criterion::{Criterion, entropy, gini_impurity};
pub use node::{Node, Role};
pub use train_node::TrainNode;
