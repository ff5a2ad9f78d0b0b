//! Exports the table types, the tree builder, and traits.
//!
pub use crate::table::{
    DecisionTable,
    TableParser,
    TableReader,
    parse_table,
};


pub use crate::tree::{
    Id3,
    Id3Builder,
    DecisionTree,
    Criterion,
    build_tree,
};


pub use crate::classifier::Classifier;

pub use crate::error::Error;
