#![warn(missing_docs)]

//!
//! A crate that grows decision trees from categorical tables
//! with the ID3 algorithm.
//!
//! The pipeline is
//! text → [`TableParser`] → [`DecisionTable`] → [`Id3`] → [`DecisionTree`].
//!
//! - A [`DecisionTable`] holds rows of attribute values
//!     followed by a decision value, and answers counting queries
//!     (decision counts, per-column value counts, sub-tables).
//! - [`Id3`] picks, at each node, the unused attribute of maximal
//!     information gain ([`Criterion::Entropy`]) and grows one branch per
//!     attribute value. A pure table becomes a leaf; a table no attribute
//!     can split becomes a majority-vote leaf.
//! - A [`DecisionTree`] classifies records and fails on values
//!     it never saw rather than guessing.
//!
//! ```
//! use id3tree::prelude::*;
//!
//! let table = parse_table("\
//!     old,yes,down\n\
//!     mid,yes,down\n\
//!     mid,no,up\n\
//!     new,no,up\n\
//! ").unwrap();
//!
//! let tree = build_tree(&table).unwrap();
//! assert_eq!(tree.classify(&["mid", "no"]).unwrap(), "up");
//! assert!(tree.classify(&["mid", "maybe"]).is_err());
//! ```

pub mod error;
pub mod table;
pub mod tree;
pub mod classifier;
pub mod trace;
pub mod research;
pub mod prelude;


pub use error::{Error, Result};

pub use table::{
    DecisionTable,
    Row,
    CountMap,
    TableParser,
    TableReader,
    parse_table,
    read_file,
};

pub use tree::{
    Id3,
    Id3Builder,
    DecisionTree,
    Criterion,
    Node,
    Role,
    TrainNode,
    build_tree,
    classify,
};

pub use classifier::Classifier;
pub use trace::{TraceEvent, LeafReason};
