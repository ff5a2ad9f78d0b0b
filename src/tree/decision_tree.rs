//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::classifier::Classifier;
use crate::error::Result;
use super::node::Node;

use std::path::Path;
use std::fs::File;
use std::io::{self, prelude::*};


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node
}


impl From<Node> for DecisionTree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTree {
    /// Descends from the root.
    /// At each attribute node, the record's value at the tested column
    /// selects the branch to follow.
    /// Fails with [`Error::UnclassifiableInput`](crate::Error::UnclassifiableInput)
    /// if no branch carries that value.
    #[inline]
    fn classify<S: AsRef<str>>(&self, record: &[S]) -> Result<&str> {
        self.root.classify(record)
    }
}


impl DecisionTree {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the maximal number of attribute tests on a path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Serialize the tree to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Deserialize a tree written by [`DecisionTree::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())
    }


    /// Returns the current decision tree in dot format.
    pub fn to_dot(&self) -> String {
        let info = self.root.to_dot_info(0).0;
        let mut dot = String::from("graph DecisionTree {\n");
        info.into_iter().for_each(|row| dot.push_str(&row));
        dot.push('}');
        dot
    }
}


/// Classify `record` with `tree`.
#[inline]
pub fn classify<'a, S: AsRef<str>>(tree: &'a DecisionTree, record: &[S])
    -> Result<&'a str>
{
    tree.classify(record)
}
