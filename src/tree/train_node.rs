//! Defines the nodes used while growing a tree.
//! A `TrainNode` keeps the table that reached it
//! so the grown tree can be inspected;
//! converting it into a [`Node`](super::node::Node) drops the tables.
use crate::table::DecisionTable;
use super::node::Role;

use std::fmt;
use std::rc::Rc;


/// A node of a tree under construction.
/// Children are appended one at a time while the builder recurses;
/// a finished sub-tree is never modified again.
/// A branch and the sub-tree below it share one table.
pub struct TrainNode {
    label: String,
    role: Role,
    table: Rc<DecisionTable>,
    children: Vec<TrainNode>,
}


impl TrainNode {
    /// Construct a childless node.
    #[inline]
    pub(super) fn new<S: Into<String>>(
        label: S,
        role: Role,
        table: Rc<DecisionTable>,
    ) -> Self
    {
        Self { label: label.into(), role, table, children: Vec::new() }
    }


    /// Construct a leaf node.
    #[inline]
    pub(super) fn leaf<S: Into<String>>(decision: S, table: Rc<DecisionTable>)
        -> Self
    {
        Self::new(decision, Role::Leaf, table)
    }


    #[inline]
    pub(super) fn add_child(&mut self, node: TrainNode) {
        self.children.push(node);
    }


    /// Returns the label of this node.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the role of this node.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }


    /// Returns the table that reached this node.
    #[inline]
    pub fn decision_table(&self) -> &DecisionTable {
        &self.table
    }


    /// Returns the children of this node.
    #[inline]
    pub fn children(&self) -> &[TrainNode] {
        &self.children[..]
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        if self.children.is_empty() { return 1; }
        self.children.iter().map(TrainNode::leaves).sum()
    }


    pub(super) fn into_parts(self) -> (String, Role, Vec<TrainNode>) {
        (self.label, self.role, self.children)
    }
}


impl fmt::Debug for TrainNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainNode")
            .field("label", &self.label)
            .field("role", &self.role)
            .field("rows", &self.table.len())
            .field("children", &self.children)
            .finish()
    }
}
