use fixedbitset::FixedBitSet;

use crate::error::{Error, Result};
use crate::table::DecisionTable;
use crate::trace::{LeafReason, TraceEvent, TraceFn};
use super::{
    node::{Node, Role},
    criterion::Criterion,
    train_node::TrainNode,
    decision_tree::DecisionTree,
    builder::Id3Builder,
};

use std::fmt;
use std::rc::Rc;


/// The ID3 algorithm.
/// Given a [`DecisionTable`] of categorical attributes,
/// [`Id3`] grows a multiway [`DecisionTree`]:
/// a pure table becomes a leaf,
/// otherwise the table is split on the unused attribute
/// of maximal gain and each partition is grown recursively.
///
/// [`Id3`] is constructed by [`Id3Builder`].
///
/// # Example
/// ```
/// use id3tree::prelude::*;
///
/// let table = parse_table("\
///     old,yes,swr,down\n\
///     mid,yes,hwr,down\n\
///     mid,no,hwr,up\n\
///     new,no,swr,up\n\
/// ").unwrap();
///
/// let tree = Id3Builder::new().build().fit(&table).unwrap();
/// for row in table.rows() {
///     let (record, decision) = row.split_at(row.len() - 1);
///     assert_eq!(tree.classify(record).unwrap(), decision[0]);
/// }
/// ```
pub struct Id3 {
    criterion: Criterion,
    max_depth: usize,
    unknown_label: String,
    trace: Option<TraceFn>,
}


impl Id3 {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn from_components(
        criterion: Criterion,
        max_depth: usize,
        unknown_label: String,
        trace: Option<TraceFn>,
    ) -> Self
    {
        Self { criterion, max_depth, unknown_label, trace }
    }


    /// Grow a tree whose nodes keep the table that reached them.
    /// `table` is copied once for the root;
    /// use [`Id3::grow_owned`] to hand it over instead.
    pub fn grow(&self, table: &DecisionTable) -> Result<TrainNode> {
        self.grow_owned(table.clone())
    }


    /// Same as [`Id3::grow`], taking the table by value.
    pub fn grow_owned(&self, table: DecisionTable) -> Result<TrainNode> {
        let mut remaining = FixedBitSet::with_capacity(table.number_of_columns());
        remaining.insert_range(..);

        self.grow_node(Rc::new(table), &remaining, 0)
    }


    /// Grow a [`DecisionTree`] from `table`.
    pub fn fit(&self, table: &DecisionTable) -> Result<DecisionTree> {
        let root = self.grow(table)?;
        Ok(DecisionTree::from(Node::from(root)))
    }


    fn grow_node(
        &self,
        table: Rc<DecisionTable>,
        remaining: &FixedBitSet,
        depth: usize,
    ) -> Result<TrainNode>
    {
        if table.is_empty() {
            let label = self.unknown_label.clone();
            return Ok(self.leaf(label, table, LeafReason::Empty, depth));
        }

        let counts = table.decisions_count_map();
        if counts.len() == 1 {
            let label = table.decisions()[0].to_string();
            return Ok(self.leaf(label, table, LeafReason::Pure, depth));
        }


        // Find the attribute that reduces the impurity the most.
        let Some((column, gain)) = self.criterion.best_split(&table, remaining)
        else {
            let label = table.majority_decision()
                .unwrap_or(self.unknown_label.as_str())
                .to_string();
            return Ok(self.leaf(label, table, LeafReason::Exhausted, depth));
        };


        if depth >= self.max_depth {
            return Err(Error::RecursionLimit { limit: self.max_depth });
        }


        let name = table.attribute_name(column);
        self.emit(&TraceEvent::Split {
            depth,
            column,
            attribute: &name,
            gain,
            n_rows: table.len(),
        });


        let mut rest = remaining.clone();
        rest.set(column, false);

        let mut branches = Vec::new();
        for (value, indices) in table.partition(column) {
            let sub_table = Rc::new(table.sub_table(&indices[..])?);
            let subtree = self.grow_node(Rc::clone(&sub_table), &rest, depth + 1)?;

            let mut branch = TrainNode::new(value, Role::Branch, sub_table);
            branch.add_child(subtree);
            branches.push(branch);
        }


        let mut node = TrainNode::new(name, Role::Attribute { column }, table);
        for branch in branches {
            node.add_child(branch);
        }
        Ok(node)
    }


    fn leaf(
        &self,
        label: String,
        table: Rc<DecisionTable>,
        reason: LeafReason,
        depth: usize,
    ) -> TrainNode
    {
        self.emit(&TraceEvent::Leaf {
            depth,
            decision: &label,
            reason,
            n_rows: table.len(),
        });
        TrainNode::leaf(label, table)
    }


    #[inline]
    fn emit(&self, event: &TraceEvent<'_>) {
        if let Some(trace) = &self.trace {
            trace(event);
        }
    }
}


impl fmt::Debug for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Id3")
            .field("criterion", &self.criterion)
            .field("max_depth", &self.max_depth)
            .field("unknown_label", &self.unknown_label)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Max depth: {}\n\
            - Splitting criterion: {}\n\
            - Unknown label: {}\n\
            ----------\
            ",
            self.max_depth,
            self.criterion,
            self.unknown_label,
        )
    }
}


/// Grow a [`DecisionTree`] from `table` with the default parameters.
#[inline]
pub fn build_tree(table: &DecisionTable) -> Result<DecisionTree> {
    Id3Builder::new().build().fit(table)
}
