//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use super::train_node::TrainNode;


/// What a [`Node`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Tests the attribute at `column`.
    /// The label is the attribute name,
    /// each child is a [`Role::Branch`].
    Attribute {
        /// Index of the tested column.
        column: usize,
    },


    /// One outcome of the parent's test.
    /// The label is the attribute value,
    /// the single child is the subtree for that value.
    Branch,


    /// A terminal node. The label is the predicted decision.
    Leaf,
}


/// A node of a [`DecisionTree`](crate::DecisionTree).
/// Each node owns its children; the order of the children
/// is the order in which the branches were grown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    label: String,
    role: Role,
    children: Vec<Node>,
}


impl Node {
    /// Returns a leaf predicting `decision`.
    pub fn leaf<S: Into<String>>(decision: S) -> Self {
        Self { label: decision.into(), role: Role::Leaf, children: Vec::new() }
    }


    /// Returns a node testing `column`, named `name`,
    /// with one branch per `(value, subtree)` pair.
    pub fn attribute<S, V, I>(name: S, column: usize, branches: I) -> Self
        where S: Into<String>,
              V: Into<String>,
              I: IntoIterator<Item = (V, Node)>,
    {
        let children = branches.into_iter()
            .map(|(value, subtree)| Self::branch(value, subtree))
            .collect();
        Self {
            label: name.into(),
            role: Role::Attribute { column },
            children,
        }
    }


    /// Returns a branch node labeled `value` over `subtree`.
    pub fn branch<S: Into<String>>(value: S, subtree: Node) -> Self {
        Self {
            label: value.into(),
            role: Role::Branch,
            children: vec![subtree],
        }
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


    /// Returns the children of this node.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children[..]
    }


    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        if self.is_leaf() { return 1; }
        self.children.iter().map(Node::leaves).sum()
    }


    /// Returns the maximal number of attribute tests
    /// on a path from this node to a leaf.
    pub fn depth(&self) -> usize {
        let below = self.children.iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0);
        match self.role {
            Role::Attribute { .. } => below + 1,
            _ => below,
        }
    }


    /// Descends this sub-tree following `record`.
    pub(super) fn classify<S: AsRef<str>>(&self, record: &[S]) -> Result<&str> {
        match self.role {
            Role::Leaf => Ok(self.label.as_str()),
            Role::Branch => {
                let subtree = self.children.first()
                    .ok_or_else(|| Error::UnclassifiableInput {
                        attribute: String::new(),
                        value: self.label.clone(),
                    })?;
                subtree.classify(record)
            },
            Role::Attribute { column } => {
                let value: &str = record.get(column)
                    .ok_or(Error::ShortRecord { column, len: record.len() })?
                    .as_ref();

                let subtree = self.children.iter()
                    .find(|branch| branch.label == value)
                    .and_then(|branch| branch.children.first())
                    .ok_or_else(|| Error::UnclassifiableInput {
                        attribute: self.label.clone(),
                        value: value.to_string(),
                    })?;
                subtree.classify(record)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self.role {
            Role::Attribute { .. } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{} ?\" ];\n",
                    escape(&self.label)
                )];

                let mut next_id = id + 1;
                for branch in &self.children {
                    let Some(subtree) = branch.children.first() else {
                        continue;
                    };
                    let child_id = next_id;
                    let (mut child_info, ret_id) = subtree.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{}\" ];\n",
                        escape(&branch.label)
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Role::Branch => match self.children.first() {
                Some(subtree) => subtree.to_dot_info(id),
                None => (Vec::new(), id),
            },
            Role::Leaf => {
                let info = format!(
                    "\tnode_{id} [ label = \"{}\", shape = box ];\n",
                    escape(&self.label)
                );

                (vec![info], id + 1)
            },
        }
    }
}


fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}


impl From<TrainNode> for Node {
    #[inline]
    fn from(train_node: TrainNode) -> Self {
        let (label, role, children) = train_node.into_parts();
        let children = children.into_iter()
            .map(Node::from)
            .collect();

        Self { label, role, children }
    }
}
