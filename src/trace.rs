//! Hooks that observe tree induction.
//!
//! The induction itself never prints.
//! Install a callback with [`Id3Builder::trace`](crate::Id3Builder::trace)
//! to receive a [`TraceEvent`] per node,
//! or pass [`console`] to get colored output on stdout.
use colored::Colorize;

use std::fmt;

const WIDTH: usize = 6;


/// Why a leaf was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafReason {
    /// Every row has the same decision.
    Pure,
    /// No attribute column can split the rows; majority vote.
    Exhausted,
    /// The table has no rows.
    Empty,
}


impl fmt::Display for LeafReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pure => "pure",
            Self::Exhausted => "majority",
            Self::Empty => "empty",
        };
        write!(f, "{name}")
    }
}


/// An event emitted while growing a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent<'a> {
    /// A table was split on an attribute column.
    Split {
        /// Number of attribute tests above this node.
        depth: usize,
        /// Index of the chosen column.
        column: usize,
        /// Name of the chosen column.
        attribute: &'a str,
        /// Impurity reduction achieved by the split.
        gain: f64,
        /// Number of rows of the split table.
        n_rows: usize,
    },


    /// A leaf was emitted.
    Leaf {
        /// Number of attribute tests above this node.
        depth: usize,
        /// The predicted decision.
        decision: &'a str,
        /// Why the table was not split.
        reason: LeafReason,
        /// Number of rows reaching this leaf.
        n_rows: usize,
    },
}


/// A trace callback.
pub type TraceFn = Box<dyn Fn(&TraceEvent<'_>)>;


/// Prints `event` on stdout, indented by its depth.
pub fn console(event: &TraceEvent<'_>) {
    match event {
        TraceEvent::Split { depth, attribute, gain, n_rows, .. } => {
            println!(
                "{}{}    {}    {}",
                "  ".repeat(*depth),
                format!("[SPLIT {attribute}]").bold().red(),
                format!("[GAIN {gain:>WIDTH$.4}]").bold().green(),
                format!("[ROWS {n_rows:>WIDTH$}]").bold().yellow(),
            );
        },
        TraceEvent::Leaf { depth, decision, reason, n_rows } => {
            println!(
                "{}{}    {}    {}",
                "  ".repeat(*depth),
                format!("[LEAF {decision}]").bold().cyan(),
                format!("[{reason}]").bold().blue(),
                format!("[ROWS {n_rows:>WIDTH$}]").bold().yellow(),
            );
        },
    }
}
