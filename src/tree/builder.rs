use crate::trace::{TraceEvent, TraceFn};
use super::criterion::Criterion;
use super::id3::Id3;


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// The label of the leaf grown from an empty table.
pub const DEFAULT_UNKNOWN_LABEL: &str = "unknown";


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for growing a `DecisionTree`.
///
/// # Example
///
/// ```
/// use id3tree::prelude::*;
///
/// let table = parse_table("old,yes,down\nnew,no,up").unwrap();
/// let id3 = Id3Builder::new()
///     .criterion(Criterion::Entropy)
///     .max_depth(16)
///     .build();
/// let tree = id3.fit(&table).unwrap();
/// assert_eq!(tree.classify(&["new", "no"]).unwrap(), "up");
/// ```
pub struct Id3Builder {
    criterion: Criterion,
    max_depth: usize,
    unknown_label: String,
    trace: Option<TraceFn>,
}


impl Default for Id3Builder {
    fn default() -> Self {
        Self::new()
    }
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// criterion: Criterion::Entropy,
    /// max_depth: DEFAULT_MAX_DEPTH == 256,
    /// unknown_label: DEFAULT_UNKNOWN_LABEL == "unknown",
    /// trace: None,
    /// ```
    pub fn new() -> Self {
        Self {
            criterion: Criterion::Entropy,
            max_depth: DEFAULT_MAX_DEPTH,
            unknown_label: DEFAULT_UNKNOWN_LABEL.to_string(),
            trace: None,
        }
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Entropy`.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Specify the maximal number of attribute tests on a path.
    /// Growing a deeper tree fails with
    /// [`Error::RecursionLimit`](crate::Error::RecursionLimit).
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Set the label of the leaf grown from a table without rows.
    #[inline]
    pub fn unknown_label<S: Into<String>>(mut self, label: S) -> Self {
        self.unknown_label = label.into();
        self
    }


    /// Install a callback that receives a [`TraceEvent`] per grown node.
    /// Pass [`trace::console`](crate::trace::console) to print them.
    pub fn trace<F>(mut self, f: F) -> Self
        where F: Fn(&TraceEvent<'_>) + 'static
    {
        self.trace = Some(Box::new(f));
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        Id3::from_components(
            self.criterion,
            self.max_depth,
            self.unknown_label,
            self.trace,
        )
    }
}
