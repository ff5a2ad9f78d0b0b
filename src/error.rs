//! Error types of this crate.
use thiserror::Error;


/// Errors raised while parsing a table, growing a tree,
/// or classifying a record.
#[derive(Debug, Error)]
pub enum Error {
    /// A line of the input text could not be turned into a row.
    /// `line` is 1-based and counts blank lines.
    #[error("Malformed table at line {line}: {reason}")]
    MalformedTable {
        /// The offending line.
        line: usize,
        /// What is wrong with it.
        reason: String,
    },


    /// A row index passed to [`DecisionTable::sub_table`] does not exist.
    ///
    /// [`DecisionTable::sub_table`]: crate::DecisionTable::sub_table
    #[error("Row index {index} is out of range for a table of {n_rows} rows")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of rows in the table.
        n_rows: usize,
    },


    /// The tree has no branch for the value found in the record.
    #[error("Cannot classify: attribute `{attribute}` never took value `{value}` during training")]
    UnclassifiableInput {
        /// Name of the attribute tested at the branch point.
        attribute: String,
        /// The unseen value.
        value: String,
    },


    /// The record does not have the column a branch point reads.
    #[error("Record of length {len} has no attribute at column {column}")]
    ShortRecord {
        /// Column read by the branch point.
        column: usize,
        /// Length of the record.
        len: usize,
    },


    /// Tree induction went deeper than the configured limit.
    #[error("Recursion limit of {limit} exceeded while growing the tree")]
    RecursionLimit {
        /// The configured maximal depth.
        limit: usize,
    },


    /// Reading a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),


    /// (De)serializing a tree failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),


    /// Converting a `polars::DataFrame` failed.
    #[error(transparent)]
    DataFrame(#[from] polars::prelude::PolarsError),
}


/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
