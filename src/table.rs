//! Struct `DecisionTable` represents a table of categorical rows
//! whose last column is the decision.

// Provides the table struct.
pub(crate) mod decision_table;
// Provides a struct that parses delimited text.
pub(crate) mod table_parser;
// Provides a struct that reads a file.
pub(crate) mod table_reader;
// Conversion from `polars::DataFrame`.
mod dataframe;


pub use decision_table::{DecisionTable, Row, CountMap};
pub use table_parser::{TableParser, parse_table, DEFAULT_DELIMITER};
pub use table_reader::{TableReader, read_file};
