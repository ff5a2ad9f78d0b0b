use crate::error::{Error, Result};
use super::decision_table::{DecisionTable, Row};


/// The field delimiter used by default.
pub const DEFAULT_DELIMITER: char = ',';


/// A struct that turns delimited text into a [`DecisionTable`].
///
/// One row per line, fields separated by the delimiter,
/// the last field is the decision value.
/// Blank lines are skipped and no whitespace is trimmed.
/// `\n`, `\r\n` and lone `\r` line breaks are accepted.
///
/// # Example
/// ```
/// use id3tree::TableParser;
///
/// let text = "size,color,class\nbig,red,yes\nsmall,red,no\n";
/// let table = TableParser::new()
///     .has_header(true)
///     .parse(text)
///     .unwrap();
/// assert_eq!(table.attribute_names(), vec!["size", "color"]);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableParser {
    delimiter: char,
    has_header: bool,
}


impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}


impl TableParser {
    /// Construct a new instance of [`TableParser`].
    /// By default, fields are separated by `,`
    /// and there is no header line.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            has_header: false,
        }
    }


    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Set the flag whether the first non-blank line names the columns.
    /// Default is `false`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Parse `text` into a [`DecisionTable`].
    /// A text without non-blank lines yields an empty table.
    /// Any malformed line fails the whole parse.
    pub fn parse(&self, text: &str) -> Result<DecisionTable> {
        let mut header: Option<Row> = None;
        let mut rows: Vec<Row> = Vec::new();
        let mut width: Option<usize> = None;

        for (i, line) in lines(text).enumerate() {
            if line.trim().is_empty() { continue; }
            let line_no = i + 1;

            let fields = line.split(self.delimiter)
                .map(str::to_string)
                .collect::<Row>();

            if fields.iter().all(String::is_empty) {
                return Err(Error::MalformedTable {
                    line: line_no,
                    reason: "line has no fields".into(),
                });
            }

            match width {
                Some(w) if w != fields.len() => {
                    return Err(Error::MalformedTable {
                        line: line_no,
                        reason: format!(
                            "expected {w} fields, found {}", fields.len()
                        ),
                    });
                },
                Some(_) => {},
                None => { width = Some(fields.len()); },
            }

            if self.has_header && header.is_none() {
                header = Some(fields);
            } else {
                rows.push(fields);
            }
        }

        let n_columns = width.map_or(0, |w| w - 1);
        let names = header.map(|mut names| {
            names.truncate(n_columns);
            names
        });
        Ok(DecisionTable::from_parts(rows, n_columns, names))
    }
}


/// Splits `text` at `\n`, `\r\n` or `\r`.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(|c: char| c == '\n' || c == '\r') {
            Some(at) => {
                let skip = if text[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[at + skip..]).filter(|s| !s.is_empty());
                Some(&text[..at])
            },
            None => {
                rest = None;
                Some(text)
            },
        }
    })
}


/// Parse comma-separated `text` without header into a [`DecisionTable`].
#[inline]
pub fn parse_table(text: &str) -> Result<DecisionTable> {
    TableParser::new().parse(text)
}
