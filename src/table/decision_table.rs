use rayon::prelude::*;

use crate::error::{Error, Result};

use std::collections::HashMap;


/// A row of a [`DecisionTable`].
/// The last element is the decision value,
/// the preceding ones are the attribute values.
pub type Row = Vec<String>;


/// Maps a distinct value to the number of its occurrences.
/// Counts are kept as `f64` since they feed ratio computations.
pub type CountMap = HashMap<String, f64>;


/// Struct `DecisionTable` holds categorical rows
/// whose last column is the decision (class label).
///
/// Every row has the same length.
/// The table never changes after construction;
/// all queries below are pure.
///
/// # Example
/// ```
/// use id3tree::DecisionTable;
///
/// let table = DecisionTable::new(vec![
///     vec!["old", "yes", "down"],
///     vec!["new", "no",  "up"],
/// ]).unwrap();
/// assert_eq!(table.number_of_columns(), 2);
/// assert_eq!(table.decisions(), vec!["down", "up"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecisionTable {
    rows: Vec<Row>,
    n_columns: usize,
    names: Option<Vec<String>>,
}


impl DecisionTable {
    /// Construct a new `DecisionTable` from the given rows.
    /// Fails with [`Error::MalformedTable`] if a row is empty
    /// or if the rows have different lengths.
    pub fn new<I, R, S>(rows: I) -> Result<Self>
        where I: IntoIterator<Item = R>,
              R: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let rows = rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Row>())
            .collect::<Vec<_>>();

        let width = rows.first().map(|row| row.len());
        for (i, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(Error::MalformedTable {
                    line: i + 1,
                    reason: "row has no fields".into(),
                });
            }
            if Some(row.len()) != width {
                return Err(Error::MalformedTable {
                    line: i + 1,
                    reason: format!(
                        "expected {} fields, found {}",
                        width.unwrap_or(0), row.len()
                    ),
                });
            }
        }

        // `width` is at least one here unless there are no rows.
        let n_columns = width.map_or(0, |w| w - 1);
        Ok(Self { rows, n_columns, names: None })
    }


    /// Construct a table from parts that are already validated.
    pub(crate) fn from_parts(
        rows: Vec<Row>,
        n_columns: usize,
        names: Option<Vec<String>>,
    ) -> Self
    {
        Self { rows, n_columns, names }
    }


    /// Attach names to the attribute columns.
    /// Unnamed columns are reported as `Feat. [i]` (1-based).
    ///
    /// # Panics
    /// Panics if the number of names differs from
    /// [`DecisionTable::number_of_columns`] on a non-empty table.
    pub fn with_attribute_names<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let names = names.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        if self.rows.is_empty() {
            self.n_columns = names.len();
        }
        assert_eq!(
            names.len(), self.n_columns,
            "The table has {} attribute columns but {} names are given",
            self.n_columns, names.len(),
        );
        self.names = Some(names);
        self
    }


    /// Returns the name of the attribute at `column`.
    pub fn attribute_name(&self, column: usize) -> String {
        self.names.as_ref()
            .and_then(|names| names.get(column))
            .cloned()
            .unwrap_or_else(|| format!("Feat. [{}]", column + 1))
    }


    /// Returns the names of all attribute columns.
    pub fn attribute_names(&self) -> Vec<String> {
        (0..self.n_columns).map(|c| self.attribute_name(c)).collect()
    }


    /// Returns the rows of this table.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }


    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Returns the decision value of each row, in row order.
    pub fn decisions(&self) -> Vec<&str> {
        self.rows.iter()
            .filter_map(|row| row.last())
            .map(String::as_str)
            .collect()
    }


    /// Returns the number of rows as `f64`.
    #[inline]
    pub fn decisions_count(&self) -> f64 {
        self.rows.len() as f64
    }


    /// Returns the attribute values of each row, in row order.
    pub fn attributes(&self) -> Vec<&[String]> {
        self.rows.iter()
            .map(|row| &row[..self.n_columns])
            .collect()
    }


    /// Returns the number of attribute columns.
    /// An empty table has no columns.
    #[inline]
    pub fn number_of_columns(&self) -> usize {
        self.n_columns
    }


    /// Returns, for each attribute column,
    /// the occurrence count of each distinct value.
    pub fn attributes_count_map(&self) -> Vec<CountMap> {
        (0..self.n_columns).into_par_iter()
            .map(|column| {
                count(self.rows.iter().map(|row| row[column].as_str()))
            })
            .collect()
    }


    /// Returns the occurrence count of each distinct decision value.
    pub fn decisions_count_map(&self) -> CountMap {
        count(self.decisions().into_iter())
    }


    /// Returns the indices (ascending) of the rows
    /// whose value at `column` equals `value`.
    pub fn row_numbers_with_attribute(&self, column: usize, value: &str)
        -> Vec<usize>
    {
        if column >= self.n_columns { return Vec::new(); }

        self.rows.iter()
            .enumerate()
            .filter_map(|(i, row)| (row[column] == value).then_some(i))
            .collect()
    }


    /// Returns the decision counts over the rows
    /// whose value at `column` equals `value`.
    pub fn decisions_count_map_for_attribute(&self, column: usize, value: &str)
        -> CountMap
    {
        let indices = self.row_numbers_with_attribute(column, value);
        self.decisions_count_map_for_rows(&indices[..])
    }


    /// Returns a new table made of the rows at `indexes`,
    /// in the given order. Repeated indices repeat rows.
    /// The attribute columns (and their names) are kept
    /// even if `indexes` is empty.
    pub fn sub_table(&self, indexes: &[usize]) -> Result<Self> {
        let n_rows = self.rows.len();
        if let Some(&index) = indexes.iter().find(|&&i| i >= n_rows) {
            return Err(Error::IndexOutOfRange { index, n_rows });
        }
        Ok(self.select(indexes))
    }


    /// Same as `sub_table`, for indices known to be in range.
    pub(crate) fn select(&self, indexes: &[usize]) -> Self {
        let rows = indexes.iter()
            .map(|&i| self.rows[i].clone())
            .collect();
        Self::from_parts(rows, self.n_columns, self.names.clone())
    }


    /// Returns the distinct values of `column` in order of first appearance.
    pub fn distinct_values(&self, column: usize) -> Vec<&str> {
        self.partition(column)
            .into_iter()
            .map(|(value, _)| value)
            .collect()
    }


    /// Groups the row indices by their value at `column`.
    /// Groups appear in order of first appearance of the value,
    /// indices within a group are ascending.
    pub(crate) fn partition(&self, column: usize) -> Vec<(&str, Vec<usize>)> {
        if column >= self.n_columns { return Vec::new(); }

        let mut position = HashMap::new();
        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            let value = row[column].as_str();
            let k = *position.entry(value).or_insert_with(|| {
                groups.push((value, Vec::new()));
                groups.len() - 1
            });
            groups[k].1.push(i);
        }
        groups
    }


    /// Returns the decision counts over the rows at `indices`.
    pub(crate) fn decisions_count_map_for_rows(&self, indices: &[usize])
        -> CountMap
    {
        count(
            indices.iter()
                .filter_map(|&i| self.rows[i].last())
                .map(String::as_str)
        )
    }


    /// Returns the most frequent decision value.
    /// Ties go to the value that appears first in row order.
    pub(crate) fn majority_decision(&self) -> Option<&str> {
        let counts = self.decisions_count_map();
        let mut best: Option<(&str, f64)> = None;
        for decision in self.decisions() {
            let n = counts[decision];
            match best {
                Some((_, m)) if m >= n => {},
                _ => { best = Some((decision, n)); },
            }
        }
        best.map(|(decision, _)| decision)
    }
}


fn count<'a, I>(values: I) -> CountMap
    where I: Iterator<Item = &'a str>
{
    let mut map = CountMap::new();
    for value in values {
        *map.entry(value.to_string()).or_insert(0f64) += 1f64;
    }
    map
}
