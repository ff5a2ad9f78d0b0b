//! Defines the inference trait of trained trees.
use crate::error::Result;
use crate::table::DecisionTable;


/// A trait that defines how a trained model labels a record,
/// i.e., a sequence of attribute values in column order.
pub trait Classifier {
    /// Predicts the decision for `record`.
    fn classify<S: AsRef<str>>(&self, record: &[S]) -> Result<&str>;


    /// Predicts the decision of every row of `table`.
    /// The decision column of `table` is ignored.
    fn classify_all(&self, table: &DecisionTable) -> Result<Vec<&str>> {
        table.attributes()
            .into_iter()
            .map(|record| self.classify(record))
            .collect()
    }


    /// Returns the ratio of rows of `table` whose decision is predicted.
    /// A row that cannot be classified counts as a miss.
    /// An empty table has accuracy `0`.
    fn accuracy(&self, table: &DecisionTable) -> f64 {
        if table.is_empty() { return 0f64; }

        let hits = table.rows()
            .iter()
            .filter(|row| {
                let (record, decision) = row.split_at(row.len() - 1);
                self.classify(record)
                    .is_ok_and(|predicted| predicted == decision[0])
            })
            .count();

        hits as f64 / table.decisions_count()
    }
}
