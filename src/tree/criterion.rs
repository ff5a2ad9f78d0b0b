//! Defines the attribute selection rules.

use fixedbitset::FixedBitSet;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::table::{DecisionTable, CountMap};


/// Splitting criteria for growing decision tree.
/// * `Criterion::Entropy` maximizes the information gain,
///     i.e., the reduction of the decision entropy (in bits).
/// * `Criterion::Gini` maximizes the reduction of the Gini impurity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Criterion {
    /// Shannon entropy (ID3).
    #[default]
    Entropy,
    /// Gini index.
    Gini,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "Entropy (Information gain)",
            Self::Gini => "Gini index",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns the impurity of the given decision counts.
    #[inline]
    pub fn impurity(&self, counts: &CountMap) -> f64 {
        match self {
            Self::Entropy => entropy(counts),
            Self::Gini => gini_impurity(counts),
        }
    }


    /// Returns the impurity reduction obtained
    /// by partitioning `table` on `column`.
    /// An empty table, or a column out of range, has no gain.
    ///
    /// The weighted impurities of the groups are summed in ascending order,
    /// so two columns inducing the same group sizes and decision counts
    /// get bitwise equal gains whatever the order of their values.
    pub fn gain(&self, table: &DecisionTable, column: usize) -> f64 {
        if table.is_empty() || column >= table.number_of_columns() {
            return 0f64;
        }

        let total = table.decisions_count();
        let before = self.impurity(&table.decisions_count_map());

        let mut terms = table.partition(column)
            .into_iter()
            .map(|(_, indices)| {
                let counts = table.decisions_count_map_for_rows(&indices[..]);
                let weight = indices.len() as f64 / total;
                weight * self.impurity(&counts)
            })
            .collect::<Vec<_>>();
        terms.sort_by(f64::total_cmp);

        before - terms.into_iter().sum::<f64>()
    }


    /// Returns the column in `candidates` with maximal gain,
    /// together with its gain.
    /// Columns with fewer than two distinct values cannot split the table
    /// and are skipped. Ties go to the lowest column index.
    /// Returns `None` if no column can split the table.
    pub fn best_split(
        &self,
        table: &DecisionTable,
        candidates: &FixedBitSet,
    ) -> Option<(usize, f64)>
    {
        let columns = candidates.ones()
            .filter(|&c| c < table.number_of_columns())
            .collect::<Vec<_>>();

        columns.into_par_iter()
            .filter(|&c| table.distinct_values(c).len() > 1)
            .map(|c| (c, self.gain(table, c)))
            .collect::<Vec<_>>()
            .into_iter()
            .fold(None, |best, (c, gain)| match best {
                Some((_, g)) if g >= gain => best,
                _ => Some((c, gain)),
            })
    }
}


/// Returns the entropy (in bits) of the given counts.
///
/// The terms are summed in ascending order of probability
/// so the result does not depend on the map's iteration order.
pub fn entropy(counts: &CountMap) -> f64 {
    probabilities(counts)
        .into_iter()
        .filter(|&p| p > 0f64)
        .map(|p| -p * p.log2())
        .sum::<f64>()
}


/// Returns the Gini impurity of the given counts.
pub fn gini_impurity(counts: &CountMap) -> f64 {
    let ps = probabilities(counts);
    if ps.is_empty() { return 0f64; }

    let correct = ps.into_iter()
        .map(|p| p.powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}


fn probabilities(counts: &CountMap) -> Vec<f64> {
    let total = counts.values().sum::<f64>();
    if total <= 0f64 { return Vec::new(); }

    let mut ps = counts.values()
        .map(|&n| n / total)
        .collect::<Vec<_>>();
    ps.sort_by(f64::total_cmp);
    ps
}
