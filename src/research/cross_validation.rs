use rand::prelude::*;
use colored::Colorize;
use crate::DecisionTable;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test table for k-fold cross validation.
/// Fold `i` tests on the `i`-th slice of the (optionally shuffled) rows
/// and trains on the remaining ones.
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
/// use id3tree::research::CrossValidation;
///
/// let table = TableReader::new()
///     .file("/path/to/data/file.csv")
///     .read()
///     .unwrap();
/// let cv = CrossValidation::new(&table)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let tree = build_tree(&train).unwrap();
///     let train_acc = tree.accuracy(&train);
///     let test_acc = tree.accuracy(&test);
///     println!("[train: {train_acc}] [test: {test_acc}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    table: &'a DecisionTable,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(table: &'a DecisionTable) -> Self {
        let ix = (0..table.len()).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            table,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 1, "Cross validation needs at least two folds.");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the rows.
    /// By default, `CrossValidation` does not shuffle the table.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test table for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (DecisionTable, DecisionTable) {
        let n_rows = self.ix.len();
        let start = i * n_rows / self.n_folds;
        let end = (i + 1) * n_rows / self.n_folds;

        let test = &self.ix[start..end];
        let train = self.ix[..start].iter()
            .chain(&self.ix[end..])
            .copied()
            .collect::<Vec<_>>();

        (self.table.select(&train[..]), self.table.select(test))
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (DecisionTable, DecisionTable);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.len();
            let test_size = output.1.len();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> DecisionTable {
        DecisionTable::new(
            (0..n).map(|i| vec![format!("v{i}"), format!("d{}", i % 2)])
        ).unwrap()
    }


    #[test]
    fn folds_cover_every_row_once() {
        let table = table(10);
        let folds = CrossValidation::new(&table)
            .n_folds(3)
            .shuffle()
            .collect::<Vec<_>>();
        assert_eq!(folds.len(), 3);

        let mut tested = folds.iter()
            .flat_map(|(_, test)| test.rows().iter().map(|row| row[0].clone()))
            .collect::<Vec<_>>();
        tested.sort();
        let mut all = table.rows()
            .iter()
            .map(|row| row[0].clone())
            .collect::<Vec<_>>();
        all.sort();
        assert_eq!(tested, all);

        for (train, test) in &folds {
            assert_eq!(train.len() + test.len(), 10);
            assert_eq!(train.number_of_columns(), 1);
        }
    }


    #[test]
    fn unshuffled_folds_are_contiguous() {
        let table = table(4);
        let (train, test) = CrossValidation::new(&table)
            .n_folds(2)
            .next()
            .unwrap();
        assert_eq!(test.rows(), &table.rows()[..2]);
        assert_eq!(train.rows(), &table.rows()[2..]);
    }


    #[test]
    fn same_seed_same_folds() {
        let table = table(20);
        let a = CrossValidation::new(&table).seed(7).shuffle().collect::<Vec<_>>();
        let b = CrossValidation::new(&table).seed(7).shuffle().collect::<Vec<_>>();
        assert_eq!(a, b);
    }
}
