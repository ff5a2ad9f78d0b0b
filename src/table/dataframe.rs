//! Conversion from `polars` frames.
use polars::prelude::*;
use rayon::prelude::*;

use crate::error::{Error, Result};
use super::decision_table::{DecisionTable, Row};


impl DecisionTable {
    /// Convert `polars::DataFrame` and `polars::Series` into `DecisionTable`.
    /// Each column of `data` becomes an attribute column named after
    /// the series, `target` becomes the decision column.
    /// Non-string columns are cast to strings.
    /// Null values are rejected.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_rows, n_columns) = data.shape();
        if target.len() != n_rows {
            return Err(Error::MalformedTable {
                line: 0,
                reason: format!(
                    "target has {} values but the frame has {n_rows} rows",
                    target.len()
                ),
            });
        }

        let names = data.get_column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut series = data.get_columns().to_vec();
        series.push(target);

        let columns = series.into_par_iter()
            .map(|s| string_column(&s))
            .collect::<Result<Vec<_>>>()?;

        let rows = (0..n_rows)
            .map(|i| {
                columns.iter()
                    .map(|column| column[i].clone())
                    .collect::<Row>()
            })
            .collect::<Vec<_>>();

        Ok(DecisionTable::from_parts(rows, n_columns, Some(names)))
    }
}


fn string_column(series: &Series) -> Result<Vec<String>> {
    let casted = series.cast(&DataType::Utf8)?;
    casted.utf8()?
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            value.map(str::to_string)
                .ok_or_else(|| Error::MalformedTable {
                    line: i + 1,
                    reason: format!("null value in column `{}`", series.name()),
                })
        })
        .collect()
}
