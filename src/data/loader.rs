//! CSV Time-Series Loader Module
//! Loads header-less simulation output tables using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Column {column} is not numeric")]
    NonNumeric { column: usize },
    #[error("Column {column} has missing values; rows are not rectangular")]
    NonRectangular { column: usize },
    #[error("CSV has no time column")]
    NoTimeColumn,
}

/// One simulation output table: a time column plus one value column per node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeriesTable {
    time: Vec<f64>,
    nodes: Vec<Vec<f64>>,
}

impl TimeSeriesTable {
    /// Build a table from its time column and per-node columns.
    ///
    /// Node columns are expected to have the same length as `time`.
    pub fn new(time: Vec<f64>, nodes: Vec<Vec<f64>>) -> Self {
        debug_assert!(nodes.iter().all(|col| col.len() == time.len()));
        Self { time, nodes }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Number of rows.
    pub fn time_steps(&self) -> usize {
        self.time.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Values of one node over time.
    pub fn node(&self, index: usize) -> Option<&[f64]> {
        self.nodes.get(index).map(Vec::as_slice)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &[f64]> {
        self.nodes.iter().map(Vec::as_slice)
    }

    /// Values of every node at one time step, in node order.
    pub fn row(&self, step: usize) -> Option<Vec<f64>> {
        if step >= self.time.len() {
            return None;
        }
        Some(self.nodes.iter().map(|col| col[step]).collect())
    }

    /// Every node value, node by node.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes.iter().flatten().copied()
    }
}

/// Loads comma-delimited numeric tables without a header row.
pub struct TimeSeriesLoader;

impl TimeSeriesLoader {
    /// Load a CSV file. Column 0 is time, the rest are node values.
    pub fn load_csv(path: &Path) -> Result<TimeSeriesTable, LoaderError> {
        let df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        let table = Self::from_dataframe(&df)?;
        log::debug!(
            "Loaded {}: {} time steps, {} nodes",
            path.display(),
            table.time_steps(),
            table.node_count()
        );
        Ok(table)
    }

    /// Convert a DataFrame whose columns are all numeric into a table.
    pub fn from_dataframe(df: &DataFrame) -> Result<TimeSeriesTable, LoaderError> {
        let mut columns = df
            .get_columns()
            .iter()
            .enumerate()
            .map(|(idx, col)| Self::column_values(idx, col))
            .collect::<Result<Vec<_>, _>>()?;

        if columns.is_empty() {
            return Err(LoaderError::NoTimeColumn);
        }
        let time = columns.remove(0);
        Ok(TimeSeriesTable::new(time, columns))
    }

    fn column_values(idx: usize, col: &Column) -> Result<Vec<f64>, LoaderError> {
        if col.dtype() == &DataType::String {
            return Self::padded_column_values(idx, col);
        }
        if !Self::is_numeric(col.dtype()) {
            return Err(LoaderError::NonNumeric { column: idx });
        }

        let series = col.as_materialized_series().cast(&DataType::Float64)?;
        if series.null_count() > 0 {
            return Err(LoaderError::NonRectangular { column: idx });
        }

        Ok(series.f64()?.into_no_null_iter().collect())
    }

    /// Numbers written with spaces around the delimiter (`0.1, 0.2`) are
    /// inferred as strings; trim each cell and parse it.
    fn padded_column_values(idx: usize, col: &Column) -> Result<Vec<f64>, LoaderError> {
        col.as_materialized_series()
            .str()?
            .into_iter()
            .map(|cell| match cell {
                Some(text) => text
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| LoaderError::NonNumeric { column: idx }),
                None => Err(LoaderError::NonRectangular { column: idx }),
            })
            .collect()
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_csv(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pile_viewer_loader_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn splits_time_from_node_columns() {
        let path = write_csv(
            "shape.csv",
            "0.0,0.1,0.2,0.3\n0.01,0.4,0.5,0.6\n0.02,0.7,0.8,0.9\n0.03,1.0,1.1,1.2\n0.04,1.3,1.4,1.5\n",
        );
        let table = TimeSeriesLoader::load_csv(&path).unwrap();

        assert_eq!(table.time_steps(), 5);
        assert_eq!(table.node_count(), 3);
        assert_eq!(table.time(), &[0.0, 0.01, 0.02, 0.03, 0.04]);
        assert_eq!(table.node(1).unwrap(), &[0.2, 0.5, 0.8, 1.1, 1.4]);
        assert_eq!(table.row(2).unwrap(), vec![0.7, 0.8, 0.9]);
        assert!(table.row(5).is_none());
    }

    #[test]
    fn integer_columns_are_widened() {
        let path = write_csv("ints.csv", "0,1,-2\n1,3,4\n");
        let table = TimeSeriesLoader::load_csv(&path).unwrap();

        assert_eq!(table.time(), &[0.0, 1.0]);
        assert_eq!(table.node(1).unwrap(), &[-2.0, 4.0]);
    }

    #[test]
    fn non_numeric_token_fails() {
        let path = write_csv("text.csv", "0.0,1.0\n0.1,abc\n");
        let err = TimeSeriesLoader::load_csv(&path).unwrap_err();
        assert!(matches!(err, LoaderError::NonNumeric { column: 1 }));
    }

    #[test]
    fn spaces_after_commas_are_accepted() {
        let path = write_csv("spaced.csv", "0.0, 0.1, 0.2\n0.01, 0.3, 0.4\n");
        let table = TimeSeriesLoader::load_csv(&path).unwrap();

        assert_eq!(table.time(), &[0.0, 0.01]);
        assert_eq!(table.node_count(), 2);
        assert_eq!(table.node(0).unwrap(), &[0.1, 0.3]);
        assert_eq!(table.node(1).unwrap(), &[0.2, 0.4]);
    }

    #[test]
    fn padded_non_numeric_token_fails() {
        let path = write_csv("spaced_text.csv", "0.0, 1.0\n0.1, abc\n");
        let err = TimeSeriesLoader::load_csv(&path).unwrap_err();
        assert!(matches!(err, LoaderError::NonNumeric { column: 1 }));
    }

    #[test]
    fn ragged_rows_fail() {
        let path = write_csv("ragged.csv", "0.0,1.0,2.0\n0.1,1.5\n0.2,1.7,2.2\n");
        assert!(TimeSeriesLoader::load_csv(&path).is_err());
    }

    #[test]
    fn missing_file_fails() {
        assert!(TimeSeriesLoader::load_csv(Path::new("no/such/output.csv")).is_err());
    }

    #[test]
    fn empty_dataframe_has_no_time_column() {
        let err = TimeSeriesLoader::from_dataframe(&DataFrame::empty()).unwrap_err();
        assert!(matches!(err, LoaderError::NoTimeColumn));
    }
}
