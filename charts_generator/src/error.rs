use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that stop report generation.
#[derive(Debug, Error)]
pub enum ChartsError {
    #[error("Directory '{}' does not exist", root.display())]
    RootNotFound { root: PathBuf },
    #[error(
        "No app-metrics.csv files found under '{}'. Expected structure: root_dir/PREFIX_TIMESTAMP/app-metrics.csv",
        root.display()
    )]
    NoRunsFound { root: PathBuf },
    #[error("Failed to serialize chart data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write report to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A run whose metrics could not be loaded. The run is left out of the report.
#[derive(Debug, Error)]
pub enum RunLoadError {
    #[error("Failed to read metrics: {0}")]
    Polars(#[from] PolarsError),
    #[error("No samples recorded")]
    Empty,
}

/// The percentile summary could not be loaded. The report is produced without its chart.
#[derive(Debug, Error)]
pub enum SummaryLoadError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },
    #[error("Could not load {}: {source}", path.display())]
    Polars {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Could not load {}: no data row", path.display())]
    NoDataRow { path: PathBuf },
    #[error("Could not load {}: value for '{column}' is not numeric", path.display())]
    NotNumeric { path: PathBuf, column: String },
}
