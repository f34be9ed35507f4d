use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use crate::error::RunLoadError;

/// CPU usage of the sampled process, where 100 is one fully used core
pub const CPU_PERCENT_PER_CORE: &str = "cpu_percent_per_core";
/// Resident set size of the sampled process in KB
pub const RSS_KB: &str = "rss_kb";
/// Number of threads in the sampled process
pub const THREADS: &str = "threads";

/// Load the samples of one run from its metrics CSV.
///
/// Only the metric columns are kept, so any recorded timestamp column is dropped here. A file
/// that is missing one of the metric columns, holds values that don't convert to numbers, or has
/// no samples at all is rejected.
///
/// The metric column types are fixed up front rather than guessed from the leading rows, so a
/// column that only holds whole numbers early in a long run still reads later decimals.
pub fn load_run_metrics(path: &Path) -> Result<DataFrame, RunLoadError> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(metric_schema())))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    project_metrics(frame)
}

fn metric_schema() -> Schema {
    Schema::from_iter([
        (PlSmallStr::from_static(CPU_PERCENT_PER_CORE), DataType::Float64),
        (PlSmallStr::from_static(RSS_KB), DataType::Float64),
        (PlSmallStr::from_static(THREADS), DataType::Int64),
    ])
}

fn project_metrics(frame: DataFrame) -> Result<DataFrame, RunLoadError> {
    let frame = frame
        .lazy()
        .select([
            col(CPU_PERCENT_PER_CORE).strict_cast(DataType::Float64),
            col(RSS_KB).strict_cast(DataType::Float64),
            col(THREADS).strict_cast(DataType::Int64),
        ])
        .collect()?;

    if frame.height() == 0 {
        return Err(RunLoadError::Empty);
    }

    Ok(frame)
}
