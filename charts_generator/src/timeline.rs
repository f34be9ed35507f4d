use polars::prelude::*;

use crate::frame::{CPU_PERCENT_PER_CORE, RSS_KB, THREADS};

/// Seconds between two samples on the synthetic time axis
pub const SAMPLE_INTERVAL_SECS: i64 = 2;
/// Column holding the synthetic time axis
pub const RELATIVE_TIME: &str = "relative_time";

/// The samples of one run on the shared time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSamples {
    /// Seconds since the first sample, `0, 2, 4, ...`
    pub relative_time: Vec<i64>,
    pub cpu_percent_per_core: Vec<Option<f64>>,
    pub rss_kb: Vec<Option<f64>>,
    pub threads: Vec<Option<i64>>,
}

impl RunSamples {
    /// Put a run's samples on the synthetic time axis and extract them.
    ///
    /// Expects the metric columns as loaded by [`crate::frame::load_run_metrics`].
    ///
    /// The recorded timestamps are not trusted, the sample position alone decides the time. Sample
    /// order is preserved and no samples are dropped.
    pub fn normalize(frame: DataFrame) -> PolarsResult<Self> {
        let frame = with_relative_time(frame)?;

        Ok(Self {
            relative_time: frame.column(RELATIVE_TIME)?.i64()?.into_no_null_iter().collect(),
            cpu_percent_per_core: frame
                .column(CPU_PERCENT_PER_CORE)?
                .f64()?
                .into_iter()
                .collect(),
            rss_kb: frame.column(RSS_KB)?.f64()?.into_iter().collect(),
            threads: frame.column(THREADS)?.i64()?.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.relative_time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relative_time.is_empty()
    }

    /// Span of the time axis in seconds
    pub fn duration(&self) -> i64 {
        run_duration(self.len())
    }
}

/// Replace any existing [`RELATIVE_TIME`] column with `0, 2, 4, ...` by row position.
fn with_relative_time(mut frame: DataFrame) -> PolarsResult<DataFrame> {
    let axis = (0..frame.height() as i64)
        .map(|i| i * SAMPLE_INTERVAL_SECS)
        .collect::<Vec<_>>();
    frame.with_column(Series::new(RELATIVE_TIME.into(), axis))?;
    Ok(frame)
}

/// Span in seconds of a run with `record_count` samples
pub fn run_duration(record_count: usize) -> i64 {
    record_count.saturating_sub(1) as i64 * SAMPLE_INTERVAL_SECS
}

/// The longest duration across runs, used as the shared upper bound of every time axis.
pub fn max_duration<'a>(runs: impl IntoIterator<Item = &'a RunSamples>) -> i64 {
    runs.into_iter()
        .map(RunSamples::duration)
        .max()
        .unwrap_or_default()
}
