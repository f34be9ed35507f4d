//! Compare process metrics recorded during benchmark runs.
//!
//! Each run directory under a root holds an [`METRICS_FILE_NAME`] sampled every two seconds. The
//! runs are labelled by their directory name, put on a shared time axis and drawn together in one
//! HTML report, optionally with a bar chart from a [`SUMMARY_FILE_NAME`] next to the runs.

#[macro_use]
extern crate log;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub mod compose;
pub mod document;
pub mod error;
pub mod frame;
pub mod label;
pub mod locate;
pub mod options;
pub mod progress;
pub mod summary;
pub mod timeline;
pub mod viewer;

pub use error::{ChartsError, RunLoadError, SummaryLoadError};
pub use options::ReportOptions;
pub use progress::{LogProgress, Progress, ProgressEvent};
pub use timeline::RunSamples;
pub use viewer::{NoViewer, SystemBrowser, Viewer};

/// Metrics file written into each run directory by the sampler
pub const METRICS_FILE_NAME: &str = "app-metrics.csv";
/// Optional percentile summary in the root directory
pub const SUMMARY_FILE_NAME: &str = "results-95-percentile.csv";
/// The generated report, written to the root directory
pub const REPORT_FILE_NAME: &str = "jvm_metrics_comparison.html";

/// Load every run under `root` with a unique label and in label order.
///
/// Runs that fail to load are reported to `progress` and left out. Fails if no run could be
/// loaded at all.
pub fn load_runs<P>(
    root: &Path,
    progress: &mut P,
) -> Result<BTreeMap<String, RunSamples>, ChartsError>
where
    P: Progress + ?Sized,
{
    let mut loaded = Vec::new();
    for metrics_file in locate::find_metrics_files(root) {
        let label = label::strip_timestamp_suffix(&metrics_file.dir_name).to_string();

        let samples = frame::load_run_metrics(&metrics_file.path)
            .and_then(|frame| RunSamples::normalize(frame).map_err(RunLoadError::from));
        match samples {
            Ok(samples) => {
                progress.notify(ProgressEvent::RunLoaded {
                    dir_name: metrics_file.dir_name,
                    label: label.clone(),
                    rows: samples.len(),
                    duration: samples.duration(),
                });
                loaded.push((label, samples));
            }
            Err(e) => progress.notify(ProgressEvent::RunSkipped {
                path: metrics_file.path,
                reason: e.to_string(),
            }),
        }
    }

    if loaded.is_empty() {
        return Err(ChartsError::NoRunsFound {
            root: root.to_path_buf(),
        });
    }

    Ok(label::assign_unique_labels(loaded))
}

/// Generate the comparison report for the runs under `root`.
///
/// The report is written to [`REPORT_FILE_NAME`] in `root`, replacing any earlier report, and
/// handed to the `viewer`. Returns the absolute path of the report. A missing or broken summary
/// and a viewer failure are reported to `progress` and don't fail generation.
pub fn generate_report<P, V>(
    root: &Path,
    options: &ReportOptions,
    progress: &mut P,
    viewer: &V,
) -> Result<PathBuf, ChartsError>
where
    P: Progress + ?Sized,
    V: Viewer + ?Sized,
{
    if !root.exists() {
        return Err(ChartsError::RootNotFound {
            root: root.to_path_buf(),
        });
    }

    progress.notify(ProgressEvent::Scanning {
        root: absolute(root),
    });

    let runs = load_runs(root, progress)?;
    let max_duration = timeline::max_duration(runs.values());
    progress.notify(ProgressEvent::RunsLabelled {
        labels: runs.keys().cloned().collect(),
        max_duration,
    });

    let summary = match summary::load_summary_table(&root.join(SUMMARY_FILE_NAME)) {
        Ok(summary) => {
            progress.notify(ProgressEvent::SummaryLoaded {
                categories: summary.len(),
            });
            Some(summary)
        }
        Err(e) => {
            progress.notify(ProgressEvent::SummarySkipped {
                reason: e.to_string(),
            });
            None
        }
    };

    let charts = compose::compose_charts(&runs, max_duration, summary.as_ref(), options)?;
    let html = document::render_document(&charts, options)?;

    let report_path = absolute(&root.join(REPORT_FILE_NAME));
    std::fs::write(&report_path, html).map_err(|source| ChartsError::Write {
        path: report_path.clone(),
        source,
    })?;
    progress.notify(ProgressEvent::ReportWritten {
        path: report_path.clone(),
    });

    if let Err(e) = viewer.open(&report_path) {
        progress.notify(ProgressEvent::ViewerFailed {
            path: report_path.clone(),
            reason: e.to_string(),
        });
    }

    Ok(report_path)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
