use std::path::PathBuf;

use itertools::Itertools;

/// Something that happened while generating a report.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Discovery started under this absolute root
    Scanning { root: PathBuf },
    /// A run was loaded and put on the shared time axis. `label` is before collision resolution.
    RunLoaded {
        dir_name: String,
        label: String,
        rows: usize,
        duration: i64,
    },
    /// A run could not be loaded and is left out of the report
    RunSkipped { path: PathBuf, reason: String },
    /// All runs are loaded, with their final labels in report order
    RunsLabelled { labels: Vec<String>, max_duration: i64 },
    SummaryLoaded { categories: usize },
    /// The summary chart is left out of the report
    SummarySkipped { reason: String },
    ReportWritten { path: PathBuf },
    /// The report exists but could not be opened
    ViewerFailed { path: PathBuf, reason: String },
}

/// A side channel for [`ProgressEvent`]s.
pub trait Progress {
    fn notify(&mut self, event: ProgressEvent);
}

/// Writes [`ProgressEvent`]s to the log.
#[derive(Debug, Default)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn notify(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Scanning { root } => info!("Scanning directory: {}", root.display()),
            ProgressEvent::RunLoaded {
                dir_name,
                label,
                rows,
                duration,
            } => info!(
                "Loaded: {dir_name} -> Label: '{label}' ({rows} rows, {duration}s duration)"
            ),
            ProgressEvent::RunSkipped { path, reason } => {
                error!("Error loading {}: {reason}", path.display())
            }
            ProgressEvent::RunsLabelled {
                labels,
                max_duration,
            } => {
                info!(
                    "Found {} datasets: [{}]",
                    labels.len(),
                    labels.iter().map(|l| format!("'{l}'")).join(", ")
                );
                info!("Max duration across all datasets: {max_duration} seconds");
            }
            ProgressEvent::SummaryLoaded { categories } => {
                info!("Loaded 95th percentile data: {categories} configurations")
            }
            ProgressEvent::SummarySkipped { reason } => {
                warn!("{reason}, skipping 95th percentile chart")
            }
            ProgressEvent::ReportWritten { path } => info!("Chart saved to: {}", path.display()),
            ProgressEvent::ViewerFailed { path, reason } => {
                warn!("Could not open {} in a browser: {reason}", path.display())
            }
        }
    }
}

/// Keeps every event, in order.
impl Progress for Vec<ProgressEvent> {
    fn notify(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}
