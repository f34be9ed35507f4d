use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::METRICS_FILE_NAME;

/// A metrics file found in a run directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsFile {
    /// Name of the run directory, e.g. `CTP_20251229-140352`
    pub dir_name: String,
    pub path: PathBuf,
}

/// Find the run directories directly under `root` that contain an [`METRICS_FILE_NAME`].
///
/// Directories are visited in file name order. Symlinked run directories are followed. Entries
/// that can't be read are logged and skipped.
pub fn find_metrics_files(root: &Path) -> Vec<MetricsFile> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path().join(METRICS_FILE_NAME);
        if !path.is_file() {
            debug!("No {METRICS_FILE_NAME} in {}", entry.path().display());
            continue;
        }

        found.push(MetricsFile {
            dir_name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    found
}
