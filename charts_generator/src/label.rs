use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Run directories are named `<PREFIX>_<YYYYMMDD>-<HHMMSS>` by the metrics sampler.
static TIMESTAMP_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\d{8}-\d{6}$").expect("valid timestamp suffix pattern"));

/// Derive a run label from its directory name by removing a trailing `_YYYYMMDD-HHMMSS` stamp.
///
/// Names without the stamp are returned unchanged. Only the final stamp is removed.
pub fn strip_timestamp_suffix(dir_name: &str) -> &str {
    match TIMESTAMP_SUFFIX.find(dir_name) {
        Some(stamp) => &dir_name[..stamp.start()],
        None => dir_name,
    }
}

/// Give every run a unique label.
///
/// Runs are visited in the given order. The first run with a label keeps it, later runs with the
/// same label get the first free candidate from `<label>_1`, `<label>_2`, ...
///
/// The result is ordered by label.
pub fn assign_unique_labels<T, I>(runs: I) -> BTreeMap<String, T>
where
    I: IntoIterator<Item = (String, T)>,
{
    let mut labelled = BTreeMap::new();
    for (base, run) in runs {
        let mut label = base.clone();
        let mut counter = 1;
        while labelled.contains_key(&label) {
            label = format!("{base}_{counter}");
            counter += 1;
        }
        if label != base {
            debug!("Label '{base}' already taken, using '{label}'");
        }
        labelled.insert(label, run);
    }
    labelled
}
